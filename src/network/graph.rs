use std::{
    collections::{HashMap, HashSet},
    fmt::Debug,
    hash::Hash
};

/// Node identifiers. `usize` for ring/random graphs, `(usize, usize)`
/// grid coordinates for lattice graphs.
pub trait GraphNode: Copy + Eq + Ord + Hash + Debug {}
impl<T> GraphNode for T where T: Copy + Eq + Ord + Hash + Debug {}

/// Undirected simple graph: no self loops, no multi edges.
///
/// Adjacency is a hash map of hash sets, so `has_edge` and `degree` are O(1).
/// Hash iteration order is not deterministic, which is why `nodes`,
/// `edges` and `neighbors` hand out *sorted* snapshots — everything
/// downstream that feeds an rng (edge sampling, the SIR neighbour scan)
/// must go through these so that a fixed seed reproduces the same run.
#[derive(Debug, Clone)]
pub struct Network<N: GraphNode>{
    adj: HashMap<N, HashSet<N>>,
    edge_count: usize
}

impl<N: GraphNode> Default for Network<N>{
    fn default() -> Self{
        Self::new()
    }
}

impl<N: GraphNode> Network<N>{
    pub fn new() -> Self
    {
        Self{
            adj: HashMap::new(),
            edge_count: 0
        }
    }

    /// Insert a node. Returns false if it was already present.
    pub fn add_node(&mut self, node: N) -> bool
    {
        match self.adj.entry(node){
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(e) => {
                e.insert(HashSet::new());
                true
            }
        }
    }

    /// Insert the undirected edge {u, v}. Missing endpoints are inserted
    /// as nodes. Idempotent: adding an existing edge is a no-op returning
    /// false. Self loops are rejected the same way (no-op, false).
    pub fn add_edge(&mut self, u: N, v: N) -> bool
    {
        if u == v{
            return false;
        }
        self.add_node(u);
        self.add_node(v);
        let inserted = self.adj.get_mut(&u)
            .map(|set| set.insert(v))
            .unwrap_or(false);
        if inserted{
            if let Some(set) = self.adj.get_mut(&v){
                set.insert(u);
            }
            self.edge_count += 1;
        }
        inserted
    }

    /// Remove the undirected edge {u, v}. Removing an absent edge is a
    /// no-op returning false.
    pub fn remove_edge(&mut self, u: N, v: N) -> bool
    {
        let removed = self.adj.get_mut(&u)
            .map(|set| set.remove(&v))
            .unwrap_or(false);
        if removed{
            if let Some(set) = self.adj.get_mut(&v){
                set.remove(&u);
            }
            self.edge_count -= 1;
        }
        removed
    }

    pub fn has_node(&self, node: N) -> bool
    {
        self.adj.contains_key(&node)
    }

    pub fn has_edge(&self, u: N, v: N) -> bool
    {
        self.adj.get(&u)
            .map(|set| set.contains(&v))
            .unwrap_or(false)
    }

    /// Degree of `node`, 0 for unknown nodes.
    pub fn degree(&self, node: N) -> usize
    {
        self.adj.get(&node)
            .map(|set| set.len())
            .unwrap_or(0)
    }

    /// Sorted snapshot of the neighbours of `node`; empty for unknown nodes.
    pub fn neighbors(&self, node: N) -> Vec<N>
    {
        let mut vec: Vec<N> = self.adj.get(&node)
            .into_iter()
            .flatten()
            .copied()
            .collect();
        vec.sort_unstable();
        vec
    }

    /// Sorted snapshot of all node ids.
    pub fn nodes(&self) -> Vec<N>
    {
        let mut vec: Vec<N> = self.adj.keys().copied().collect();
        vec.sort_unstable();
        vec
    }

    /// Sorted snapshot of all edges as canonical pairs (u < v).
    pub fn edges(&self) -> Vec<(N, N)>
    {
        let mut vec: Vec<(N, N)> = Vec::with_capacity(self.edge_count);
        for (&u, set) in self.adj.iter(){
            for &v in set.iter(){
                if u < v{
                    vec.push((u, v));
                }
            }
        }
        vec.sort_unstable();
        vec
    }

    pub fn vertex_count(&self) -> usize
    {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize
    {
        self.edge_count
    }
}
