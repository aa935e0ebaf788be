use{
    super::*,
    crate::errors::*,
    crate::network::*,
    serde::{Serialize, Deserialize},
    rand::Rng,
    rand::seq::SliceRandom,
    tracing::debug
};

/// The two rewiring schemes found in the wild for Watts–Strogatz style
/// graphs. They are not equivalent and both are part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewirePolicy{
    /// Visit every lattice edge once and rewire it with probability `p`,
    /// keeping `u` fixed and rejection-sampling a fresh endpoint.
    PerEdge,
    /// Draw exactly `floor(|E| * p)` distinct edges without replacement,
    /// hold a fair-coin endpoint fixed and pick the new endpoint uniformly
    /// from the eligible set.
    FixedCount
}

/// Watts–Strogatz small-world generator: ring lattice `(n, k)` plus
/// stochastic edge rewiring with probability `p`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmallWorld{
    n: usize,
    k: usize,
    p: f64,
    policy: RewirePolicy
}

// bound on the rejection sampling loop, scaled by n so that a single
// eligible endpoint is still found with overwhelming probability
const REWIRE_ATTEMPTS_PER_NODE: usize = 100;

impl SmallWorld{
    pub fn new(n: usize, k: usize, p: f64, policy: RewirePolicy) -> NetResult<Self>
    {
        check_ring_params(n, k)?;
        check_probability("p", p)?;
        Ok(
            Self{
                n,
                k,
                p,
                policy
            }
        )
    }

    pub fn rewire_prob(&self) -> f64
    {
        self.p
    }

    pub fn policy(&self) -> RewirePolicy
    {
        self.policy
    }

    fn rewire_per_edge<R: Rng>(&self, graph: &mut Network<usize>, rng: &mut R) -> NetResult<usize>
    {
        let mut rewired = 0;
        for (u, v) in graph.edges(){
            if rng.gen::<f64>() >= self.p{
                continue;
            }
            // u keeps every other neighbour, so a full neighbourhood
            // means there is nothing left to rewire to
            if graph.degree(u) == self.n - 1{
                return Err(NetError::RewiringExhausted{ node: u });
            }
            graph.remove_edge(u, v);
            let limit = REWIRE_ATTEMPTS_PER_NODE * self.n;
            let mut attempt = 0;
            let new_node = loop{
                if attempt == limit{
                    return Err(NetError::RewiringExhausted{ node: u });
                }
                attempt += 1;
                let candidate = rng.gen_range(0..self.n);
                if candidate != u && !graph.has_edge(u, candidate){
                    break candidate;
                }
            };
            graph.add_edge(u, new_node);
            rewired += 1;
        }
        Ok(rewired)
    }

    fn rewire_fixed_count<R: Rng>(&self, graph: &mut Network<usize>, rng: &mut R) -> NetResult<usize>
    {
        let mut edges = graph.edges();
        let num_rewire = (edges.len() as f64 * self.p).floor() as usize;
        let (chosen, _) = edges.partial_shuffle(rng, num_rewire);

        for &mut (u, v) in chosen{
            graph.remove_edge(u, v);
            let fixed = if rng.gen::<f64>() < 0.5{
                u
            } else {
                v
            };
            let eligible: Vec<usize> = (0..self.n)
                .filter(|&w| w != fixed && !graph.has_edge(fixed, w))
                .collect();
            match eligible.choose(rng){
                Some(&new_node) => {
                    graph.add_edge(fixed, new_node);
                }
                None => return Err(NetError::RewiringExhausted{ node: fixed })
            }
        }
        Ok(num_rewire)
    }
}

impl NetworkGenerator for SmallWorld{
    type Node = usize;

    fn generate<R: Rng>(&self, rng: &mut R) -> NetResult<Network<usize>>
    {
        let mut graph = build_ring_lattice(self.n, self.k);
        let rewired = match self.policy{
            RewirePolicy::PerEdge => self.rewire_per_edge(&mut graph, rng)?,
            RewirePolicy::FixedCount => self.rewire_fixed_count(&mut graph, rng)?
        };
        debug!(
            n = self.n,
            k = self.k,
            p = self.p,
            policy = ?self.policy,
            rewired,
            "generated small world graph"
        );
        Ok(graph)
    }
}
