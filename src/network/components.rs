use{
    super::*,
    std::collections::{HashSet, VecDeque}
};

impl<N: GraphNode> Network<N>{
    /// Partition the node set into maximal connected components via BFS.
    /// Components are ordered by their smallest member and each member
    /// list is sorted.
    pub fn connected_components(&self) -> Vec<Vec<N>>
    {
        let mut visited: HashSet<N> = HashSet::with_capacity(self.vertex_count());
        let mut components = Vec::new();

        for start in self.nodes(){
            if visited.contains(&start){
                continue;
            }
            let mut member_list = Vec::new();
            let mut queue = VecDeque::new();
            visited.insert(start);
            queue.push_back(start);
            while let Some(node) = queue.pop_front(){
                member_list.push(node);
                for neighbor in self.neighbors(node){
                    if visited.insert(neighbor){
                        queue.push_back(neighbor);
                    }
                }
            }
            member_list.sort_unstable();
            components.push(member_list);
        }
        components
    }
}
