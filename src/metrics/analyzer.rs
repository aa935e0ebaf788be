use{
    crate::errors::*,
    crate::network::*,
    std::collections::{HashMap, VecDeque}
};

/// Weighted average shortest path length over a possibly disconnected
/// graph.
///
/// Each connected component contributes its own mean shortest path length
/// (over ordered node pairs), and the component means are combined into a
/// single mean weighted by component size. This is deliberately *not* the
/// giant-component-only figure: small components count too.
///
/// Single-node components carry no path, so they are excluded from both
/// the values and the weights. A graph without any component of at least
/// two nodes fails with `DisconnectedPathUndefined`.
pub fn average_shortest_path_length<N: GraphNode>(graph: &Network<N>) -> NetResult<f64>
{
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for component in graph.connected_components(){
        let size = component.len();
        if size < 2{
            continue;
        }
        let mut dist_sum: usize = 0;
        for &node in &component{
            dist_sum += bfs_distances(graph, node)
                .values()
                .sum::<usize>();
        }
        let mean = dist_sum as f64 / (size * (size - 1)) as f64;
        weighted_sum += mean * size as f64;
        total_weight += size as f64;
    }

    if total_weight == 0.0{
        return Err(NetError::DisconnectedPathUndefined);
    }
    Ok(weighted_sum / total_weight)
}

/// Hop distances from `start` to every node reachable from it,
/// `start` included with distance 0.
fn bfs_distances<N: GraphNode>(graph: &Network<N>, start: N) -> HashMap<N, usize>
{
    let mut dist = HashMap::new();
    dist.insert(start, 0);
    let mut queue = VecDeque::new();
    queue.push_back(start);
    while let Some(node) = queue.pop_front(){
        let d = dist[&node];
        for neighbor in graph.neighbors(node){
            if !dist.contains_key(&neighbor){
                dist.insert(neighbor, d + 1);
                queue.push_back(neighbor);
            }
        }
    }
    dist
}

/// Mean local clustering coefficient over all nodes. Nodes of degree
/// below two contribute 0; the empty graph yields 0.
pub fn average_clustering<N: GraphNode>(graph: &Network<N>) -> f64
{
    let nodes = graph.nodes();
    if nodes.is_empty(){
        return 0.0;
    }
    let sum: f64 = nodes.iter()
        .map(|&node| local_clustering(graph, node))
        .sum();
    sum / nodes.len() as f64
}

fn local_clustering<N: GraphNode>(graph: &Network<N>, node: N) -> f64
{
    let neighbors = graph.neighbors(node);
    let deg = neighbors.len();
    if deg < 2{
        return 0.0;
    }
    let mut links = 0;
    for (i, &u) in neighbors.iter().enumerate(){
        for &v in &neighbors[i + 1..]{
            if graph.has_edge(u, v){
                links += 1;
            }
        }
    }
    let possible = deg * (deg - 1) / 2;
    links as f64 / possible as f64
}

/// The analyzer entry point: `(L, C)` for one graph.
pub fn calculate_metrics<N: GraphNode>(graph: &Network<N>) -> NetResult<(f64, f64)>
{
    let l = average_shortest_path_length(graph)?;
    let c = average_clustering(graph);
    Ok((l, c))
}

#[cfg(test)]
mod testing
{
    use super::*;

    fn triangle() -> Network<usize>
    {
        let mut g = Network::new();
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 0);
        g
    }

    #[test]
    fn triangle_metrics()
    {
        let g = triangle();
        let (l, c) = calculate_metrics(&g).unwrap();
        assert_eq!(l, 1.0);
        assert_eq!(c, 1.0);
    }

    #[test]
    fn path_graph_mean_distance()
    {
        let mut g = Network::new();
        g.add_edge(0_usize, 1);
        g.add_edge(1, 2);
        let l = average_shortest_path_length(&g).unwrap();
        assert!((l - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(average_clustering(&g), 0.0);
    }

    #[test]
    fn components_are_weighted_by_size()
    {
        // P3 (L = 4/3, weight 3) + K2 (L = 1, weight 2), singleton excluded
        let mut g = Network::new();
        g.add_edge(0_usize, 1);
        g.add_edge(1, 2);
        g.add_edge(10, 11);
        g.add_node(99);
        let l = average_shortest_path_length(&g).unwrap();
        assert!((l - 1.2).abs() < 1e-12);
    }

    #[test]
    fn all_singletons_is_undefined()
    {
        let mut g: Network<usize> = Network::new();
        g.add_node(0);
        g.add_node(1);
        assert_eq!(
            average_shortest_path_length(&g),
            Err(NetError::DisconnectedPathUndefined)
        );

        let empty: Network<usize> = Network::new();
        assert_eq!(
            average_shortest_path_length(&empty),
            Err(NetError::DisconnectedPathUndefined)
        );
    }

    #[test]
    fn star_graph_has_zero_clustering()
    {
        let mut g = Network::new();
        g.add_edge(0_usize, 1);
        g.add_edge(0, 2);
        g.add_edge(0, 3);
        assert_eq!(average_clustering(&g), 0.0);
    }

    #[test]
    fn clustering_stays_in_unit_interval()
    {
        use crate::generators::*;
        use rand_pcg::Pcg64;
        use rand::SeedableRng;

        let mut rng = Pcg64::seed_from_u64(31);
        let g = RandomGraph::new(60, 0.15)
            .unwrap()
            .generate(&mut rng)
            .unwrap();
        let c = average_clustering(&g);
        assert!((0.0..=1.0).contains(&c));
    }

    #[test]
    fn clustering_of_empty_graph_is_zero()
    {
        let g: Network<usize> = Network::new();
        assert_eq!(average_clustering(&g), 0.0);
    }
}
