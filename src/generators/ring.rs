use{
    super::*,
    crate::errors::*,
    crate::network::*,
    serde::{Serialize, Deserialize},
    rand::Rng
};

/// Ring lattice: node `i` is adjacent to `i±1 .. i±k/2` modulo `n`.
/// Fully deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingLattice{
    n: usize,
    k: usize
}

impl RingLattice{
    pub fn new(n: usize, k: usize) -> NetResult<Self>
    {
        check_ring_params(n, k)?;
        Ok(
            Self{
                n,
                k
            }
        )
    }

    pub fn n(&self) -> usize
    {
        self.n
    }

    pub fn k(&self) -> usize
    {
        self.k
    }
}

pub(crate) fn check_ring_params(n: usize, k: usize) -> NetResult<()>
{
    if n == 0{
        return Err(NetError::invalid_param("n", "node count must be positive"));
    }
    if k % 2 != 0{
        return Err(
            NetError::invalid_param("k", format!("neighbor count must be even, got {}", k))
        );
    }
    if k >= n{
        return Err(
            NetError::invalid_param("k", format!("neighbor count {} must be below node count {}", k, n))
        );
    }
    Ok(())
}

pub(crate) fn build_ring_lattice(n: usize, k: usize) -> Network<usize>
{
    let mut graph = Network::new();
    for i in 0..n{
        graph.add_node(i);
    }
    let half_k = k / 2;
    for i in 0..n{
        for j in 1..=half_k{
            graph.add_edge(i, (i + j) % n);
            graph.add_edge(i, (i + n - j) % n);
        }
    }
    graph
}

impl NetworkGenerator for RingLattice{
    type Node = usize;

    fn generate<R: Rng>(&self, _rng: &mut R) -> NetResult<Network<usize>>
    {
        Ok(build_ring_lattice(self.n, self.k))
    }
}

#[cfg(test)]
mod testing
{
    use super::*;
    use rand_pcg::Pcg64;
    use rand::SeedableRng;
    use rstest::rstest;

    #[rstest]
    #[case(10, 4)]
    #[case(11, 4)]
    #[case(20, 6)]
    #[case(5, 2)]
    fn every_node_has_degree_k(#[case] n: usize, #[case] k: usize)
    {
        let mut rng = Pcg64::seed_from_u64(0);
        let g = RingLattice::new(n, k)
            .unwrap()
            .generate(&mut rng)
            .unwrap();
        assert_eq!(g.vertex_count(), n);
        assert_eq!(g.edge_count(), n * k / 2);
        for node in g.nodes(){
            assert_eq!(g.degree(node), k);
        }
    }

    #[test]
    fn ten_four_neighborhoods()
    {
        let mut rng = Pcg64::seed_from_u64(0);
        let g = RingLattice::new(10, 4)
            .unwrap()
            .generate(&mut rng)
            .unwrap();
        // i±1, i±2 mod 10
        assert_eq!(g.neighbors(0), vec![1, 2, 8, 9]);
        assert_eq!(g.neighbors(9), vec![0, 1, 7, 8]);
    }

    #[test]
    fn zero_k_means_no_edges()
    {
        let mut rng = Pcg64::seed_from_u64(0);
        let g = RingLattice::new(3, 0)
            .unwrap()
            .generate(&mut rng)
            .unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 0);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(10, 3)]
    #[case(4, 4)]
    #[case(4, 6)]
    fn bad_params_are_rejected(#[case] n: usize, #[case] k: usize)
    {
        assert!(matches!(
            RingLattice::new(n, k),
            Err(NetError::InvalidParameter{..})
        ));
    }
}
