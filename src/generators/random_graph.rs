use{
    super::*,
    crate::errors::*,
    crate::network::*,
    serde::{Serialize, Deserialize},
    rand::Rng
};

/// Erdős–Rényi G(n, p): every unordered pair gets an edge independently
/// with probability `p`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RandomGraph{
    n: usize,
    p: f64
}

impl RandomGraph{
    pub fn new(n: usize, p: f64) -> NetResult<Self>
    {
        if n == 0{
            return Err(NetError::invalid_param("n", "node count must be positive"));
        }
        check_probability("p", p)?;
        Ok(
            Self{
                n,
                p
            }
        )
    }
}

impl NetworkGenerator for RandomGraph{
    type Node = usize;

    fn generate<R: Rng>(&self, rng: &mut R) -> NetResult<Network<usize>>
    {
        let mut graph = Network::new();
        for i in 0..self.n{
            graph.add_node(i);
        }
        // draws land in [0,1), so p=0 gives no edges and p=1 the complete graph
        for i in 0..self.n{
            for j in (i + 1)..self.n{
                if rng.gen::<f64>() < self.p{
                    graph.add_edge(i, j);
                }
            }
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod testing
{
    use super::*;
    use rand_pcg::Pcg64;
    use rand::SeedableRng;

    #[test]
    fn p_zero_gives_no_edges()
    {
        let mut rng = Pcg64::seed_from_u64(123);
        let g = RandomGraph::new(50, 0.0)
            .unwrap()
            .generate(&mut rng)
            .unwrap();
        assert_eq!(g.vertex_count(), 50);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn p_one_gives_the_complete_graph()
    {
        let mut rng = Pcg64::seed_from_u64(123);
        let g = RandomGraph::new(5, 1.0)
            .unwrap()
            .generate(&mut rng)
            .unwrap();
        assert_eq!(g.edge_count(), 10);
        for i in 0..5_usize{
            assert_eq!(g.degree(i), 4);
        }
    }

    #[test]
    fn fixed_seed_reproduces_the_graph()
    {
        let gen = RandomGraph::new(40, 0.2).unwrap();
        let mut rng_a = Pcg64::seed_from_u64(875629289);
        let mut rng_b = Pcg64::seed_from_u64(875629289);
        let a = gen.generate(&mut rng_a).unwrap();
        let b = gen.generate(&mut rng_b).unwrap();
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn out_of_range_probability_is_rejected()
    {
        assert!(RandomGraph::new(5, -0.1).is_err());
        assert!(RandomGraph::new(5, 1.1).is_err());
        assert!(RandomGraph::new(5, f64::NAN).is_err());
    }
}
