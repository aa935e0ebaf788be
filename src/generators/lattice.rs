use{
    super::*,
    crate::errors::*,
    crate::network::*,
    serde::{Serialize, Deserialize},
    rand::Rng,
    rand::seq::SliceRandom,
    std::collections::HashSet,
    std::num::NonZeroUsize
};

/// 2D grid lattice on `(x, y)` coordinates, `0..width` × `0..height`.
///
/// Either the full grid, or `num_nodes` cells sampled uniformly without
/// replacement (clamped to the grid size). Edges join horizontally and
/// vertically adjacent cells where *both* endpoints were selected —
/// membership is checked against the selected set, never the full grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLattice{
    width: usize,
    height: usize,
    num_nodes: Option<NonZeroUsize>
}

impl GridLattice{
    pub fn new(width: usize, height: usize) -> NetResult<Self>
    {
        Self::build(width, height, None)
    }

    pub fn with_sample(width: usize, height: usize, num_nodes: NonZeroUsize) -> NetResult<Self>
    {
        Self::build(width, height, Some(num_nodes))
    }

    fn build(width: usize, height: usize, num_nodes: Option<NonZeroUsize>) -> NetResult<Self>
    {
        if width == 0{
            return Err(NetError::invalid_param("width", "grid width must be positive"));
        }
        if height == 0{
            return Err(NetError::invalid_param("height", "grid height must be positive"));
        }
        Ok(
            Self{
                width,
                height,
                num_nodes
            }
        )
    }
}

impl NetworkGenerator for GridLattice{
    type Node = (usize, usize);

    fn generate<R: Rng>(&self, rng: &mut R) -> NetResult<Network<(usize, usize)>>
    {
        let mut all_points: Vec<(usize, usize)> = (0..self.width)
            .flat_map(|x| (0..self.height).map(move |y| (x, y)))
            .collect();

        let selected: Vec<(usize, usize)> = match self.num_nodes{
            None => all_points,
            Some(num) => {
                let amount = num.get().min(all_points.len());
                all_points.partial_shuffle(rng, amount).0.to_vec()
            }
        };
        // set membership, not a scan over the selected list
        let selected_set: HashSet<(usize, usize)> = selected.iter().copied().collect();

        let mut graph = Network::new();
        for &point in &selected{
            graph.add_node(point);
        }
        for &(x, y) in &selected{
            if selected_set.contains(&(x, y + 1)){
                graph.add_edge((x, y), (x, y + 1));
            }
            if selected_set.contains(&(x + 1, y)){
                graph.add_edge((x, y), (x + 1, y));
            }
        }
        Ok(graph)
    }
}
