use thiserror::Error;

/// Errors reported by generators, the analyzer and the SIR simulator.
///
/// Everything is surfaced synchronously to the caller; nothing in the
/// crate retries on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetError{
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter{
        name: &'static str,
        reason: String
    },

    /// Rewiring could not find an eligible new endpoint for `node`.
    /// Happens on complete or near-complete graphs, where every other
    /// node is already a neighbour.
    #[error("rewiring exhausted for node {node}: no eligible endpoint")]
    RewiringExhausted{
        node: usize
    },

    /// The graph has no connected component with at least two nodes,
    /// so no shortest path exists to average over.
    #[error("average shortest path length undefined: no component with at least two nodes")]
    DisconnectedPathUndefined,
}

impl NetError{
    pub fn invalid_param<R: Into<String>>(name: &'static str, reason: R) -> Self
    {
        Self::InvalidParameter{
            name,
            reason: reason.into()
        }
    }
}

pub type NetResult<T> = Result<T, NetError>;

pub(crate) fn check_probability(name: &'static str, p: f64) -> NetResult<()>
{
    if !(0.0..=1.0).contains(&p){
        return Err(
            NetError::invalid_param(name, format!("probability must be in [0,1], got {}", p))
        );
    }
    Ok(())
}
