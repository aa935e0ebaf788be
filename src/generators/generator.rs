use{
    crate::errors::*,
    crate::network::*,
    rand::Rng
};

/// The one capability all graph generators share.
///
/// `generate` returns a fresh owned graph on every call — generators carry
/// parameters only, never graph state. The rng is injected by the caller
/// so a fixed seed reproduces the same graph; deterministic generators
/// simply ignore it.
pub trait NetworkGenerator{
    type Node: GraphNode;

    fn generate<R: Rng>(&self, rng: &mut R) -> NetResult<Network<Self::Node>>;
}
