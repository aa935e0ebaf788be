pub mod generator;
pub use generator::*;

pub mod ring;
pub use ring::*;

pub mod lattice;
pub use lattice::*;

pub mod random_graph;
pub use random_graph::*;

pub mod small_world;
pub use small_world::*;
