pub mod graph;
pub use graph::*;

pub mod components;
pub use components::*;
