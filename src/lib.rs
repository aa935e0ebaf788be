//! Small-world network generation and SIR epidemics.
//!
//! Generators build owned [`Network`] values from explicit parameters and
//! an injected rng; the analyzer and the [`SirModel`] consume them. All
//! randomness flows through caller-seeded [`GraphRng`] instances, so
//! every run is reproducible.

pub mod errors;
pub use errors::*;

pub mod misc_types;
pub use misc_types::*;

pub mod network;
pub use network::*;

pub mod generators;
pub use generators::*;

pub mod metrics;
pub use metrics::*;

pub mod sir_model;
pub use sir_model::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
