pub mod analyzer;
pub use analyzer::*;

pub mod sweep;
pub use sweep::*;
