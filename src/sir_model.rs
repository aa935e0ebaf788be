pub mod sir_states;
pub use sir_states::*;

pub mod trace;
pub use trace::*;

pub mod simulator;
pub use simulator::*;
