//! Command implementations

pub mod play;
pub mod simulate;

pub use play::run_play;
pub use simulate::{run_simulate, SimulateConfig};
