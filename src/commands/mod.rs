//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::{SimpleSummary, run_simple, run_simple_with};
pub use simulate::{SimulateConfig, SimulationResult, run_simulation};
