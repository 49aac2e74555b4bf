//! Application systems
//!
//! Systems extracted from the main loop.

pub mod simulation;

pub use simulation::{FrameClock, SimulationSystem};
