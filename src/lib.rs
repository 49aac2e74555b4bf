//! SpaceCam - 6-DoF camera control for city-builder hosts
//!
//! Library half of the `spacecam` binary: configuration, the host-facing
//! plugin, and a simulated host to run it against.

pub mod config;
pub mod host;
pub mod input;
pub mod plugin;
pub mod systems;

pub use plugin::{SpaceMousePlugin, ThreadingExtension};
