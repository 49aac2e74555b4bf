//! Simulated host
//!
//! Stands in for the city-builder's camera controller so the plugin can run headless.

mod host_camera;

pub use host_camera::HostCamera;
