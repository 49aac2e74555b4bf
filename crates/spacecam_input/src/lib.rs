//! 6-DoF Input Handling
//!
//! This crate turns readings from a six-degree-of-freedom controller
//! ("space mouse") into camera target updates.
//!
//! - [`SpaceMouseController`] - per-frame transform from a sensor sample to camera targets
//! - [`CameraTarget`] - the host camera, injected into the transform
//! - [`SixDofDevice`] / [`DeviceConnection`] - device driver seam and its lifecycle wrapper
//! - [`LogSink`] - best-effort plugin logging

mod camera_controller;
mod sensor;
mod device;
mod device_error;
mod log_sink;
pub mod mock;

pub use camera_controller::{CameraTarget, SpaceMouseController, TargetAngle};
pub use sensor::SensorSample;
pub use device::{DeviceConnection, DeviceFactory, DeviceState, SixDofDevice};
pub use device_error::DeviceError;
pub use log_sink::{LogSink, MemorySink, NullSink, TaggedLogger};
pub use mock::MockDevice;
