//! Camera Mathematics Library
//!
//! This crate provides the small set of 3D types the SpaceCam controller needs.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Quat`] - Unit quaternion rotation
//!
//! ## Angles
//!
//! - [`wrap_degrees_once`] - Single-step wrap of an angle into (-180, 180]

mod vec3;
mod quat;
pub mod angle;

pub use vec3::Vec3;
pub use quat::Quat;
pub use angle::wrap_degrees_once;
