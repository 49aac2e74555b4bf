//! Raw 6-DoF sensor readings

use serde::{Deserialize, Serialize};
use spacecam_math::{Quat, Vec3};

/// One instantaneous reading from the device
///
/// Values are in device coordinates. Use [`SensorSample::camera_translation`]
/// and [`SensorSample::camera_rotation`] to get them in camera convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorSample {
    /// Translation axes as reported by the driver
    pub translation: Vec3,
    /// Rotation axes as reported by the driver
    pub rotation: Vec3,
    /// Rotation angle around `rotation`, in degrees
    #[serde(default)]
    pub rotation_angle: f32,
}

impl SensorSample {
    pub fn new(translation: Vec3, rotation: Vec3) -> Self {
        Self { translation, rotation, rotation_angle: 0.0 }
    }

    /// Builder: set the rotation angle
    pub fn with_rotation_angle(mut self, degrees: f32) -> Self {
        self.rotation_angle = degrees;
        self
    }

    /// Translation with Z flipped into camera handedness
    #[inline]
    pub fn camera_translation(&self) -> Vec3 {
        self.translation.flip_z()
    }

    /// Rotation axes with Z flipped into camera handedness
    #[inline]
    pub fn camera_rotation(&self) -> Vec3 {
        self.rotation.flip_z()
    }

    /// Absolute device orientation as a quaternion
    ///
    /// Axis `(-x, -y, z)` by `rotation_angle` degrees. The per-frame camera
    /// transform works on the rate axes instead.
    pub fn rotation_quat(&self) -> Quat {
        let axis = Vec3::new(-self.rotation.x, -self.rotation.y, self.rotation.z);
        Quat::from_axis_angle_degrees(axis, self.rotation_angle)
    }
}
