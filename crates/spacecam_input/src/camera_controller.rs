//! Space mouse camera controller
//!
//! Maps a 6-DoF reading onto the host camera's animation targets:
//! - Push/pull and slide: pan across the ground, relative to camera yaw
//! - Lift/press: zoom out/in (the host camera has no separate vertical pan)
//! - Twist: azimuth (left/right)
//! - Tilt: elevation (up/down)
//!
//! Pan speed scales with zoom so that zoomed-out panning covers more ground,
//! and everything scales with the frame delta so it is frame-rate independent.

use serde::{Deserialize, Serialize};
use spacecam_math::{wrap_degrees_once, Quat, Vec3};

use crate::SensorSample;

/// Camera azimuth/elevation pair, in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetAngle {
    /// Left/right, around the vertical axis
    pub azimuth: f32,
    /// Up/down
    pub elevation: f32,
}

impl TargetAngle {
    pub const fn new(azimuth: f32, elevation: f32) -> Self {
        Self { azimuth, elevation }
    }
}

/// Trait for the host camera
/// The controller only ever touches the targets the host eases toward
pub trait CameraTarget {
    fn target_position(&self) -> Vec3;
    fn set_target_position(&mut self, position: Vec3);
    fn target_angle(&self) -> TargetAngle;
    fn set_target_angle(&mut self, angle: TargetAngle);
    fn target_zoom(&self) -> f32;
    fn set_target_zoom(&mut self, zoom: f32);
    /// Cancel any in-flight "fly to a point of interest" animation
    fn clear_fly_to(&mut self);
}

/// Per-frame transform from sensor samples to camera targets
#[derive(Clone, Debug)]
pub struct SpaceMouseController {
    /// Zoom level at which one unit of deflection pans one unit per second
    pub pan_divisor: f32,
    /// Degrees per second per unit of rotation deflection
    pub rotation_gain: f32,
    /// Scaled input at or below this magnitude is ignored
    pub dead_zone: f32,
    /// Vertical translation is divided by this before it is added to zoom
    pub zoom_divisor: f32,
    /// Fraction of the tilt rate applied to elevation
    pub elevation_factor: f32,
}

impl Default for SpaceMouseController {
    fn default() -> Self {
        Self::new()
    }
}

impl SpaceMouseController {
    pub fn new() -> Self {
        Self {
            pan_divisor: 350.0,
            rotation_gain: 70.0,
            dead_zone: 0.01,
            zoom_divisor: 4.0,
            elevation_factor: 0.5,
        }
    }

    /// Apply one frame of device input to the camera targets
    ///
    /// `sample` is `None` when no device is connected; the call is then a
    /// no-op. Returns whether the camera was modified.
    pub fn update<C: CameraTarget + ?Sized>(
        &self,
        camera: &mut C,
        sample: Option<SensorSample>,
        real_time_delta: f32,
    ) -> bool {
        let (raw_translation, raw_rotation) = sample
            .map(|s| (s.camera_translation(), s.camera_rotation()))
            .unwrap_or((Vec3::ZERO, Vec3::ZERO));

        let target_position = camera.target_position();
        let target_angle = camera.target_angle();
        let target_zoom = camera.target_zoom();

        // Pan in the direction the camera faces, ignoring elevation
        let yaw = Quat::from_yaw_degrees(target_angle.azimuth);

        let translation = raw_translation * (real_time_delta * target_zoom / self.pan_divisor);
        let translation_rotated = yaw * translation;
        let rotation = raw_rotation * (real_time_delta * self.rotation_gain);

        // Leave the host alone while the device idles, or we would keep
        // cancelling its fly-to animations
        if rotation.length() <= self.dead_zone && translation.length() <= self.dead_zone {
            return false;
        }

        camera.clear_fly_to();

        camera.set_target_position(target_position + translation_rotated);

        let azimuth = wrap_degrees_once(target_angle.azimuth - rotation.y);
        let elevation =
            wrap_degrees_once(target_angle.elevation - rotation.x * self.elevation_factor);
        camera.set_target_angle(TargetAngle::new(azimuth, elevation));

        camera.set_target_zoom(target_zoom + translation.y / self.zoom_divisor);

        true
    }

    /// Builder: set pan divisor
    pub fn with_pan_divisor(mut self, divisor: f32) -> Self {
        self.pan_divisor = divisor;
        self
    }

    /// Builder: set rotation gain
    pub fn with_rotation_gain(mut self, gain: f32) -> Self {
        self.rotation_gain = gain;
        self
    }

    /// Builder: set dead zone
    pub fn with_dead_zone(mut self, dead_zone: f32) -> Self {
        self.dead_zone = dead_zone;
        self
    }

    /// Builder: set zoom divisor
    pub fn with_zoom_divisor(mut self, divisor: f32) -> Self {
        self.zoom_divisor = divisor;
        self
    }

    /// Builder: set elevation factor
    pub fn with_elevation_factor(mut self, factor: f32) -> Self {
        self.elevation_factor = factor;
        self
    }
}
