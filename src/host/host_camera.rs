//! Host camera with target easing and fly-to animation
//!
//! The camera keeps two sets of values:
//! - targets, which input (and the plugin) write to
//! - current values, which ease toward the targets every tick
//!
//! A fly-to animation drags the target position toward a point of interest
//! until it arrives or is cleared.

use spacecam_input::{CameraTarget, TargetAngle};
use spacecam_math::{wrap_degrees_once, Vec3};

use crate::config::HostConfig;

/// Fly-to stops once the target is this close to the destination
const FLY_TO_ARRIVAL: f32 = 0.01;

/// Simulated host camera controller
#[derive(Debug, Clone)]
pub struct HostCamera {
    /// Rendered position
    pub position: Vec3,
    /// Rendered angle
    pub angle: TargetAngle,
    /// Rendered zoom distance
    pub zoom: f32,

    target_position: Vec3,
    target_angle: TargetAngle,
    target_zoom: f32,
    fly_to: Option<Vec3>,

    // Configuration
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub smoothing_half_life: f32,
    pub fly_to_speed: f32,
}

impl Default for HostCamera {
    fn default() -> Self {
        Self::from_config(&HostConfig::default())
    }
}

impl HostCamera {
    /// Create a camera resting at the given values
    pub fn new(position: Vec3, angle: TargetAngle, zoom: f32) -> Self {
        let defaults = HostConfig::default();
        Self {
            position,
            angle,
            zoom,
            target_position: position,
            target_angle: angle,
            target_zoom: zoom,
            fly_to: None,
            min_zoom: defaults.min_zoom,
            max_zoom: defaults.max_zoom,
            smoothing_half_life: defaults.smoothing_half_life,
            fly_to_speed: defaults.fly_to_speed,
        }
    }

    pub fn from_config(config: &HostConfig) -> Self {
        let mut camera = Self::new(
            Vec3::from_array(config.start_position),
            TargetAngle::new(config.start_azimuth, config.start_elevation),
            config.start_zoom,
        );
        camera.min_zoom = config.min_zoom;
        camera.max_zoom = config.max_zoom;
        camera.smoothing_half_life = config.smoothing_half_life;
        camera.fly_to_speed = config.fly_to_speed;
        camera
    }

    /// Start flying toward a point of interest
    pub fn fly_to(&mut self, point: Vec3) {
        self.fly_to = Some(point);
    }

    /// Current fly-to destination, if animating
    pub fn fly_to_target(&self) -> Option<Vec3> {
        self.fly_to
    }

    /// Advance the fly-to animation and ease current values toward targets
    pub fn tick(&mut self, dt: f32) {
        if let Some(destination) = self.fly_to {
            let step = 1.0 - 2.0f32.powf(-dt * self.fly_to_speed);
            self.target_position = self.target_position.lerp(destination, step);
            if (destination - self.target_position).length() < FLY_TO_ARRIVAL {
                self.target_position = destination;
                self.fly_to = None;
            }
        }

        // Bounds may come from user config in either order; min/max never panic
        let (near, far) = (self.min_zoom.min(self.max_zoom), self.max_zoom.max(self.min_zoom));
        self.target_zoom = self.target_zoom.max(near).min(far);

        // factor = 2^(-dt / half_life); a zero half-life snaps straight to the target
        let follow = if self.smoothing_half_life > 0.0 {
            1.0 - 2.0f32.powf(-dt / self.smoothing_half_life)
        } else {
            1.0
        };

        self.position = self.position.lerp(self.target_position, follow);
        self.zoom += (self.target_zoom - self.zoom) * follow;

        // Ease along the short way round
        let azimuth_gap = wrap_degrees_once(self.target_angle.azimuth - self.angle.azimuth);
        let elevation_gap = wrap_degrees_once(self.target_angle.elevation - self.angle.elevation);
        self.angle = TargetAngle::new(
            wrap_degrees_once(self.angle.azimuth + azimuth_gap * follow),
            wrap_degrees_once(self.angle.elevation + elevation_gap * follow),
        );
    }
}

impl CameraTarget for HostCamera {
    fn target_position(&self) -> Vec3 {
        self.target_position
    }

    fn set_target_position(&mut self, position: Vec3) {
        self.target_position = position;
    }

    fn target_angle(&self) -> TargetAngle {
        self.target_angle
    }

    fn set_target_angle(&mut self, angle: TargetAngle) {
        self.target_angle = angle;
    }

    fn target_zoom(&self) -> f32 {
        self.target_zoom
    }

    fn set_target_zoom(&mut self, zoom: f32) {
        self.target_zoom = zoom;
    }

    fn clear_fly_to(&mut self) {
        self.fly_to = None;
    }
}
