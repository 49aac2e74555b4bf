//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`SPACECAM_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use spacecam_input::SpaceMouseController;
use std::path::Path;

use crate::input::ScriptSegment;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Device-to-camera transform gains
    #[serde(default)]
    pub controller: ControllerConfig,
    /// Scripted device playback
    #[serde(default)]
    pub device: DeviceConfig,
    /// Simulated host camera
    #[serde(default)]
    pub host: HostConfig,
    /// Headless demo run
    #[serde(default)]
    pub demo: DemoConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`SPACECAM_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // SPACECAM_DEBUG__LOG_TAG=Test -> debug.log_tag = "Test"
        figment = figment.merge(Env::prefixed("SPACECAM_").split("__"));

        let config: Self = figment.extract()?;
        config.host.validate()?;
        Ok(config)
    }
}

/// Controller gains
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Zoom level at which one unit of deflection pans one unit per second
    pub pan_divisor: f32,
    /// Degrees per second per unit of rotation deflection
    pub rotation_gain: f32,
    /// Scaled input at or below this magnitude is ignored
    pub dead_zone: f32,
    /// Divisor applied to vertical translation before it changes zoom
    pub zoom_divisor: f32,
    /// Fraction of the tilt rate applied to elevation
    pub elevation_factor: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            pan_divisor: 350.0,
            rotation_gain: 70.0,
            dead_zone: 0.01,
            zoom_divisor: 4.0,
            elevation_factor: 0.5,
        }
    }
}

impl ControllerConfig {
    pub fn to_controller(&self) -> SpaceMouseController {
        SpaceMouseController::new()
            .with_pan_divisor(self.pan_divisor)
            .with_rotation_gain(self.rotation_gain)
            .with_dead_zone(self.dead_zone)
            .with_zoom_divisor(self.zoom_divisor)
            .with_elevation_factor(self.elevation_factor)
    }
}

/// Scripted device configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Restart the script when it runs out
    pub looping: bool,
    /// Segments played back in order, one sensor read per frame
    pub script: Vec<ScriptSegment>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            looping: false,
            script: vec![
                ScriptSegment::idle(30),
                ScriptSegment::translate(60, [0.0, 0.0, -1.0]),
                ScriptSegment::rotate(60, [0.0, 0.5, 0.0]),
                ScriptSegment::translate(30, [0.0, 2.0, 0.0]),
                ScriptSegment::idle(60),
            ],
        }
    }
}

/// Simulated host camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Starting target position [x, y, z]
    pub start_position: [f32; 3],
    /// Starting azimuth in degrees
    pub start_azimuth: f32,
    /// Starting elevation in degrees
    pub start_elevation: f32,
    /// Starting zoom distance
    pub start_zoom: f32,
    /// Closest allowed zoom
    pub min_zoom: f32,
    /// Farthest allowed zoom
    pub max_zoom: f32,
    /// Camera easing half-life in seconds (0 = snap to targets)
    pub smoothing_half_life: f32,
    /// Fly-to speed; larger closes the gap faster
    pub fly_to_speed: f32,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            start_position: [0.0, 0.0, 0.0],
            start_azimuth: 0.0,
            start_elevation: 45.0,
            start_zoom: 350.0,
            min_zoom: 40.0,
            max_zoom: 4000.0,
            smoothing_half_life: 0.1,
            fly_to_speed: 3.0,
        }
    }
}

impl HostConfig {
    /// Reject zoom bounds the host camera cannot clamp to
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_zoom.is_finite() || !self.max_zoom.is_finite() {
            return Err(ConfigError::invalid("host zoom bounds must be finite"));
        }
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::invalid(format!(
                "host.min_zoom ({}) is greater than host.max_zoom ({})",
                self.min_zoom, self.max_zoom
            )));
        }
        Ok(())
    }
}

/// Headless demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of frames to run
    pub frames: u32,
    /// Fixed frame delta in seconds (0 = wall clock)
    pub fixed_dt: f32,
    /// Log camera state every N frames (0 = never)
    pub report_every: u32,
    /// Start with a fly-to toward this point, to show manual input cancelling it
    pub fly_to: Option<[f32; 3]>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 240,
            fixed_dt: 1.0 / 60.0,
            report_every: 30,
            fly_to: Some([500.0, 0.0, 500.0]),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Tag prefixed to plugin log lines
    pub log_tag: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_tag: "SpaceCam".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        ConfigError { message: message.into() }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.controller.pan_divisor, 350.0);
        assert_eq!(config.controller.rotation_gain, 70.0);
        assert_eq!(config.debug.log_tag, "SpaceCam");
        assert!(!config.device.script.is_empty());
    }

    #[test]
    fn test_to_controller_carries_gains() {
        let config = ControllerConfig {
            pan_divisor: 100.0,
            rotation_gain: 30.0,
            dead_zone: 0.2,
            zoom_divisor: 8.0,
            elevation_factor: 1.0,
        };
        let controller = config.to_controller();
        assert_eq!(controller.pan_divisor, 100.0);
        assert_eq!(controller.rotation_gain, 30.0);
        assert_eq!(controller.dead_zone, 0.2);
        assert_eq!(controller.zoom_divisor, 8.0);
        assert_eq!(controller.elevation_factor, 1.0);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("pan_divisor"));
        assert!(toml.contains("[[device.script]]"));
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: AppConfig = toml::from_str("[controller]\nrotation_gain = 10.0\n").unwrap();
        assert_eq!(config.controller.rotation_gain, 10.0);
        assert_eq!(config.controller.pan_divisor, 350.0);
        assert_eq!(config.host.start_zoom, 350.0);
    }

    #[test]
    fn test_host_zoom_bounds_validated() {
        assert!(HostConfig::default().validate().is_ok());

        let swapped = HostConfig { min_zoom: 500.0, max_zoom: 100.0, ..Default::default() };
        let err = swapped.validate().unwrap_err();
        assert!(err.to_string().contains("min_zoom"));

        let infinite = HostConfig { max_zoom: f32::INFINITY, ..Default::default() };
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn test_missing_dir_uses_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.demo.frames, 240);
    }
}
