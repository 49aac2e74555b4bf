//! Scripted 6-DoF device
//!
//! Replays a list of constant-input segments, advancing one frame per
//! sensor read. Used by the demo binary in place of real hardware.

use std::cell::Cell;

use serde::{Deserialize, Serialize};
use spacecam_input::{DeviceError, SensorSample, SixDofDevice};
use spacecam_math::Vec3;

use crate::config::DeviceConfig;

/// Constant device deflection held for a number of frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptSegment {
    /// How many sensor reads this segment lasts
    pub frames: u32,
    /// Raw translation [x, y, z], device coordinates
    #[serde(default)]
    pub translation: [f32; 3],
    /// Raw rotation [x, y, z], device coordinates
    #[serde(default)]
    pub rotation: [f32; 3],
    /// Rotation angle in degrees
    #[serde(default)]
    pub rotation_angle: f32,
}

impl ScriptSegment {
    /// Segment with the device at rest
    pub fn idle(frames: u32) -> Self {
        Self { frames, translation: [0.0; 3], rotation: [0.0; 3], rotation_angle: 0.0 }
    }

    pub fn translate(frames: u32, translation: [f32; 3]) -> Self {
        Self { translation, ..Self::idle(frames) }
    }

    pub fn rotate(frames: u32, rotation: [f32; 3]) -> Self {
        Self { rotation, ..Self::idle(frames) }
    }

    fn sample(&self) -> SensorSample {
        SensorSample::new(Vec3::from_array(self.translation), Vec3::from_array(self.rotation))
            .with_rotation_angle(self.rotation_angle)
    }
}

/// Device that plays back [`ScriptSegment`]s
#[derive(Debug)]
pub struct ScriptedDevice {
    segments: Vec<ScriptSegment>,
    total_frames: u64,
    looping: bool,
    connected: bool,
    cursor: Cell<u64>,
}

impl ScriptedDevice {
    /// Build from segments; an empty or zero-length script is a construction error
    pub fn new(segments: Vec<ScriptSegment>, looping: bool) -> Result<Self, DeviceError> {
        let total_frames: u64 = segments.iter().map(|s| u64::from(s.frames)).sum();
        if total_frames == 0 {
            return Err(DeviceError::Construction("device script is empty".to_string()));
        }

        Ok(Self {
            segments,
            total_frames,
            looping,
            connected: false,
            cursor: Cell::new(0),
        })
    }

    pub fn from_config(config: &DeviceConfig) -> Result<Self, DeviceError> {
        Self::new(config.script.clone(), config.looping)
    }

    /// Total script length in frames
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Number of sensor reads so far
    pub fn frames_read(&self) -> u64 {
        self.cursor.get()
    }

    fn segment_at(&self, frame: u64) -> Option<&ScriptSegment> {
        let frame = if self.looping {
            frame % self.total_frames
        } else if frame >= self.total_frames {
            return None;
        } else {
            frame
        };

        let mut start = 0u64;
        for segment in &self.segments {
            let end = start + u64::from(segment.frames);
            if frame < end {
                return Some(segment);
            }
            start = end;
        }
        None
    }
}

impl SixDofDevice for ScriptedDevice {
    fn connect(&mut self) -> Result<(), DeviceError> {
        self.connected = true;
        self.cursor.set(0);
        Ok(())
    }

    fn disconnect(&mut self) -> Result<(), DeviceError> {
        self.connected = false;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn sensor(&self) -> Option<SensorSample> {
        let frame = self.cursor.get();
        self.cursor.set(frame + 1);
        self.segment_at(frame).map(ScriptSegment::sample)
    }
}
