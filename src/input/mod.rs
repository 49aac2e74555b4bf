//! Device sources for the headless host
//!
//! Provides a config-driven device that replays a motion script.

mod scripted_device;

pub use scripted_device::{ScriptSegment, ScriptedDevice};
