//! Frame loop
//!
//! Stands in for the host's game loop:
//! - Delta time calculation
//! - Extension update (the plugin writes camera targets)
//! - Host camera easing

use std::time::Instant;

use spacecam_input::CameraTarget;

use crate::host::HostCamera;
use crate::plugin::ThreadingExtension;

/// Largest wall-clock delta handed to extensions
const MAX_FRAME_DT: f32 = 0.25;

/// Source of per-frame deltas
#[derive(Debug)]
pub enum FrameClock {
    /// Same delta every frame
    Fixed(f32),
    /// Wall-clock time since the previous frame
    WallClock { last_frame: Instant },
}

impl FrameClock {
    /// Fixed step when `fixed_dt > 0`, wall clock otherwise
    pub fn from_fixed_dt(fixed_dt: f32) -> Self {
        if fixed_dt > 0.0 {
            FrameClock::Fixed(fixed_dt)
        } else {
            FrameClock::WallClock { last_frame: Instant::now() }
        }
    }

    /// Delta for the next frame, in seconds
    pub fn next_delta(&mut self) -> f32 {
        match self {
            FrameClock::Fixed(dt) => *dt,
            FrameClock::WallClock { last_frame } => {
                let now = Instant::now();
                let raw_dt = (now - *last_frame).as_secs_f32();
                *last_frame = now;
                // Cap dt so a stall does not fling the camera across the map
                raw_dt.min(MAX_FRAME_DT)
            }
        }
    }
}

/// Drives extensions and the host camera one frame at a time
pub struct SimulationSystem {
    clock: FrameClock,
    frame: u64,
    /// Simulation speed multiplier (0 = paused)
    pub simulation_speed: f32,
}

impl SimulationSystem {
    pub fn new(clock: FrameClock) -> Self {
        Self {
            clock,
            frame: 0,
            simulation_speed: 1.0,
        }
    }

    /// Frames run so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run one frame
    ///
    /// Returns the real-time delta used.
    pub fn update<E: ThreadingExtension + ?Sized>(
        &mut self,
        extension: &mut E,
        camera: &mut HostCamera,
    ) -> f32 {
        let dt = self.clock.next_delta();
        let simulation_dt = dt * self.simulation_speed;

        extension.on_update(Some(&mut *camera as &mut dyn CameraTarget), dt, simulation_dt);
        camera.tick(dt);

        self.frame += 1;
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingExtension {
        updates: Vec<(f32, f32)>,
    }

    impl ThreadingExtension for RecordingExtension {
        fn on_created(&mut self) {}
        fn on_released(&mut self) {}
        fn on_update(&mut self, camera: Option<&mut dyn CameraTarget>, real: f32, sim: f32) {
            assert!(camera.is_some());
            self.updates.push((real, sim));
        }
    }

    #[test]
    fn test_fixed_clock() {
        let mut clock = FrameClock::from_fixed_dt(0.5);
        assert_eq!(clock.next_delta(), 0.5);
        assert_eq!(clock.next_delta(), 0.5);
    }

    #[test]
    fn test_wall_clock_capped() {
        let mut clock = FrameClock::from_fixed_dt(0.0);
        std::thread::sleep(std::time::Duration::from_millis(300));
        assert_eq!(clock.next_delta(), MAX_FRAME_DT);
        assert!(clock.next_delta() < MAX_FRAME_DT);
    }

    #[test]
    fn test_paused_simulation_still_gets_real_delta() {
        let mut sim = SimulationSystem::new(FrameClock::Fixed(0.1));
        sim.simulation_speed = 0.0;
        let mut extension = RecordingExtension::default();
        let mut camera = HostCamera::default();

        sim.update(&mut extension, &mut camera);
        sim.update(&mut extension, &mut camera);

        assert_eq!(extension.updates, vec![(0.1, 0.0), (0.1, 0.0)]);
        assert_eq!(sim.frame(), 2);
    }
}
