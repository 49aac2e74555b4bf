//! SpaceCam - headless demo host
//!
//! Runs the space mouse plugin against a simulated city-builder camera,
//! with a scripted device standing in for real hardware.

use spacecam::config::AppConfig;
use spacecam::host::HostCamera;
use spacecam::input::ScriptedDevice;
use spacecam::systems::{FrameClock, SimulationSystem};
use spacecam::{SpaceMousePlugin, ThreadingExtension};
use spacecam_input::{DeviceConnection, TaggedLogger};
use spacecam_math::Vec3;

fn main() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting SpaceCam");

    let device_config = config.device.clone();
    let connection = DeviceConnection::new(move || ScriptedDevice::from_config(&device_config));
    let mut plugin = SpaceMousePlugin::new(
        config.controller.to_controller(),
        connection,
        Box::new(TaggedLogger::new(config.debug.log_tag.clone())),
    );

    let mut camera = HostCamera::from_config(&config.host);
    if let Some(point) = config.demo.fly_to {
        camera.fly_to(Vec3::from_array(point));
        log::info!("Camera flying to {:?}", point);
    }

    plugin.on_created();
    log::info!("Device state: {:?}", plugin.device_state());

    let mut simulation = SimulationSystem::new(FrameClock::from_fixed_dt(config.demo.fixed_dt));
    let report_every = u64::from(config.demo.report_every);

    for _ in 0..config.demo.frames {
        simulation.update(&mut plugin, &mut camera);

        let frame = simulation.frame();
        if report_every > 0 && frame % report_every == 0 {
            log::info!(
                "frame {:>5}: position [{:8.2} {:8.2} {:8.2}] azimuth {:7.2} elevation {:7.2} zoom {:8.2}{}",
                frame,
                camera.position.x,
                camera.position.y,
                camera.position.z,
                camera.angle.azimuth,
                camera.angle.elevation,
                camera.zoom,
                if camera.fly_to_target().is_some() { " (flying)" } else { "" },
            );
        }
    }

    plugin.on_released();
    log::info!("Finished after {} frames", simulation.frame());
}
