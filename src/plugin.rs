//! Space mouse plugin
//!
//! Glues the device connection and the camera transform to the host's
//! extension lifecycle:
//! - `on_created`: build and connect the device
//! - `on_update`: once per frame, push the live reading into the camera targets
//! - `on_released`: disconnect and drop the device

use spacecam_input::{
    CameraTarget, DeviceConnection, DeviceState, LogSink, NullSink, SixDofDevice,
    SpaceMouseController,
};

/// Callbacks a host invokes on its threading extensions
pub trait ThreadingExtension {
    /// Called by the host after the extension is created
    fn on_created(&mut self);
    /// Called by the host before the extension is destroyed
    fn on_released(&mut self);
    /// Called once per frame. `camera` is `None` while the host has no main camera.
    fn on_update(
        &mut self,
        camera: Option<&mut dyn CameraTarget>,
        real_time_delta: f32,
        simulation_time_delta: f32,
    );
}

/// Plugin that drives the host camera from a 6-DoF device
pub struct SpaceMousePlugin<D: SixDofDevice> {
    controller: SpaceMouseController,
    connection: DeviceConnection<D>,
    sink: Box<dyn LogSink>,
}

impl<D: SixDofDevice> SpaceMousePlugin<D> {
    pub fn new(
        controller: SpaceMouseController,
        connection: DeviceConnection<D>,
        sink: Box<dyn LogSink>,
    ) -> Self {
        sink.log("Instantiated");
        Self { controller, connection, sink }
    }

    /// Plugin that logs nowhere
    pub fn silent(controller: SpaceMouseController, connection: DeviceConnection<D>) -> Self {
        Self::new(controller, connection, Box::new(NullSink))
    }

    pub fn device_state(&self) -> DeviceState {
        self.connection.state()
    }

    pub fn connection(&self) -> &DeviceConnection<D> {
        &self.connection
    }

    pub fn controller(&self) -> &SpaceMouseController {
        &self.controller
    }

    /// Run the camera transform for one frame
    ///
    /// Returns whether the camera targets were changed.
    pub fn update_camera<C: CameraTarget + ?Sized>(
        &mut self,
        camera: &mut C,
        real_time_delta: f32,
    ) -> bool {
        let sample = self.connection.sample();
        self.controller.update(camera, sample, real_time_delta)
    }
}

impl<D: SixDofDevice> ThreadingExtension for SpaceMousePlugin<D> {
    fn on_created(&mut self) {
        self.sink.log("Created extension");
        let state = self.connection.acquire(self.sink.as_ref());
        log::debug!("Device state after create: {:?}", state);
    }

    fn on_released(&mut self) {
        self.connection.release(self.sink.as_ref());
        self.sink.log("Released extension");
    }

    // Camera control follows wall-clock time so it keeps working while the
    // simulation is paused; the simulation delta is unused.
    fn on_update(
        &mut self,
        camera: Option<&mut dyn CameraTarget>,
        real_time_delta: f32,
        _simulation_time_delta: f32,
    ) {
        if let Some(camera) = camera {
            self.update_camera(camera, real_time_delta);
        }
    }
}
