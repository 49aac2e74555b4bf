//! 6-DoF device seam and its connection lifecycle
//!
//! The driver owns polling and connection management; we only forward
//! connect/disconnect at the two lifecycle edges and read the live sensor.
//! Lifecycle: created -> connected -> (active) -> disconnected -> released.

use crate::{DeviceError, LogSink, SensorSample};

/// Trait for a 6-DoF device driver handle
pub trait SixDofDevice {
    fn connect(&mut self) -> Result<(), DeviceError>;
    fn disconnect(&mut self) -> Result<(), DeviceError>;
    fn is_connected(&self) -> bool;
    /// Current reading. Reads are synchronous and always current; `None`
    /// means the driver has nothing to report this frame.
    fn sensor(&self) -> Option<SensorSample>;
}

/// Constructs a driver handle on demand
pub type DeviceFactory<D> = Box<dyn FnMut() -> Result<D, DeviceError>>;

/// Observable state of a [`DeviceConnection`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    /// No handle: never acquired, or released
    Absent,
    /// Driver failed to construct, connect, or stay connected
    Unavailable,
    /// Connected, readings flow
    Connected,
}

/// Optional device handle with acquire/release lifecycle
///
/// Driver errors are logged and swallowed here; callers only ever see
/// [`DeviceState::Unavailable`] and an absent sample.
pub struct DeviceConnection<D: SixDofDevice> {
    factory: DeviceFactory<D>,
    device: Option<D>,
    sensor_ready: bool,
    construction_failed: bool,
}

impl<D: SixDofDevice> DeviceConnection<D> {
    pub fn new(factory: impl FnMut() -> Result<D, DeviceError> + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            device: None,
            sensor_ready: false,
            construction_failed: false,
        }
    }

    /// Construct the handle if needed, then connect if not connected
    ///
    /// Idempotent: a second call reuses the existing handle.
    pub fn acquire(&mut self, sink: &dyn LogSink) -> DeviceState {
        if self.device.is_none() {
            sink.log("Creating device");
            match (self.factory)() {
                Ok(device) => {
                    self.device = Some(device);
                    self.construction_failed = false;
                }
                Err(err) => {
                    report(sink, &err);
                    self.sensor_ready = false;
                    self.construction_failed = true;
                    return self.state();
                }
            }
        }

        if let Some(device) = self.device.as_mut() {
            if device.is_connected() {
                self.sensor_ready = true;
            } else {
                sink.log("Connecting device");
                match device.connect() {
                    Ok(()) => self.sensor_ready = true,
                    Err(err) => {
                        report(sink, &err);
                        self.sensor_ready = false;
                    }
                }
            }
        }

        self.state()
    }

    /// Disconnect if connected, then drop the handle
    ///
    /// Safe to call before [`acquire`](Self::acquire) and more than once.
    pub fn release(&mut self, sink: &dyn LogSink) {
        if let Some(mut device) = self.device.take() {
            if device.is_connected() {
                sink.log("Disconnecting device");
                if let Err(err) = device.disconnect() {
                    report(sink, &err);
                }
            }
            sink.log("Releasing device");
        }
        self.sensor_ready = false;
        self.construction_failed = false;
    }

    pub fn is_connected(&self) -> bool {
        self.device.as_ref().map(|d| d.is_connected()).unwrap_or(false)
    }

    pub fn state(&self) -> DeviceState {
        match &self.device {
            None if self.construction_failed => DeviceState::Unavailable,
            None => DeviceState::Absent,
            Some(device) if self.sensor_ready && device.is_connected() => DeviceState::Connected,
            Some(_) => DeviceState::Unavailable,
        }
    }

    /// Live reading, or `None` when the device is unavailable
    pub fn sample(&self) -> Option<SensorSample> {
        if self.state() != DeviceState::Connected {
            return None;
        }
        self.device.as_ref().and_then(|d| d.sensor())
    }

    /// Borrow the driver handle, if one exists
    pub fn device(&self) -> Option<&D> {
        self.device.as_ref()
    }
}

fn report(sink: &dyn LogSink, err: &DeviceError) {
    sink.log(&format!("{} ({:?})", err, err));
}
