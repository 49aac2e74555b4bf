//! In-memory device for tests and headless hosts
//!
//! Clones share state, so a test can keep one clone to drive readings and
//! inject failures while the connection owns another.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{DeviceError, SensorSample, SixDofDevice};

#[derive(Debug, Default)]
struct MockState {
    connected: bool,
    sample: Option<SensorSample>,
    fail_connect: bool,
    fail_disconnect: bool,
    connect_calls: u32,
    disconnect_calls: u32,
}

/// Programmable [`SixDofDevice`]
#[derive(Debug, Default, Clone)]
pub struct MockDevice {
    state: Rc<RefCell<MockState>>,
}

impl MockDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reading returned by [`SixDofDevice::sensor`]
    pub fn set_sample(&self, sample: Option<SensorSample>) {
        self.state.borrow_mut().sample = sample;
    }

    /// Make subsequent `connect` calls fail
    pub fn fail_connect(&self, fail: bool) {
        self.state.borrow_mut().fail_connect = fail;
    }

    /// Make subsequent `disconnect` calls fail
    pub fn fail_disconnect(&self, fail: bool) {
        self.state.borrow_mut().fail_disconnect = fail;
    }

    /// Simulate the device going away without a disconnect call
    pub fn unplug(&self) {
        self.state.borrow_mut().connected = false;
    }

    pub fn connect_calls(&self) -> u32 {
        self.state.borrow().connect_calls
    }

    pub fn disconnect_calls(&self) -> u32 {
        self.state.borrow().disconnect_calls
    }
}

impl SixDofDevice for MockDevice {
    fn connect(&mut self) -> Result<(), DeviceError> {
        let mut state = self.state.borrow_mut();
        state.connect_calls += 1;
        if state.fail_connect {
            return Err(DeviceError::Connect("mock device refused connection".to_string()));
        }
        state.connected = true;
        Ok(())
    }

    fn disconnect(&mut self) -> Result<(), DeviceError> {
        let mut state = self.state.borrow_mut();
        state.disconnect_calls += 1;
        if state.fail_disconnect {
            return Err(DeviceError::Disconnect("mock device stuck".to_string()));
        }
        state.connected = false;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.state.borrow().connected
    }

    fn sensor(&self) -> Option<SensorSample> {
        self.state.borrow().sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacecam_math::Vec3;

    #[test]
    fn test_connect_disconnect() {
        let mut device = MockDevice::new();
        assert!(!device.is_connected());
        device.connect().unwrap();
        assert!(device.is_connected());
        device.disconnect().unwrap();
        assert!(!device.is_connected());
        assert_eq!(device.connect_calls(), 1);
        assert_eq!(device.disconnect_calls(), 1);
    }

    #[test]
    fn test_injected_failures() {
        let mut device = MockDevice::new();
        device.fail_connect(true);
        assert!(matches!(device.connect(), Err(DeviceError::Connect(_))));
        assert!(!device.is_connected());

        device.fail_connect(false);
        device.connect().unwrap();
        device.fail_disconnect(true);
        assert!(matches!(device.disconnect(), Err(DeviceError::Disconnect(_))));
        assert!(device.is_connected());
    }

    #[test]
    fn test_clones_share_state() {
        let device = MockDevice::new();
        let handle = device.clone();
        let sample = SensorSample::new(Vec3::Y, Vec3::ZERO);
        handle.set_sample(Some(sample));
        assert_eq!(device.sensor(), Some(sample));
    }
}
