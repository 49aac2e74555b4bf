//! Device error types
//!
//! Every driver failure is folded into one of these before it reaches the
//! connection wrapper, which logs it and treats the device as unavailable.

use std::fmt;

/// Error type for device driver operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The driver handle could not be constructed (driver missing, no device)
    Construction(String),
    /// Connecting to the device failed
    Connect(String),
    /// Disconnecting from the device failed
    Disconnect(String),
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::Construction(msg) => write!(f, "Device construction failed: {}", msg),
            DeviceError::Connect(msg) => write!(f, "Device connect failed: {}", msg),
            DeviceError::Disconnect(msg) => write!(f, "Device disconnect failed: {}", msg),
        }
    }
}

impl std::error::Error for DeviceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_display() {
        let err = DeviceError::Construction("class not registered".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("construction"));
        assert!(msg.contains("class not registered"));
    }

    #[test]
    fn test_connect_display() {
        let msg = DeviceError::Connect("busy".to_string()).to_string();
        assert!(msg.contains("connect failed"));
        assert!(msg.contains("busy"));
    }

    #[test]
    fn test_disconnect_display() {
        let msg = DeviceError::Disconnect("gone".to_string()).to_string();
        assert!(msg.contains("disconnect failed"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_debug_format() {
        let debug = format!("{:?}", DeviceError::Connect("test error".to_string()));
        assert!(debug.contains("Connect"));
        assert!(debug.contains("test error"));
    }
}
