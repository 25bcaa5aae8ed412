//! Real device collaborator
//!
//! Physical hardware exposes none of the host-side simulator capabilities.
//! The driver gates simulator-only commands before delegation, so these
//! rejections only fire if a caller reaches the device directly.

use crate::device::Device;
use crate::error::{DriverError, Result};
use async_trait::async_trait;

/// A physical iOS device addressed by UDID
pub struct RealDevice {
    udid: String,
}

impl RealDevice {
    pub fn new(udid: impl Into<String>) -> Self {
        Self { udid: udid.into() }
    }
}

#[async_trait]
impl Device for RealDevice {
    fn udid(&self) -> &str {
        &self.udid
    }

    async fn enroll_touch_id(&self) -> Result<()> {
        Err(DriverError::not_supported_on_real_device(
            "Touch ID enrollment",
        ))
    }

    async fn set_pasteboard(&self, _content: &str) -> Result<()> {
        Err(DriverError::not_supported_on_real_device(
            "Setting the pasteboard",
        ))
    }

    async fn get_pasteboard(&self) -> Result<String> {
        Err(DriverError::not_supported_on_real_device(
            "Reading the pasteboard",
        ))
    }
}
