//! XCUITest driver core
//!
//! [`XcuiDriver`] owns the session state and the proxy handle. The public
//! command surface lives in `commands/`, split by concern, as `impl`
//! blocks on this struct.

use crate::capabilities::Capabilities;
use crate::device::{Device, RealDevice, SimulatorDevice};
use crate::error::{DriverError, Result};
use crate::session::SessionOptions;
use crate::settings::Settings;
use crate::wda::WdaProxy;
use std::sync::Arc;

/// Automation driver for one iOS device or simulator
pub struct XcuiDriver {
    /// Session options; capability values land here at session creation
    pub opts: SessionOptions,
    pub(crate) settings: Settings,
    pub(crate) proxy: Arc<dyn WdaProxy>,
}

impl XcuiDriver {
    /// Create a driver with default options and settings. Commands can be
    /// issued once a session exists.
    pub fn new(proxy: Arc<dyn WdaProxy>) -> Self {
        Self {
            opts: SessionOptions::default(),
            settings: Settings::default(),
            proxy,
        }
    }

    /// Start a session: validate the capabilities, copy them into the
    /// session options, seed the mutable settings from them, and attach
    /// the device collaborator matching the `realDevice` flag.
    ///
    /// Local state only. The agent-side session is created lazily by the
    /// proxy on the first proxied command.
    pub fn create_session(&mut self, caps: Capabilities) -> Result<()> {
        if let Some(ref name) = caps.platform_name {
            if !name.eq_ignore_ascii_case("ios") {
                return Err(DriverError::Capabilities(format!(
                    "platformName must be iOS, got '{}'",
                    name
                )));
            }
        }
        if caps.real_device && caps.udid.is_none() {
            return Err(DriverError::Capabilities(
                "realDevice sessions require a udid".to_string(),
            ));
        }

        self.opts.apply_capabilities(&caps);
        self.settings.native_web_tap = caps.native_web_tap;
        self.settings.use_json_source = caps.use_json_source;

        if self.opts.device.is_none() {
            let device: Arc<dyn Device> = match (caps.real_device, caps.udid.as_deref()) {
                (true, Some(udid)) => Arc::new(RealDevice::new(udid)),
                (true, None) => unreachable!("validated above"),
                (false, Some(udid)) => Arc::new(SimulatorDevice::new(udid)),
                (false, None) => Arc::new(SimulatorDevice::booted()),
            };
            self.opts.device = Some(device);
        }

        log::info!(
            "session created (device: {}, real: {})",
            self.opts.udid.as_deref().unwrap_or("booted"),
            self.opts.real_device
        );
        Ok(())
    }

    /// Drop all session state back to defaults. Agent-side teardown is the
    /// proxy's concern.
    pub fn delete_session(&mut self) {
        self.opts = SessionOptions::default();
        self.settings = Settings::default();
        log::info!("session deleted");
    }

    /// Guard for simulator-only commands. Checks the `realDevice`
    /// capability flag, never live hardware state.
    pub(crate) fn require_simulator(&self, what: &str) -> Result<()> {
        if self.opts.real_device {
            return Err(DriverError::not_supported_on_real_device(what));
        }
        Ok(())
    }

    /// The attached device collaborator
    pub(crate) fn device(&self) -> Result<&Arc<dyn Device>> {
        self.opts.device.as_ref().ok_or(DriverError::NoDevice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::RecordingProxy;

    fn driver() -> XcuiDriver {
        XcuiDriver::new(Arc::new(RecordingProxy::new()))
    }

    #[test]
    fn test_create_session_applies_capabilities() {
        let mut driver = driver();
        driver
            .create_session(Capabilities {
                platform_name: Some("iOS".to_string()),
                device_name: Some("iPhone 14".to_string()),
                udid: Some("SIM-1".to_string()),
                allow_touch_id_enroll: true,
                ..Capabilities::default()
            })
            .unwrap();

        assert!(!driver.opts.real_device);
        assert!(driver.opts.allow_touch_id_enroll);
        assert_eq!(driver.opts.udid.as_deref(), Some("SIM-1"));
        let device = driver.device().unwrap();
        assert_eq!(device.udid(), "SIM-1");
    }

    #[test]
    fn test_create_session_defaults_to_booted_simulator() {
        let mut driver = driver();
        driver.create_session(Capabilities::default()).unwrap();
        assert_eq!(driver.device().unwrap().udid(), "booted");
    }

    #[test]
    fn test_create_session_rejects_foreign_platform() {
        let mut driver = driver();
        let err = driver
            .create_session(Capabilities {
                platform_name: Some("Android".to_string()),
                ..Capabilities::default()
            })
            .unwrap_err();
        assert!(matches!(err, DriverError::Capabilities(_)));
    }

    #[test]
    fn test_create_session_requires_udid_for_real_devices() {
        let mut driver = driver();
        let err = driver
            .create_session(Capabilities {
                real_device: true,
                ..Capabilities::default()
            })
            .unwrap_err();
        assert!(matches!(err, DriverError::Capabilities(_)));
    }

    #[test]
    fn test_delete_session_resets_state() {
        let mut driver = driver();
        driver
            .create_session(Capabilities {
                native_web_tap: true,
                allow_touch_id_enroll: true,
                ..Capabilities::default()
            })
            .unwrap();
        driver.delete_session();

        assert!(!driver.opts.native_web_tap);
        assert!(!driver.opts.allow_touch_id_enroll);
        assert!(driver.opts.device.is_none());
        assert!(!driver.get_settings().native_web_tap);
    }
}
