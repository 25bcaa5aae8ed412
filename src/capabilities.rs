//! Session capabilities
//!
//! Capabilities are supplied once at session creation and control driver
//! behavior for the lifetime of the session. Keys follow the usual
//! camelCase wire names so capability files interoperate with existing
//! client tooling.

use crate::error::{DriverError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Desired capabilities for one automation session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    #[serde(default)]
    pub platform_name: Option<String>,

    #[serde(default)]
    pub device_name: Option<String>,

    #[serde(default)]
    pub platform_version: Option<String>,

    /// Path to the application under test
    #[serde(default)]
    pub app: Option<String>,

    #[serde(default)]
    pub bundle_id: Option<String>,

    /// Device UDID. Simulators fall back to the booted simulator when
    /// this is not set.
    #[serde(default)]
    pub udid: Option<String>,

    /// Whether the target is physical hardware rather than a simulator
    #[serde(default)]
    pub real_device: bool,

    /// Permit `toggle_enroll_touch_id` to drive simulator enrollment
    #[serde(default)]
    pub allow_touch_id_enroll: bool,

    #[serde(default)]
    pub native_web_tap: bool,

    #[serde(default)]
    pub use_json_source: bool,

    /// Base URL of an already-running WebDriverAgent
    #[serde(default)]
    pub web_driver_agent_url: Option<String>,

    /// Local port WebDriverAgent listens on when no URL is given
    #[serde(default)]
    pub wda_local_port: Option<u16>,
}

impl Capabilities {
    /// Load capabilities from a YAML or JSON file.
    ///
    /// JSON is valid YAML, so a single parser covers both formats.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| DriverError::Capabilities(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_off() {
        let caps = Capabilities::default();
        assert!(!caps.real_device);
        assert!(!caps.allow_touch_id_enroll);
        assert!(!caps.native_web_tap);
        assert!(!caps.use_json_source);
    }

    #[test]
    fn test_parses_camel_case_keys() {
        let caps: Capabilities = serde_yaml::from_str(
            r#"
platformName: iOS
deviceName: iPhone 14
nativeWebTap: true
allowTouchIdEnroll: true
wdaLocalPort: 8101
"#,
        )
        .unwrap();
        assert_eq!(caps.platform_name.as_deref(), Some("iOS"));
        assert!(caps.native_web_tap);
        assert!(caps.allow_touch_id_enroll);
        assert_eq!(caps.wda_local_port, Some(8101));
    }

    #[test]
    fn test_parses_json_form() {
        let caps: Capabilities =
            serde_yaml::from_str(r#"{"platformName": "iOS", "realDevice": true, "udid": "abc"}"#)
                .unwrap();
        assert!(caps.real_device);
        assert_eq!(caps.udid.as_deref(), Some("abc"));
    }
}
