//! Session options
//!
//! One [`SessionOptions`] value lives for the duration of an automation
//! session. It combines the capability values supplied at session creation
//! with the runtime flags that settings updates mirror back into, plus the
//! handle to the device collaborator.

use crate::capabilities::Capabilities;
use crate::device::Device;
use std::sync::Arc;

/// Mutable per-session configuration
#[derive(Default)]
pub struct SessionOptions {
    /// Whether the session targets physical hardware. Simulator-only
    /// commands check this flag, never live hardware state.
    pub real_device: bool,

    /// Whether `toggle_enroll_touch_id` may drive simulator enrollment
    pub allow_touch_id_enroll: bool,

    pub native_web_tap: bool,

    pub use_json_source: bool,

    pub udid: Option<String>,

    pub device_name: Option<String>,

    pub platform_version: Option<String>,

    pub bundle_id: Option<String>,

    /// Device collaborator for capability calls that bypass the agent
    pub device: Option<Arc<dyn Device>>,
}

impl SessionOptions {
    /// Copy capability values into the session options. The device handle
    /// is left alone; the driver attaches one separately.
    pub fn apply_capabilities(&mut self, caps: &Capabilities) {
        self.real_device = caps.real_device;
        self.allow_touch_id_enroll = caps.allow_touch_id_enroll;
        self.native_web_tap = caps.native_web_tap;
        self.use_json_source = caps.use_json_source;
        self.udid = caps.udid.clone();
        self.device_name = caps.device_name.clone();
        self.platform_version = caps.platform_version.clone();
        self.bundle_id = caps.bundle_id.clone();
    }
}
