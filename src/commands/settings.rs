//! Settings commands
//!
//! Settings live entirely in the driver; no proxied call is involved.
//! Updates are partial merges, and keys that have a session-option
//! counterpart (`nativeWebTap`, `useJsonSource`) mirror into the options
//! so capability-gated code observes the latest values.

use crate::driver::XcuiDriver;
use crate::settings::{Settings, SettingsUpdate};

impl XcuiDriver {
    /// Current session settings
    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    /// Merge a partial update into the session settings. Keys left out of
    /// the update keep their previous values.
    pub fn update_settings(&mut self, update: SettingsUpdate) {
        self.settings.apply(&update);

        if let Some(v) = update.native_web_tap {
            self.opts.native_web_tap = v;
        }
        if let Some(v) = update.use_json_source {
            self.opts.use_json_source = v;
        }
        log::debug!("settings updated: {:?}", self.settings);
    }
}
