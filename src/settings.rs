//! Session settings
//!
//! Settings are the subset of session configuration that stays mutable
//! after the session starts. Updates are partial merges: keys left out of
//! a [`SettingsUpdate`] keep their previous values.

use serde::{Deserialize, Serialize};

/// Live session settings with their startup defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Translate web taps into native taps inside webviews
    pub native_web_tap: bool,

    /// Serve the page source as JSON instead of XML
    pub use_json_source: bool,

    /// Strip rarely-used attributes from element responses
    pub should_use_compact_responses: bool,

    /// Attributes kept when compact responses are enabled
    pub element_response_attributes: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            native_web_tap: false,
            use_json_source: false,
            should_use_compact_responses: true,
            element_response_attributes: "type,label".to_string(),
        }
    }
}

impl Settings {
    /// Merge an update into the current settings. Absent keys are left
    /// unchanged.
    pub fn apply(&mut self, update: &SettingsUpdate) {
        if let Some(v) = update.native_web_tap {
            self.native_web_tap = v;
        }
        if let Some(v) = update.use_json_source {
            self.use_json_source = v;
        }
        if let Some(v) = update.should_use_compact_responses {
            self.should_use_compact_responses = v;
        }
        if let Some(ref v) = update.element_response_attributes {
            self.element_response_attributes = v.clone();
        }
    }
}

/// Partial settings payload for `update_settings`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_web_tap: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_json_source: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_use_compact_responses: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_response_attributes: Option<String>,
}

impl SettingsUpdate {
    /// Update carrying only `nativeWebTap`
    pub fn native_web_tap(value: bool) -> Self {
        Self {
            native_web_tap: Some(value),
            ..Self::default()
        }
    }
}
