//! Wire types for WebDriverAgent responses
//!
//! WDA wraps every payload in a `{"value": ...}` envelope; the client
//! unwraps that before these types ever see the data, so they model the
//! inner payloads only.

use serde::{Deserialize, Serialize};

/// Agent status as reported by `GET /status`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WdaStatus {
    #[serde(default)]
    pub ready: bool,

    #[serde(default)]
    pub message: String,

    /// Session the agent already holds, if any. Older agents report this
    /// inside the status value, newer ones only at the envelope level; the
    /// client fills it in from whichever location is populated.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Width and height pair used by window and status-bar geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Payload of `GET /wda/screen`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenInfo {
    pub status_bar_size: Size,
    pub scale: f64,
}

/// Web-visible viewport in physical pixels, derived from screen info and
/// window size
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewportRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Payload of `GET /wda/device/info`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub model: String,

    #[serde(default)]
    pub uuid: String,

    #[serde(default)]
    pub time_zone: String,

    #[serde(default)]
    pub current_locale: String,

    #[serde(default)]
    pub is_simulator: bool,
}

/// Payload of `GET /wda/batteryInfo`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BatteryInfo {
    /// Charge level in the 0.0–1.0 range; negative when unknown
    pub level: f64,
    pub state: BatteryState,
}

/// UIDevice battery states as WDA encodes them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum BatteryState {
    Unknown,
    Unplugged,
    Charging,
    Full,
}

impl From<i64> for BatteryState {
    fn from(code: i64) -> Self {
        match code {
            1 => BatteryState::Unplugged,
            2 => BatteryState::Charging,
            3 => BatteryState::Full,
            _ => BatteryState::Unknown,
        }
    }
}

/// XCUIApplication states returned by `POST /wda/apps/state`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "i64")]
pub enum AppState {
    NotInstalled,
    NotRunning,
    BackgroundSuspended,
    Background,
    Foreground,
}

impl TryFrom<i64> for AppState {
    type Error = String;

    fn try_from(code: i64) -> std::result::Result<Self, Self::Error> {
        match code {
            0 => Ok(AppState::NotInstalled),
            1 => Ok(AppState::NotRunning),
            2 => Ok(AppState::BackgroundSuspended),
            3 => Ok(AppState::Background),
            4 => Ok(AppState::Foreground),
            other => Err(format!("unknown application state code {other}")),
        }
    }
}

/// Device orientations accepted by the `/orientation` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl std::str::FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            other => Err(format!("unknown orientation '{other}'")),
        }
    }
}
