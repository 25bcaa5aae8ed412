//! Device-level commands: lock state, hardware buttons, Siri, device and
//! battery queries, pasteboard
//!
//! Pasteboard access is the one group here that never touches the agent;
//! it is a host-side simulator capability and delegates to the attached
//! device.

use crate::driver::XcuiDriver;
use crate::error::Result;
use crate::wda::types::{BatteryInfo, DeviceInfo};
use reqwest::Method;
use serde_json::json;

impl XcuiDriver {
    /// Lock the screen via `POST /wda/lock`
    pub async fn lock(&self) -> Result<()> {
        self.proxy
            .proxy_command("/wda/lock", Method::POST, None)
            .await?;
        Ok(())
    }

    /// Unlock the screen via `POST /wda/unlock`
    pub async fn unlock(&self) -> Result<()> {
        self.proxy
            .proxy_command("/wda/unlock", Method::POST, None)
            .await?;
        Ok(())
    }

    /// Whether the screen is currently locked, via `GET /wda/locked`
    pub async fn is_locked(&self) -> Result<bool> {
        let value = self
            .proxy
            .proxy_command("/wda/locked", Method::GET, None)
            .await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    /// Press a hardware button via `POST /wda/pressButton`. The agent
    /// accepts "home", "volumeUp" and "volumeDown".
    pub async fn press_button(&self, name: &str) -> Result<()> {
        let body = json!({ "name": name });
        self.proxy
            .proxy_command("/wda/pressButton", Method::POST, Some(body))
            .await?;
        Ok(())
    }

    /// Activate Siri with a spoken-text equivalent via
    /// `POST /wda/siri/activate`
    pub async fn siri_command(&self, text: &str) -> Result<()> {
        let body = json!({ "text": text });
        self.proxy
            .proxy_command("/wda/siri/activate", Method::POST, Some(body))
            .await?;
        Ok(())
    }

    /// Device description from `GET /wda/device/info`
    pub async fn device_info(&self) -> Result<DeviceInfo> {
        let value = self
            .proxy
            .proxy_command("/wda/device/info", Method::GET, None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Battery charge and state from `GET /wda/batteryInfo`
    pub async fn battery_info(&self) -> Result<BatteryInfo> {
        let value = self
            .proxy
            .proxy_command("/wda/batteryInfo", Method::GET, None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Replace the pasteboard content. Host-side simulator capability,
    /// delegated to the attached device.
    pub async fn set_pasteboard(&self, content: &str) -> Result<()> {
        self.require_simulator("Setting the pasteboard")?;
        self.device()?.set_pasteboard(content).await
    }

    /// Read the pasteboard content. Host-side simulator capability,
    /// delegated to the attached device.
    pub async fn get_pasteboard(&self) -> Result<String> {
        self.require_simulator("Reading the pasteboard")?;
        self.device()?.get_pasteboard().await
    }
}
