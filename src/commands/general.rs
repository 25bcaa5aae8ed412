//! General commands: backgrounding, Touch ID, window and screen geometry
//!
//! Each command validates its preconditions, issues at most one proxied
//! call, and reshapes the payload into its return type.

use crate::driver::XcuiDriver;
use crate::error::{DriverError, Result};
use crate::wda::types::{ScreenInfo, Size, ViewportRect};
use reqwest::Method;
use serde_json::json;
use std::time::Duration;

impl XcuiDriver {
    /// Send the frontmost application to the background via
    /// `POST /wda/deactivateApp`. With a duration the agent reactivates
    /// the app after that long.
    pub async fn background(&self, duration: Option<Duration>) -> Result<()> {
        let body = duration.map(|d| json!({ "duration": d.as_secs_f64() }));
        self.proxy
            .proxy_command("/wda/deactivateApp", Method::POST, body)
            .await?;
        Ok(())
    }

    /// Simulate a Touch ID check via `POST /wda/touch_id`. `None` plays a
    /// matching finger. Simulator only.
    pub async fn touch_id(&self, matching: Option<bool>) -> Result<()> {
        self.require_simulator("Touch ID simulation")?;
        let body = json!({ "match": matching.unwrap_or(true) });
        self.proxy
            .proxy_command("/wda/touch_id", Method::POST, Some(body))
            .await?;
        Ok(())
    }

    /// Flip the simulator's Touch ID enrollment state. Not proxied: the
    /// enrollment toggle is a device capability, so this delegates to the
    /// attached device. Requires the `allowTouchIdEnroll` capability.
    pub async fn toggle_enroll_touch_id(&self) -> Result<()> {
        self.require_simulator("Toggling Touch ID enrollment")?;
        if !self.opts.allow_touch_id_enroll {
            return Err(DriverError::UnsupportedOperation(
                "Touch ID enrollment is not supported unless the allowTouchIdEnroll capability is set"
                    .to_string(),
            ));
        }
        self.device()?.enroll_touch_id().await
    }

    /// Dimensions of the active application window, passed through from
    /// `GET /window/size`
    pub async fn window_rect(&self) -> Result<Size> {
        let value = self
            .proxy
            .proxy_command("/window/size", Method::GET, None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Raw screen measurements from `GET /wda/screen`
    pub async fn screen_info(&self) -> Result<ScreenInfo> {
        let value = self
            .proxy
            .proxy_command("/wda/screen", Method::GET, None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Ratio between physical pixels and logical points
    pub async fn device_pixel_ratio(&self) -> Result<f64> {
        Ok(self.screen_info().await?.scale)
    }

    /// Status bar height in points
    pub async fn status_bar_height(&self) -> Result<f64> {
        Ok(self.screen_info().await?.status_bar_size.height)
    }

    /// Web-visible viewport in physical pixels, derived from screen info
    /// and window size (two proxied calls)
    pub async fn viewport_rect(&self) -> Result<ViewportRect> {
        let screen = self.screen_info().await?;
        let window = self.window_rect().await?;
        Ok(ViewportRect {
            left: 0.0,
            top: screen.status_bar_size.height * screen.scale,
            width: window.width * screen.scale,
            height: (window.height - screen.status_bar_size.height) * screen.scale,
        })
    }
}
