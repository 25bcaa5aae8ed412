//! Screen commands: screenshots, page source, orientation

use crate::driver::XcuiDriver;
use crate::error::{DriverError, Result};
use crate::wda::types::Orientation;
use base64::Engine;
use reqwest::Method;
use serde_json::json;
use std::path::Path;

impl XcuiDriver {
    /// Take a screenshot via `GET /screenshot`. Returns the base64-encoded
    /// PNG as the agent delivers it.
    pub async fn screenshot(&self) -> Result<String> {
        let value = self
            .proxy
            .proxy_command("/screenshot", Method::GET, None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Take a screenshot and write the decoded PNG to a file
    pub async fn screenshot_to_file(&self, path: &Path) -> Result<()> {
        let base64_data = self.screenshot().await?;
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(base64_data.trim())
            .map_err(|e| {
                DriverError::InvalidResponse(format!("screenshot is not valid base64: {}", e))
            })?;
        std::fs::write(path, decoded)?;
        Ok(())
    }

    /// Current UI hierarchy via `GET /source`. XML by default; when the
    /// `useJsonSource` setting is on the agent serializes to JSON instead.
    pub async fn source(&self) -> Result<String> {
        let path = if self.opts.use_json_source {
            "/source?format=json"
        } else {
            "/source"
        };
        let value = self.proxy.proxy_command(path, Method::GET, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Current device orientation via `GET /orientation`
    pub async fn orientation(&self) -> Result<Orientation> {
        let value = self
            .proxy
            .proxy_command("/orientation", Method::GET, None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Rotate the device via `POST /orientation`
    pub async fn set_orientation(&self, orientation: Orientation) -> Result<()> {
        let body = json!({ "orientation": orientation });
        self.proxy
            .proxy_command("/orientation", Method::POST, Some(body))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::RecordingProxy;
    use std::sync::Arc;

    fn driver_with_proxy() -> (XcuiDriver, Arc<RecordingProxy>) {
        let proxy = Arc::new(RecordingProxy::new());
        (XcuiDriver::new(proxy.clone()), proxy)
    }

    #[tokio::test]
    async fn test_screenshot_returns_base64_payload() {
        let (driver, proxy) = driver_with_proxy();
        proxy.stage(Method::GET, "/screenshot", json!("UE5HREFUQQ=="));

        assert_eq!(driver.screenshot().await.unwrap(), "UE5HREFUQQ==");
        assert_eq!(proxy.single_call().path, "/screenshot");
    }

    #[tokio::test]
    async fn test_screenshot_to_file_decodes_png() {
        let (driver, proxy) = driver_with_proxy();
        proxy.stage(Method::GET, "/screenshot", json!("UE5HREFUQQ=="));

        let path = std::env::temp_dir().join("xcui-driver-screenshot-test.png");
        driver.screenshot_to_file(&path).await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"PNGDATA");
        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_source_is_xml_by_default() {
        let (driver, proxy) = driver_with_proxy();
        proxy.stage(Method::GET, "/source", json!("<AppiumAUT/>"));

        assert_eq!(driver.source().await.unwrap(), "<AppiumAUT/>");
        assert_eq!(proxy.single_call().path, "/source");
    }

    #[tokio::test]
    async fn test_source_honors_json_setting() {
        let (mut driver, proxy) = driver_with_proxy();
        driver.opts.use_json_source = true;
        proxy.stage(Method::GET, "/source?format=json", json!("{}"));

        assert_eq!(driver.source().await.unwrap(), "{}");
        assert_eq!(proxy.single_call().path, "/source?format=json");
    }

    #[tokio::test]
    async fn test_orientation_round_trip() {
        let (driver, proxy) = driver_with_proxy();
        proxy.stage(Method::GET, "/orientation", json!("LANDSCAPE"));

        assert_eq!(driver.orientation().await.unwrap(), Orientation::Landscape);

        driver.set_orientation(Orientation::Portrait).await.unwrap();
        let calls = proxy.calls();
        assert_eq!(calls[1].path, "/orientation");
        assert_eq!(calls[1].method, Method::POST);
        assert_eq!(calls[1].body, Some(json!({ "orientation": "PORTRAIT" })));
    }
}
