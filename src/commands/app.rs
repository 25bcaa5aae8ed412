//! Application management commands
//!
//! All of these map onto the agent's `/wda/apps/*` endpoints and address
//! applications by bundle ID.

use crate::driver::XcuiDriver;
use crate::error::Result;
use crate::wda::types::AppState;
use reqwest::Method;
use serde_json::json;
use std::collections::HashMap;

impl XcuiDriver {
    /// Bring an installed application to the foreground via
    /// `POST /wda/apps/activate`
    pub async fn activate_app(&self, bundle_id: &str) -> Result<()> {
        let body = json!({ "bundleId": bundle_id });
        self.proxy
            .proxy_command("/wda/apps/activate", Method::POST, Some(body))
            .await?;
        Ok(())
    }

    /// Launch an application via `POST /wda/apps/launch`, with launch
    /// arguments and environment passed through to the process
    pub async fn launch_app(
        &self,
        bundle_id: &str,
        arguments: &[String],
        environment: &HashMap<String, String>,
    ) -> Result<()> {
        let body = json!({
            "bundleId": bundle_id,
            "arguments": arguments,
            "environment": environment,
        });
        self.proxy
            .proxy_command("/wda/apps/launch", Method::POST, Some(body))
            .await?;
        Ok(())
    }

    /// Terminate a running application via `POST /wda/apps/terminate`.
    /// Returns whether the app was running beforehand.
    pub async fn terminate_app(&self, bundle_id: &str) -> Result<bool> {
        let body = json!({ "bundleId": bundle_id });
        let value = self
            .proxy
            .proxy_command("/wda/apps/terminate", Method::POST, Some(body))
            .await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    /// Query an application's XCUIApplication state via
    /// `POST /wda/apps/state`
    pub async fn query_app_state(&self, bundle_id: &str) -> Result<AppState> {
        let body = json!({ "bundleId": bundle_id });
        let value = self
            .proxy
            .proxy_command("/wda/apps/state", Method::POST, Some(body))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Open a URL on the device via `POST /url`. Universal links land in
    /// their app; everything else opens in Safari.
    pub async fn open_url(&self, url: &str) -> Result<()> {
        let body = json!({ "url": url });
        self.proxy
            .proxy_command("/url", Method::POST, Some(body))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::RecordingProxy;
    use std::sync::Arc;

    const BUNDLE: &str = "com.apple.Preferences";

    fn driver_with_proxy() -> (XcuiDriver, Arc<RecordingProxy>) {
        let proxy = Arc::new(RecordingProxy::new());
        (XcuiDriver::new(proxy.clone()), proxy)
    }

    #[tokio::test]
    async fn test_activate_app_posts_bundle_id() {
        let (driver, proxy) = driver_with_proxy();
        driver.activate_app(BUNDLE).await.unwrap();

        let call = proxy.single_call();
        assert_eq!(call.path, "/wda/apps/activate");
        assert_eq!(call.method, Method::POST);
        assert_eq!(call.body, Some(json!({ "bundleId": BUNDLE })));
    }

    #[tokio::test]
    async fn test_launch_app_passes_arguments_and_environment() {
        let (driver, proxy) = driver_with_proxy();
        let env = HashMap::from([("UI_TESTING".to_string(), "1".to_string())]);
        driver
            .launch_app(BUNDLE, &["-AppleLocale".to_string(), "en_US".to_string()], &env)
            .await
            .unwrap();

        let call = proxy.single_call();
        assert_eq!(call.path, "/wda/apps/launch");
        assert_eq!(
            call.body,
            Some(json!({
                "bundleId": BUNDLE,
                "arguments": ["-AppleLocale", "en_US"],
                "environment": { "UI_TESTING": "1" },
            }))
        );
    }

    #[tokio::test]
    async fn test_terminate_app_reports_prior_state() {
        let (driver, proxy) = driver_with_proxy();
        proxy.stage(Method::POST, "/wda/apps/terminate", json!(true));

        assert!(driver.terminate_app(BUNDLE).await.unwrap());
        assert_eq!(proxy.single_call().path, "/wda/apps/terminate");
    }

    #[tokio::test]
    async fn test_terminate_app_false_when_not_running() {
        let (driver, proxy) = driver_with_proxy();
        proxy.stage(Method::POST, "/wda/apps/terminate", json!(false));
        assert!(!driver.terminate_app(BUNDLE).await.unwrap());
    }

    #[tokio::test]
    async fn test_query_app_state_decodes_code() {
        let (driver, proxy) = driver_with_proxy();
        proxy.stage(Method::POST, "/wda/apps/state", json!(4));

        let state = driver.query_app_state(BUNDLE).await.unwrap();
        assert_eq!(state, AppState::Foreground);
        assert_eq!(
            proxy.single_call().body,
            Some(json!({ "bundleId": BUNDLE }))
        );
    }

    #[tokio::test]
    async fn test_open_url_posts_url() {
        let (driver, proxy) = driver_with_proxy();
        driver.open_url("https://example.com").await.unwrap();

        let call = proxy.single_call();
        assert_eq!(call.path, "/url");
        assert_eq!(call.body, Some(json!({ "url": "https://example.com" })));
    }
}
