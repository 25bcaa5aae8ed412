//! Keyboard commands
//!
//! Typing goes to whichever element currently has keyboard focus.

use crate::driver::XcuiDriver;
use crate::error::Result;
use reqwest::Method;
use serde_json::json;

impl XcuiDriver {
    /// Type text via `POST /wda/keys`. The agent expects each character
    /// as a separate string in the array.
    pub async fn send_keys(&self, text: &str) -> Result<()> {
        let chars: Vec<String> = text.chars().map(|c| c.to_string()).collect();
        let body = json!({ "value": chars });
        self.proxy
            .proxy_command("/wda/keys", Method::POST, Some(body))
            .await?;
        Ok(())
    }

    /// Press a named keyboard key (Return, Delete, Tab, Escape). Other
    /// names are typed as-is.
    pub async fn press_key(&self, key: &str) -> Result<()> {
        let key_value = match key.to_uppercase().as_str() {
            "RETURN" | "ENTER" => "\n",
            "DELETE" | "BACKSPACE" => "\u{8}",
            "TAB" => "\t",
            "ESCAPE" | "ESC" => "\u{1b}",
            _ => key,
        };
        self.send_keys(key_value).await
    }

    /// Dismiss the software keyboard via `POST /wda/keyboard/dismiss`
    pub async fn hide_keyboard(&self) -> Result<()> {
        self.proxy
            .proxy_command("/wda/keyboard/dismiss", Method::POST, None)
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
    async fn test_send_keys_splits_per_character() {
        let (driver, proxy) = driver_with_proxy();
        driver.send_keys("hi!").await.unwrap();

        let call = proxy.single_call();
        assert_eq!(call.path, "/wda/keys");
        assert_eq!(call.method, Method::POST);
        assert_eq!(call.body, Some(json!({ "value": ["h", "i", "!"] })));
    }

    #[tokio::test]
    async fn test_press_key_maps_named_keys() {
        let (driver, proxy) = driver_with_proxy();
        driver.press_key("Return").await.unwrap();
        assert_eq!(proxy.single_call().body, Some(json!({ "value": ["\n"] })));
    }

    #[tokio::test]
    async fn test_press_key_types_unknown_names_verbatim() {
        let (driver, proxy) = driver_with_proxy();
        driver.press_key("a").await.unwrap();
        assert_eq!(proxy.single_call().body, Some(json!({ "value": ["a"] })));
    }

    #[tokio::test]
    async fn test_hide_keyboard_posts_dismiss() {
        let (driver, proxy) = driver_with_proxy();
        driver.hide_keyboard().await.unwrap();

        let call = proxy.single_call();
        assert_eq!(call.path, "/wda/keyboard/dismiss");
        assert_eq!(call.body, None);
    }
}
