//! Proxy-call seam between the driver and WebDriverAgent
//!
//! The driver never talks to the agent directly; every proxied operation
//! goes through this one interface, so tests can substitute a double that
//! records calls and stages responses.

use crate::error::Result;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

/// One proxied agent call: path relative to the session root, HTTP method,
/// optional JSON body. Returns the response payload with the WDA `value`
/// envelope already unwrapped.
#[async_trait]
pub trait WdaProxy: Send + Sync {
    async fn proxy_command(&self, path: &str, method: Method, body: Option<Value>)
        -> Result<Value>;
}
