//! WebDriverAgent HTTP client
//!
//! Production [`WdaProxy`] implementation. WDA runs on port 8100 by
//! default and uses the XCTest framework under the hood; this client only
//! assumes a reachable HTTP endpoint, so it works against simulators,
//! USB-forwarded real devices, and remote hosts alike.

use crate::error::{DriverError, Result};
use crate::wda::proxy::WdaProxy;
use crate::wda::types::WdaStatus;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Value};
use std::time::Duration;
use tokio::sync::Mutex;

/// Default WDA port
pub const DEFAULT_WDA_PORT: u16 = 8100;

/// HTTP client for a running WebDriverAgent
pub struct WdaClient {
    /// Base URL for WDA (e.g., "http://localhost:8100")
    base_url: String,
    /// HTTP client
    client: reqwest::Client,
    /// Agent session ID, created lazily on the first session-scoped call
    session_id: Mutex<Option<String>>,
}

impl WdaClient {
    /// Create a client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            session_id: Mutex::new(None),
        }
    }

    /// Create a client for WDA on localhost at the given port
    pub fn with_port(port: u16) -> Self {
        Self::new(format!("http://localhost:{}", port))
    }

    /// Check if WDA is up and ready to accept commands
    pub async fn is_ready(&self) -> bool {
        match self.status().await {
            Ok(status) => status.ready,
            Err(_) => false,
        }
    }

    /// Query agent status via `GET /status`
    pub async fn status(&self) -> Result<WdaStatus> {
        let url = format!("{}/status", self.base_url);
        let resp = self.client.get(&url).send().await?;
        let http_status = resp.status().as_u16();
        let body: Value = resp.json().await?;

        let payload = Self::extract_value(http_status, body.clone())?;
        let mut status: WdaStatus = serde_json::from_value(payload)?;
        // Newer agents only report the session at the envelope level
        if status.session_id.is_none() {
            status.session_id = body
                .get("sessionId")
                .and_then(Value::as_str)
                .map(str::to_string);
        }
        Ok(status)
    }

    /// Get the current agent session, creating one if needed.
    ///
    /// Reuses a session the agent already holds (reported by `/status`)
    /// before asking for a fresh one.
    pub async fn ensure_session(&self) -> Result<String> {
        let mut guard = self.session_id.lock().await;
        if let Some(ref id) = *guard {
            return Ok(id.clone());
        }

        if let Ok(status) = self.status().await {
            if let Some(id) = status.session_id {
                log::debug!("reusing existing WDA session {}", id);
                *guard = Some(id.clone());
                return Ok(id);
            }
        }

        let url = format!("{}/session", self.base_url);
        let body = json!({ "capabilities": {} });
        let resp = self.client.post(&url).json(&body).send().await?;
        let http_status = resp.status().as_u16();
        let body: Value = resp.json().await?;

        let id = Self::session_id_from(&body).ok_or_else(|| {
            DriverError::InvalidResponse(format!(
                "no session ID in create-session response (HTTP {})",
                http_status
            ))
        })?;

        log::info!("created WDA session {}", id);
        *guard = Some(id.clone());
        Ok(id)
    }

    /// Tear down the agent session, if one was created
    pub async fn delete_session(&self) -> Result<()> {
        let mut guard = self.session_id.lock().await;
        if let Some(id) = guard.take() {
            let url = format!("{}/session/{}", self.base_url, id);
            let resp = self.client.delete(&url).send().await?;
            let http_status = resp.status().as_u16();
            let body: Value = resp.json().await?;
            Self::extract_value(http_status, body)?;
            log::debug!("deleted WDA session {}", id);
        }
        Ok(())
    }

    /// Whether a path is served outside any session scope
    fn sessionless(path: &str) -> bool {
        path == "/status" || path == "/session" || path.starts_with("/session/")
    }

    fn session_url(&self, session_id: &str, path: &str) -> String {
        format!("{}/session/{}{}", self.base_url, session_id, path)
    }

    /// Pull the session ID out of a create-session response. Agents have
    /// reported it at the envelope level, inside the value, or both.
    fn session_id_from(body: &Value) -> Option<String> {
        body.get("sessionId")
            .and_then(Value::as_str)
            .or_else(|| {
                body.get("value")
                    .and_then(|v| v.get("sessionId"))
                    .and_then(Value::as_str)
            })
            .map(str::to_string)
    }

    /// Unwrap the WDA response envelope, mapping error payloads onto
    /// [`DriverError::Agent`]
    fn extract_value(http_status: u16, body: Value) -> Result<Value> {
        if !(200..300).contains(&http_status) {
            let value = body.get("value").cloned().unwrap_or(Value::Null);
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .or_else(|| {
                    value
                        .get("error")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_else(|| value.to_string());
            return Err(DriverError::Agent {
                status: http_status,
                message,
            });
        }
        Ok(body.get("value").cloned().unwrap_or(Value::Null))
    }
}

#[async_trait]
impl WdaProxy for WdaClient {
    async fn proxy_command(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<Value> {
        let url = if Self::sessionless(path) {
            format!("{}{}", self.base_url, path)
        } else {
            let session_id = self.ensure_session().await?;
            self.session_url(&session_id, path)
        };

        log::debug!("proxying {} {}", method, path);
        let mut request = self.client.request(method, &url);
        if let Some(ref body) = body {
            request = request.json(body);
        }

        let resp = request.send().await?;
        let http_status = resp.status().as_u16();
        let body: Value = resp.json().await?;
        Self::extract_value(http_status, body)
    }
}
