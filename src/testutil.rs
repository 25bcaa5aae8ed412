//! Test doubles for the driver's collaborator seams
//!
//! [`RecordingProxy`] and [`StubDevice`] implement the proxy and device
//! traits directly, so command tests can assert on issued calls and stage
//! responses without touching any transport.

use crate::device::Device;
use crate::error::Result;
use crate::wda::WdaProxy;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// One proxied call as the driver issued it
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub path: String,
    pub method: Method,
    pub body: Option<Value>,
}

/// Proxy double that records every call and serves staged responses
#[derive(Default)]
pub struct RecordingProxy {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<HashMap<(Method, String), Value>>,
}

impl RecordingProxy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage the value returned for a (method, path) pair. Unstaged calls
    /// resolve to JSON null, like side-effect-only agent endpoints.
    pub fn stage(&self, method: Method, path: &str, value: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert((method, path.to_string()), value);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The only recorded call; panics unless exactly one was made
    pub fn single_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one proxied call");
        calls[0].clone()
    }
}

#[async_trait]
impl WdaProxy for RecordingProxy {
    async fn proxy_command(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            path: path.to_string(),
            method: method.clone(),
            body,
        });
        let staged = self
            .responses
            .lock()
            .unwrap()
            .get(&(method, path.to_string()))
            .cloned();
        Ok(staged.unwrap_or(Value::Null))
    }
}

/// Device double that counts capability calls
#[derive(Default)]
pub struct StubDevice {
    enroll_calls: AtomicUsize,
    pasteboard: Mutex<String>,
}

impl StubDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enroll_calls(&self) -> usize {
        self.enroll_calls.load(Ordering::SeqCst)
    }

    pub fn pasteboard(&self) -> String {
        self.pasteboard.lock().unwrap().clone()
    }
}

#[async_trait]
impl Device for StubDevice {
    fn udid(&self) -> &str {
        "STUB-UDID"
    }

    async fn enroll_touch_id(&self) -> Result<()> {
        self.enroll_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn set_pasteboard(&self, content: &str) -> Result<()> {
        *self.pasteboard.lock().unwrap() = content.to_string();
        Ok(())
    }

    async fn get_pasteboard(&self) -> Result<String> {
        Ok(self.pasteboard())
    }
}
