//! Driver error types
//!
//! Every public driver operation returns [`Result`]. Transport and decode
//! failures propagate unchanged; the driver performs no retries.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DriverError>;

/// Errors produced by driver operations
#[derive(Debug, Error)]
pub enum DriverError {
    /// A simulator-only command was invoked in a context that cannot
    /// perform it. The message always contains "not supported" so callers
    /// can match on it.
    #[error("{0}")]
    UnsupportedOperation(String),

    /// Session creation was given capabilities the driver cannot honor
    #[error("invalid capabilities: {0}")]
    Capabilities(String),

    /// WebDriverAgent answered with an error payload
    #[error("WebDriverAgent request failed (HTTP {status}): {message}")]
    Agent { status: u16, message: String },

    /// WebDriverAgent answered 2xx but the payload did not have the
    /// shape the command expects
    #[error("unexpected response from WebDriverAgent: {0}")]
    InvalidResponse(String),

    /// A device-delegating command ran before a device was attached
    #[error("no device is associated with this session")]
    NoDevice,

    /// A device capability call failed on the host side
    #[error("device command failed: {0}")]
    Device(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DriverError {
    /// Rejection for a simulator-only command invoked against a real device
    pub fn not_supported_on_real_device(what: &str) -> Self {
        DriverError::UnsupportedOperation(format!("{what} is not supported on real devices"))
    }
}
