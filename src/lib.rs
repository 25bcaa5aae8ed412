//! XCUITest automation driver
//!
//! Translates driver commands into HTTP requests against a device-resident
//! WebDriverAgent and reshapes the agent's JSON responses. The driver talks
//! to the agent only through the [`wda::WdaProxy`] seam and to the host-side
//! device only through the [`device::Device`] seam.

pub mod capabilities;
pub mod commands;
pub mod device;
pub mod driver;
pub mod error;
pub mod session;
pub mod settings;
pub mod wda;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export common items
pub use capabilities::Capabilities;
pub use driver::XcuiDriver;
pub use error::{DriverError, Result};
pub use session::SessionOptions;
pub use settings::{Settings, SettingsUpdate};
pub use wda::{WdaClient, WdaProxy};
