//! Device collaborators
//!
//! A [`Device`] is the session's handle to capabilities that bypass
//! WebDriverAgent and act on the host side instead: Touch ID enrollment
//! and the pasteboard. Simulators implement them by driving the Simulator
//! app and `simctl`; real devices have no host-side equivalent and reject.

pub mod real;
pub mod simulator;

pub use real::RealDevice;
pub use simulator::SimulatorDevice;

use crate::error::Result;
use async_trait::async_trait;

/// Capability methods the driver can delegate to the device
#[async_trait]
pub trait Device: Send + Sync {
    /// Device UDID
    fn udid(&self) -> &str;

    /// Flip the simulator's Touch ID enrollment state
    async fn enroll_touch_id(&self) -> Result<()>;

    /// Replace the device pasteboard content
    async fn set_pasteboard(&self, content: &str) -> Result<()>;

    /// Read the device pasteboard content
    async fn get_pasteboard(&self) -> Result<String>;
}
