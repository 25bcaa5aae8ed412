//! WebDriverAgent integration
//!
//! The [`proxy::WdaProxy`] trait is the only seam the driver uses to reach
//! the agent; [`client::WdaClient`] is its HTTP implementation.

pub mod client;
pub mod proxy;
pub mod types;

pub use client::{WdaClient, DEFAULT_WDA_PORT};
pub use proxy::WdaProxy;
