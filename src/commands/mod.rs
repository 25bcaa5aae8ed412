//! Driver command surface
//!
//! Each module adds one group of commands to [`XcuiDriver`](crate::driver::XcuiDriver)
//! as an `impl` block. Commands share a single shape: validate preconditions,
//! issue at most one proxied call (or one device delegation), reshape the
//! payload into the return type.

pub mod app;
pub mod device;
pub mod general;
pub mod keyboard;
pub mod screen;
pub mod settings;
