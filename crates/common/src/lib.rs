//! Common types used across the browser shell.

pub mod device;
pub mod error;

pub use device::{AppInfo, DeviceInfo, FormFactor};
pub use error::{BrowserError, BrowserResult};
