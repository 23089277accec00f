//! User-Agent construction for the browser shell.
//!
//! This crate handles:
//! - Assembling UA strings from ordered components
//! - Canonical Desktop and Mobile presets
//! - Per-domain override tables
//! - Selecting the UA for a navigation (platform, form factor, overrides)
//! - Client (API) user agents for backend services

pub mod builder;
pub mod client;
pub mod facade;
pub mod overrides;
pub mod presets;

pub use builder::{ComponentOverrides, UserAgentBuilder, UserAgentComponents};
pub use facade::{is_desktop, Platform, UserAgents};
pub use overrides::OverrideTable;
