//! Device and application facts supplied by the surrounding shell.
//!
//! Nothing in this crate queries the host for these values: the shell
//! gathers them once at startup (from the OS, the app bundle, build
//! metadata) and passes them down as plain data. That keeps everything
//! built on top of them pure and testable.

use serde::{Deserialize, Serialize};

/// Device class, used to pick a default presentation mode.
///
/// OS-level user agent detection returns the wrong answer for tablets,
/// so the shell classifies the device itself and hard-codes the policy
/// downstream (tablets get the desktop experience).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    /// Phones and other small-screen devices.
    Phone,
    /// Wide-screen devices.
    Tablet,
}

impl Default for FormFactor {
    fn default() -> Self {
        Self::Phone
    }
}

/// Facts about the device the shell is running on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Device model string (e.g. "iPhone").
    pub model: String,
    /// OS version in dotted form (e.g. "16.4").
    pub os_version: String,
    /// Device class.
    pub form_factor: FormFactor,
}

impl DeviceInfo {
    /// Create device facts for a phone.
    pub fn phone(model: impl Into<String>, os_version: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            os_version: os_version.into(),
            form_factor: FormFactor::Phone,
        }
    }

    /// Create device facts for a tablet.
    pub fn tablet(model: impl Into<String>, os_version: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            os_version: os_version.into(),
            form_factor: FormFactor::Tablet,
        }
    }

    /// Set the form factor.
    pub fn with_form_factor(mut self, form_factor: FormFactor) -> Self {
        self.form_factor = form_factor;
        self
    }
}

/// Identity of the application itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    /// User-visible product name, appended to branded user agents.
    pub display_name: String,
    /// Product token used as the prefix of client (API) user agents.
    pub client_name: String,
    /// Marketing version (e.g. "7.0").
    pub version: String,
    /// Build number (e.g. "1").
    pub build_number: String,
}

impl AppInfo {
    pub fn new(
        display_name: impl Into<String>,
        client_name: impl Into<String>,
        version: impl Into<String>,
        build_number: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            client_name: client_name.into(),
            version: version.into(),
            build_number: build_number.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_factor_default() {
        assert_eq!(FormFactor::default(), FormFactor::Phone);
    }

    #[test]
    fn test_device_info_constructors() {
        let phone = DeviceInfo::phone("iPhone", "16.4");
        assert_eq!(phone.form_factor, FormFactor::Phone);
        assert_eq!(phone.model, "iPhone");

        let tablet = DeviceInfo::tablet("iPad", "16.4");
        assert_eq!(tablet.form_factor, FormFactor::Tablet);
    }

    #[test]
    fn test_form_factor_serde() {
        let json = serde_json::to_string(&FormFactor::Tablet).unwrap();
        assert_eq!(json, r#""tablet""#);
        let back: FormFactor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FormFactor::Tablet);
    }
}
