//! Client (API) user agents.
//!
//! These identify the app itself to its own backend services, as opposed
//! to the web-facing UAs in [`presets`](crate::presets). The format is a
//! fixed convention the backends parse, so it is assembled verbatim.

use common::{AppInfo, DeviceInfo};

/// Client UA for an arbitrary service prefix:
/// `"{prefix}/{version}b{build} ({model}; iPhone OS {os}) ({display_name})"`.
pub fn client_user_agent(app: &AppInfo, device: &DeviceInfo, prefix: &str) -> String {
    format!(
        "{}/{}b{} ({}; iPhone OS {}) ({})",
        prefix, app.version, app.build_number, device.model, device.os_version, app.display_name
    )
}

/// Client UA sent to general backend services.
pub fn default_client_user_agent(app: &AppInfo, device: &DeviceInfo) -> String {
    client_user_agent(app, device, &app.client_name)
}

/// Client UA sent to the account service.
pub fn account_client_user_agent(app: &AppInfo, device: &DeviceInfo) -> String {
    let prefix = format!("{}-Accounts", app.client_name);
    client_user_agent(app, device, &prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (AppInfo, DeviceInfo) {
        (
            AppInfo::new("Fennec", "Firefox-iOS", "7.0", "1"),
            DeviceInfo::phone("iPhone13,2", "16.4"),
        )
    }

    #[test]
    fn test_default_client_user_agent() {
        let (app, device) = fixtures();
        assert_eq!(
            default_client_user_agent(&app, &device),
            "Firefox-iOS/7.0b1 (iPhone13,2; iPhone OS 16.4) (Fennec)"
        );
    }

    #[test]
    fn test_account_client_user_agent() {
        let (app, device) = fixtures();
        assert_eq!(
            account_client_user_agent(&app, &device),
            "Firefox-iOS-Accounts/7.0b1 (iPhone13,2; iPhone OS 16.4) (Fennec)"
        );
    }

    #[test]
    fn test_client_user_agent_keeps_dotted_os_version() {
        // Unlike the web-facing mobile UA, client UAs keep the dotted form.
        let (app, device) = fixtures();
        assert!(default_client_user_agent(&app, &device).contains("16.4"));
    }
}
