//! Canonical Desktop and Mobile component presets.
//!
//! Every token here is a compatibility constant: sites string-match on UA
//! substrings, so the exact byte content matters more than truthfulness.
//! The desktop system-info in particular is a deliberate spoof and is never
//! derived from the real host.

use crate::builder::{ComponentOverrides, UserAgentBuilder, UserAgentComponents};
use common::{AppInfo, DeviceInfo};

/// Literal User-Agent tokens.
pub mod tokens {
    /// Product token.
    pub const PRODUCT: &str = "Mozilla/5.0";
    /// Rendering platform token.
    pub const PLATFORM: &str = "AppleWebKit/605.1.15";
    /// Platform details token.
    pub const PLATFORM_DETAILS: &str = "(KHTML, like Gecko)";
    /// Safari compatibility token.
    pub const SAFARI_COMPAT: &str = "Safari/605.1.15";
    /// Mobile indicator token.
    pub const MOBILE: &str = "Mobile/15E148";
    /// Browser version token. Advertising our own version scheme here
    /// trips warning banners on some sites, so it mirrors Safari's.
    pub const BROWSER_VERSION: &str = "Version/13.0.4";
    /// Fixed desktop system-info. Not derived from the host: desktop UAs
    /// are spoofed on a mobile device.
    pub const DESKTOP_SYSTEM_INFO: &str = "(Macintosh; Intel Mac OS X 10_15)";
}

/// Builder preconfigured with the desktop preset.
pub fn default_desktop(app: &AppInfo, with_brand: bool) -> UserAgentBuilder {
    UserAgentBuilder::new(UserAgentComponents::new(
        tokens::PRODUCT,
        tokens::DESKTOP_SYSTEM_INFO,
        tokens::PLATFORM,
        tokens::PLATFORM_DETAILS,
        extensions(false, app, with_brand),
    ))
}

/// Builder preconfigured with the mobile preset for the given device.
pub fn default_mobile(device: &DeviceInfo, app: &AppInfo, with_brand: bool) -> UserAgentBuilder {
    UserAgentBuilder::new(UserAgentComponents::new(
        tokens::PRODUCT,
        mobile_system_info(device),
        tokens::PLATFORM,
        tokens::PLATFORM_DETAILS,
        extensions(true, app, with_brand),
    ))
}

/// Desktop UA with a newer version token in place of the usual extensions.
///
/// Some override-table sites gate on the advertised version, so this
/// variant swaps the whole extensions component of the desktop preset
/// (brand token included) for "Version/21.0 Safari/605.1.15".
pub fn custom_desktop_user_agent(app: &AppInfo) -> String {
    default_desktop(app, true).clone_with(&ComponentOverrides::extensions(format!(
        "Version/21.0 {}",
        tokens::SAFARI_COMPAT
    )))
}

/// Mobile system-info from device facts.
///
/// The OS version renders with underscores ("16_4", not "16.4"), per the
/// platform UA convention. A version with no dots passes through unchanged.
fn mobile_system_info(device: &DeviceInfo) -> String {
    format!(
        "({}; CPU {} OS {} like Mac OS X)",
        device.model,
        device.model,
        device.os_version.replace('.', "_")
    )
}

/// Trailing extension tokens for either preset.
///
/// Without the brand token the result is indistinguishable from the stock
/// platform browser, which is what some override-table sites require.
fn extensions(mobile: bool, app: &AppInfo, with_brand: bool) -> String {
    let mut extensions = tokens::BROWSER_VERSION.to_string();
    if mobile {
        extensions.push(' ');
        extensions.push_str(tokens::MOBILE);
    }
    extensions.push(' ');
    extensions.push_str(tokens::SAFARI_COMPAT);
    if with_brand {
        extensions.push(' ');
        extensions.push_str(&app.display_name);
    }
    extensions
}
