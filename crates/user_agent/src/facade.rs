//! User-Agent selection for the browser shell.
//!
//! [`UserAgents`] is constructed once at startup from device and app facts
//! plus an override table, and passed by reference to every call site.
//! There is no global state: the default desktop/mobile strings are
//! memoized per instance with a one-time initialization cell.

use crate::overrides::OverrideTable;
use crate::presets;
use common::{AppInfo, BrowserResult, DeviceInfo, FormFactor};
use once_cell::sync::OnceCell;
use std::fmt;
use url::Url;

/// Presentation mode a site is served under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Spoofed desktop presentation.
    Desktop,
    /// Native mobile presentation.
    Mobile,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "Desktop",
            Self::Mobile => "Mobile",
        }
    }

    /// The other presentation mode.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Desktop => Self::Mobile,
            Self::Mobile => Self::Desktop,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Heuristic check for a desktop UA string.
///
/// This is a substring match, not a structural parse: any UA containing
/// "intel mac" (case-insensitive) classifies as desktop, including an
/// override literal that happens to embed it.
pub fn is_desktop(ua: &str) -> bool {
    ua.to_lowercase().contains("intel mac")
}

/// Picks the User-Agent string for a navigation.
#[derive(Debug)]
pub struct UserAgents {
    device: DeviceInfo,
    app: AppInfo,
    overrides: OverrideTable,
    desktop_ua: OnceCell<String>,
    mobile_ua: OnceCell<String>,
}

impl UserAgents {
    /// Create a facade with an empty override table.
    pub fn new(device: DeviceInfo, app: AppInfo) -> Self {
        Self {
            device,
            app,
            overrides: OverrideTable::new(),
            desktop_ua: OnceCell::new(),
            mobile_ua: OnceCell::new(),
        }
    }

    /// Set the override table.
    pub fn with_overrides(mut self, overrides: OverrideTable) -> Self {
        self.overrides = overrides;
        self
    }

    /// Create a facade carrying the stock override table (sites that must
    /// always see the stock mobile UA).
    pub fn with_stock_overrides(device: DeviceInfo, app: AppInfo) -> Self {
        let facade = Self::new(device, app);
        let overrides = crate::overrides::stock_mobile_overrides(facade.mobile_user_agent());
        facade.with_overrides(overrides)
    }

    /// The device facts this facade was configured with.
    pub fn device(&self) -> &DeviceInfo {
        &self.device
    }

    /// The app identity this facade was configured with.
    pub fn app(&self) -> &AppInfo {
        &self.app
    }

    /// The override table in use.
    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// The fixed desktop UA. Domain-invariant; computed once.
    pub fn desktop_user_agent(&self) -> &str {
        self.desktop_ua
            .get_or_init(|| presets::default_desktop(&self.app, true).user_agent())
    }

    /// The default mobile UA for this device. Computed once.
    pub fn mobile_user_agent(&self) -> &str {
        self.mobile_ua
            .get_or_init(|| presets::default_mobile(&self.device, &self.app, true).user_agent())
    }

    /// The UA to send to `domain` under the requested presentation mode.
    ///
    /// Desktop is domain-invariant. Mobile consults the override table
    /// first and falls back to the default mobile UA.
    pub fn user_agent(&self, domain: &str, platform: Platform) -> String {
        tracing::debug!("Selecting {} user agent for {}", platform, domain);
        match platform {
            Platform::Desktop => self.desktop_user_agent().to_string(),
            Platform::Mobile => match self.overrides.get(domain) {
                Some(ua) => {
                    tracing::debug!("Using override user agent for {}", domain);
                    ua.to_string()
                }
                None => self.mobile_user_agent().to_string(),
            },
        }
    }

    /// The default presentation mode for this device.
    ///
    /// Tablets get the desktop experience; OS-level UA detection reports
    /// the mobile UA on tablets, so the policy is hard-coded here instead
    /// of trusting platform introspection.
    pub fn default_platform(&self) -> Platform {
        match self.device.form_factor {
            FormFactor::Tablet => Platform::Desktop,
            FormFactor::Phone => Platform::Mobile,
        }
    }

    /// The UA to send to `domain` when the user expressed no preference.
    pub fn default_user_agent(&self, domain: &str) -> String {
        self.user_agent(domain, self.default_platform())
    }

    /// The UA for the presentation mode opposite to the current default.
    ///
    /// Classifies the current default via [`is_desktop`] and returns the
    /// other preset's UA for the same domain. For domains without an
    /// override this is an involution: applying it twice round-trips.
    pub fn opposite_user_agent(&self, domain: &str) -> String {
        if is_desktop(&self.default_user_agent(domain)) {
            self.user_agent(domain, Platform::Mobile)
        } else {
            self.user_agent(domain, Platform::Desktop)
        }
    }

    /// The default UA for a page URL.
    ///
    /// Override-table keys are bare registrable domains, so the URL's host
    /// is used with a leading "www." stripped. URLs without a domain (e.g.
    /// "about:blank") fall through to the default UA.
    pub fn user_agent_for_url(&self, url: &Url) -> String {
        let domain = url
            .domain()
            .map(|d| d.strip_prefix("www.").unwrap_or(d))
            .unwrap_or("");
        self.default_user_agent(domain)
    }

    /// The default UA for a page URL supplied as a string.
    pub fn user_agent_for_url_str(&self, url: &str) -> BrowserResult<String> {
        Ok(self.user_agent_for_url(&Url::parse(url)?))
    }
}
