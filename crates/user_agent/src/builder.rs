//! User-Agent string assembly.

use std::fmt;

/// The five ordered components of a User-Agent string.
///
/// Components are immutable once constructed: to change a field, build a
/// whole new value (or go through [`UserAgentBuilder::clone_with`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserAgentComponents {
    /// Product token (e.g. "Mozilla/5.0").
    pub product: String,
    /// Parenthesized system information (e.g. "(Macintosh; Intel Mac OS X 10_15)").
    pub system_info: String,
    /// Rendering platform token (e.g. "AppleWebKit/605.1.15").
    pub platform: String,
    /// Platform details (e.g. "(KHTML, like Gecko)").
    pub platform_details: String,
    /// Trailing extension tokens (version, mobile indicator, compat, brand).
    pub extensions: String,
}

impl UserAgentComponents {
    pub fn new(
        product: impl Into<String>,
        system_info: impl Into<String>,
        platform: impl Into<String>,
        platform_details: impl Into<String>,
        extensions: impl Into<String>,
    ) -> Self {
        Self {
            product: product.into(),
            system_info: system_info.into(),
            platform: platform.into(),
            platform_details: platform_details.into(),
            extensions: extensions.into(),
        }
    }
}

/// Selective per-field replacements for [`UserAgentBuilder::clone_with`].
///
/// `None` keeps the base builder's value for that field.
#[derive(Clone, Debug, Default)]
pub struct ComponentOverrides {
    pub product: Option<String>,
    pub system_info: Option<String>,
    pub platform: Option<String>,
    pub platform_details: Option<String>,
    pub extensions: Option<String>,
}

impl ComponentOverrides {
    /// No replacements; cloning with this yields the base string unchanged.
    pub fn none() -> Self {
        Self::default()
    }

    /// Replace only the extensions field.
    pub fn extensions(extensions: impl Into<String>) -> Self {
        Self {
            extensions: Some(extensions.into()),
            ..Self::default()
        }
    }

    /// Replace only the system-info field.
    pub fn system_info(system_info: impl Into<String>) -> Self {
        Self {
            system_info: Some(system_info.into()),
            ..Self::default()
        }
    }
}

/// Assembles a User-Agent string from five named components.
///
/// Pure and stateless: joining never fails, and absent components simply
/// drop out of the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserAgentBuilder {
    components: UserAgentComponents,
}

impl UserAgentBuilder {
    pub fn new(components: UserAgentComponents) -> Self {
        Self { components }
    }

    /// The components this builder was constructed with.
    pub fn components(&self) -> &UserAgentComponents {
        &self.components
    }

    /// Join the components in fixed order with a single space.
    ///
    /// Empty and whitespace-only components are skipped, so the result never
    /// contains a double space and never starts or ends with one. Whitespace
    /// embedded inside a non-empty component is kept as-is.
    pub fn user_agent(&self) -> String {
        let c = &self.components;
        Self::join_non_empty([
            &c.product,
            &c.system_info,
            &c.platform,
            &c.platform_details,
            &c.extensions,
        ])
    }

    /// Join this builder's components with selected fields replaced.
    ///
    /// The builder itself is not modified; this is a one-off variant string.
    pub fn clone_with(&self, overrides: &ComponentOverrides) -> String {
        let c = &self.components;
        Self::join_non_empty([
            overrides.product.as_deref().unwrap_or(&c.product),
            overrides.system_info.as_deref().unwrap_or(&c.system_info),
            overrides.platform.as_deref().unwrap_or(&c.platform),
            overrides
                .platform_details
                .as_deref()
                .unwrap_or(&c.platform_details),
            overrides.extensions.as_deref().unwrap_or(&c.extensions),
        ])
    }

    fn join_non_empty(items: [&str; 5]) -> String {
        items
            .iter()
            .copied()
            .filter(|item| !item.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for UserAgentBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_agent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserAgentComponents {
        UserAgentComponents::new(
            "Mozilla/5.0",
            "(Macintosh; Intel Mac OS X 10_15)",
            "AppleWebKit/605.1.15",
            "(KHTML, like Gecko)",
            "Version/13.0.4 Safari/605.1.15",
        )
    }

    #[test]
    fn test_join_order() {
        let ua = UserAgentBuilder::new(sample()).user_agent();
        assert_eq!(
            ua,
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Version/13.0.4 Safari/605.1.15"
        );
    }

    #[test]
    fn test_all_empty_components() {
        let ua = UserAgentBuilder::new(UserAgentComponents::default()).user_agent();
        assert_eq!(ua, "");
    }

    #[test]
    fn test_empty_and_whitespace_components_skipped() {
        let components = UserAgentComponents::new("Mozilla/5.0", "", "   ", "\t", "Safari/605.1.15");
        let ua = UserAgentBuilder::new(components).user_agent();
        assert_eq!(ua, "Mozilla/5.0 Safari/605.1.15");
        assert!(!ua.contains("  "));
        assert!(!ua.starts_with(' '));
        assert!(!ua.ends_with(' '));
    }

    #[test]
    fn test_single_component() {
        let components = UserAgentComponents::new("", "", "", "", "Safari/605.1.15");
        assert_eq!(
            UserAgentBuilder::new(components).user_agent(),
            "Safari/605.1.15"
        );
    }

    #[test]
    fn test_embedded_whitespace_preserved() {
        let components = UserAgentComponents::new("", "(KHTML,  like Gecko)", "", "", "");
        assert_eq!(
            UserAgentBuilder::new(components).user_agent(),
            "(KHTML,  like Gecko)"
        );
    }

    #[test]
    fn test_clone_with_no_overrides_matches_user_agent() {
        let builder = UserAgentBuilder::new(sample());
        assert_eq!(
            builder.clone_with(&ComponentOverrides::none()),
            builder.user_agent()
        );
    }

    #[test]
    fn test_clone_with_extensions_override() {
        let builder = UserAgentBuilder::new(sample());
        let ua = builder.clone_with(&ComponentOverrides::extensions(
            "Version/21.0 Safari/605.1.15",
        ));
        assert_eq!(
            ua,
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Version/21.0 Safari/605.1.15"
        );
        // Base builder untouched.
        assert!(builder.user_agent().contains("Version/13.0.4"));
    }

    #[test]
    fn test_clone_with_system_info_override() {
        let builder = UserAgentBuilder::new(sample());
        let ua = builder.clone_with(&ComponentOverrides::system_info(
            "(iPad; CPU OS 16_4 like Mac OS X)",
        ));
        assert!(ua.contains("(iPad; CPU OS 16_4 like Mac OS X)"));
        assert!(!ua.contains("Macintosh"));
    }

    #[test]
    fn test_clone_with_empty_override_drops_component() {
        let builder = UserAgentBuilder::new(sample());
        let ua = builder.clone_with(&ComponentOverrides::extensions(""));
        assert_eq!(
            ua,
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15) AppleWebKit/605.1.15 \
             (KHTML, like Gecko)"
        );
    }
}
