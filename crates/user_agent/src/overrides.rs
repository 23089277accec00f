//! Per-domain User-Agent overrides.
//!
//! Some sites break unless they see a very specific UA, so the shell ships
//! a small table of domain → literal UA string exceptions. The table is
//! plain injectable configuration: built in code, or loaded from JSON, and
//! read-only once handed to the facade.

use common::BrowserResult;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Read-only domain → User-Agent override map.
///
/// Lookups are exact and case-sensitive on the domain as provided; the
/// table is only consulted for the mobile preset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideTable {
    entries: IndexMap<String, String>,
}

impl OverrideTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder-style.
    pub fn with_entry(mut self, domain: impl Into<String>, ua: impl Into<String>) -> Self {
        self.entries.insert(domain.into(), ua.into());
        self
    }

    /// Load a table from a JSON object of domain → UA string.
    pub fn from_json_str(json: &str) -> BrowserResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up the override UA for a domain, if any.
    pub fn get(&self, domain: &str) -> Option<&str> {
        self.entries.get(domain).map(String::as_str)
    }

    /// Check if a domain has an override.
    pub fn contains(&self, domain: &str) -> bool {
        self.entries.contains_key(domain)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }
}

/// The stock override table: domains that must see the plain mobile UA
/// rather than anything branded or desktop-flavored.
pub fn stock_mobile_overrides(default_mobile_ua: &str) -> OverrideTable {
    OverrideTable::new()
        .with_entry("paypal.com", default_mobile_ua)
        .with_entry("yahoo.com", default_mobile_ua)
}
