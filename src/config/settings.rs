//! Schema of a profile's `settings.json`.
//!
//! Only the keys the tool reports on are modelled. Unknown top-level keys
//! are accepted and ignored so that full Claude Code settings files load
//! cleanly; a known key with the wrong type is a parse error. An explicit
//! `null` is read the same as an absent key.
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// A profile's `settings.json` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSettings {
    /// Marketplaces to register, keyed by marketplace name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub extra_known_marketplaces: IndexMap<String, MarketplaceEntry>,
    /// Plugin toggles keyed by `"plugin@marketplace"`, in document order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled_plugins: IndexMap<String, bool>,
    /// Optional tool permission lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
}

/// A marketplace registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MarketplaceEntry {
    /// Where the marketplace is fetched from.
    pub source: MarketplaceSource,
}

/// Source descriptor of a marketplace (e.g. `github` with a `repo`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MarketplaceSource {
    /// Source kind, such as `"github"`, `"git"` or `"directory"`.
    pub source: String,
    /// `owner/name` repository, for repository-backed sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// URL, for URL-backed sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Allow and deny rule lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Permissions {
    /// Rules that are always permitted.
    #[serde(default)]
    pub allow: Vec<String>,
    /// Rules that are always refused.
    #[serde(default)]
    pub deny: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProfileSettings {
    /// Plugins switched on, in the order they appear in the document.
    #[must_use]
    pub fn enabled_plugins(&self) -> Vec<String> {
        self.enabled_plugins
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| name.clone())
            .collect()
    }
}
