//! Server configuration

use std::path::PathBuf;

pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_LOG_FILTER: &str = "folio_site=info,tower_http=info";

/// Settings read once at startup. Leptos' own options (site address, site
/// root) come from `leptos::get_configuration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Directory served under `/assets`
    pub assets_dir: PathBuf,
    /// `tracing_subscriber::EnvFilter` directives
    pub log_filter: String,
}

impl SiteConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            assets_dir: lookup("FOLIO_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR)),
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_lookup(|_| None);
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_lookup(|key| match key {
            "FOLIO_ASSETS_DIR" => Some("/srv/folio/assets".to_string()),
            "RUST_LOG" => Some("debug".to_string()),
            _ => None,
        });
        assert_eq!(config.assets_dir, PathBuf::from("/srv/folio/assets"));
        assert_eq!(config.log_filter, "debug");
    }
}
