//! CLI configuration read from the environment

use std::path::PathBuf;

use anyhow::{Context, Result};
use url::Url;
use wc26_core::parse_base_url;
use wc26_search::BuildOptions;

pub const DEFAULT_BASE_URL: &str = "https://worldcup26guide.com/";
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Configuration for the CLI
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Load content from this directory instead of the embedded set
    pub data_dir: Option<PathBuf>,

    /// Site origin used to print absolute links
    pub base_url: Url,

    /// Treat malformed records as fatal
    pub strict: bool,

    /// Maximum number of search results printed
    pub search_limit: usize,
}

impl CliConfig {
    /// Read `WC26_*` variables from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_dir = lookup("WC26_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let base_url = lookup("WC26_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = parse_base_url(&base_url).context("WC26_BASE_URL")?;

        let strict = lookup("WC26_STRICT")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let search_limit = match lookup("WC26_SEARCH_LIMIT") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("WC26_SEARCH_LIMIT must be a number, got {:?}", v))?,
            None => DEFAULT_SEARCH_LIMIT,
        };

        Ok(Self {
            data_dir,
            base_url,
            strict,
            search_limit,
        })
    }

    /// Builder options for this configuration
    pub fn build_options(&self) -> BuildOptions {
        if self.strict {
            BuildOptions::strict()
        } else {
            BuildOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use wc26_search::MalformedPolicy;

    fn config(vars: &[(&str, &str)]) -> Result<CliConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert!(config.data_dir.is_none());
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert!(!config.strict);
        assert_eq!(config.search_limit, DEFAULT_SEARCH_LIMIT);
        assert_eq!(config.build_options(), BuildOptions::default());
    }

    #[test]
    fn test_strict_and_limit() {
        let config = config(&[("WC26_STRICT", "TRUE"), ("WC26_SEARCH_LIMIT", "5")]).unwrap();
        assert!(config.strict);
        assert_eq!(config.search_limit, 5);
        assert_eq!(config.build_options().malformed, MalformedPolicy::Fail);
    }

    #[test]
    fn test_data_dir() {
        let config = config(&[("WC26_DATA_DIR", "./content")]).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("./content")));
    }

    #[test]
    fn test_invalid_values() {
        assert!(config(&[("WC26_BASE_URL", "nope")]).is_err());
        assert!(config(&[("WC26_SEARCH_LIMIT", "lots")]).is_err());
    }
}
