//! Application configuration: run parameters, HTTP settings and selectors.
//!
//! Defaults target the supported classifieds site; a JSON config file can
//! override any section and the CLI overrides individual run parameters on
//! top of that.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::http_client::HttpClientConfig;
use super::parsing::SelectorConfig;

/// Marker substituted with the 1-based page index in the listing template.
pub const PAGE_MARKER: &str = "{page}";

/// Well-known addresses of the supported site.
pub mod site {
    /// Origin used to resolve relative detail links and locate robots.txt.
    pub const ORIGIN: &str = "https://www.pigiame.co.ke";

    /// Paginated jobs listing, `{page}` replaced by the page index.
    pub const JOBS_LISTING_TEMPLATE: &str = "https://www.pigiame.co.ke/jobs?page={page}";
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("listing template '{template}' does not contain the {PAGE_MARKER} marker")]
    MissingPageMarker { template: String },

    #[error("page_count must be at least 1")]
    ZeroPages,
}

/// Crawl run parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Site origin for link resolution and the robots.txt pre-check
    pub origin: String,
    /// Listing page address template with a `{page}` substitution point
    pub listing_template: String,
    /// Number of listing pages to crawl (1-based, inclusive)
    pub page_count: u32,
    /// Fixed politeness delay between consecutive fetches, in milliseconds
    pub request_delay_ms: u64,
    /// Output CSV path
    pub output_path: PathBuf,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            origin: site::ORIGIN.to_string(),
            listing_template: site::JOBS_LISTING_TEMPLATE.to_string(),
            page_count: 5,
            request_delay_ms: 2000,
            output_path: PathBuf::from("jobs.csv"),
        }
    }
}

impl CrawlConfig {
    /// Validate invariants the rest of the pipeline relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.listing_template.contains(PAGE_MARKER) {
            return Err(ConfigError::MissingPageMarker {
                template: self.listing_template.clone(),
            });
        }
        if self.page_count == 0 {
            return Err(ConfigError::ZeroPages);
        }
        Ok(())
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub crawl: CrawlConfig,
    pub http: HttpClientConfig,
    pub selectors: SelectorConfig,
}

impl AppConfig {
    /// Load configuration from a JSON file, with defaults for any missing
    /// section.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Build the address of one listing page from the template.
pub fn listing_page_url(template: &str, page: u32) -> String {
    template.replace(PAGE_MARKER, &page.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_page_index_into_template() {
        assert_eq!(
            listing_page_url("https://example.com/jobs?page={page}", 3),
            "https://example.com/jobs?page=3"
        );
    }

    #[test]
    fn default_template_carries_the_marker() {
        assert!(CrawlConfig::default().validate().is_ok());
    }

    #[test]
    fn template_without_marker_is_rejected() {
        let config = CrawlConfig {
            listing_template: "https://example.com/jobs".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingPageMarker { .. })
        ));
    }

    #[test]
    fn zero_pages_is_rejected() {
        let config = CrawlConfig {
            page_count: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroPages)));
    }

    #[test]
    fn partial_config_file_keeps_defaults_elsewhere() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"crawl": {"page_count": 12}}"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.crawl.page_count, 12);
        assert_eq!(config.crawl.origin, site::ORIGIN);
        assert_eq!(config.http.timeout_seconds, 30);
    }
}
