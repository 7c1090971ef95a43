//! Listing-page parser: collects detail-page links.

use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use super::config::SelectorConfig;
use super::error::{ParsingError, ParsingResult};
use super::extract::compile_selector;

/// Parser extracting job detail links from one listing page.
pub struct ListingPageParser {
    link_selector: Selector,
}

impl ListingPageParser {
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&SelectorConfig::default())
    }

    pub fn with_config(selectors: &SelectorConfig) -> ParsingResult<Self> {
        Ok(Self {
            link_selector: compile_selector(&selectors.listing_link)?,
        })
    }

    /// Extract all detail-page addresses in document order, resolved to
    /// fully-qualified URLs against `origin`.
    ///
    /// Duplicate links are kept as-is; the listing is allowed to repeat a
    /// posting and order must be preserved.
    pub fn extract_links(&self, html: &Html, origin: &str) -> ParsingResult<Vec<String>> {
        let base = Url::parse(origin)
            .map_err(|e| ParsingError::url_resolution("", origin, e))?;

        let mut links = Vec::new();
        for element in html.select(&self.link_selector) {
            let Some(href) = element.value().attr("href") else {
                // Title elements without an href carry no navigable target.
                continue;
            };
            let resolved = base
                .join(href)
                .map_err(|e| ParsingError::url_resolution(href, origin, e))?;
            links.push(resolved.into());
        }

        debug!("extracted {} detail links", links.len());
        Ok(links)
    }
}
