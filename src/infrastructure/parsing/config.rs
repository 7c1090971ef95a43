//! Selector configuration for HTML extraction.
//!
//! The selector set is a fixed collection of literal CSS selectors: one for
//! the listing-item title links and one per job field on the detail page.
//! They are plain strings here and compiled once at parser construction.

use serde::{Deserialize, Serialize};

/// CSS selectors driving listing and detail extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Anchor elements on a listing page that link to job detail pages
    pub listing_link: String,

    /// Detail-page field selectors
    pub title: String,
    pub description: String,
    pub job_type: String,
    pub employer: String,
    pub location: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            listing_link: "div.listings-cards__list-item a.listing-card__title".to_string(),
            title: "h1.listing-item__title".to_string(),
            description: "div.listing-item__description".to_string(),
            job_type: "div.listing-item__properties span.listing-item__properties__type"
                .to_string(),
            employer: "div.listing-item__seller-info a.listing-item__seller-name".to_string(),
            location: "div.listing-item__address".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    #[test]
    fn default_selectors_compile() {
        let config = SelectorConfig::default();
        for selector in [
            &config.listing_link,
            &config.title,
            &config.description,
            &config.job_type,
            &config.employer,
            &config.location,
        ] {
            assert!(
                Selector::parse(selector).is_ok(),
                "selector '{selector}' should compile"
            );
        }
    }
}
