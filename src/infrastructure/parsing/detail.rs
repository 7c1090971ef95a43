//! Detail-page parser: one job posting per page.

use chrono::{DateTime, Utc};
use scraper::{Html, Selector};
use tracing::debug;

use super::config::SelectorConfig;
use super::error::ParsingResult;
use super::extract::{compile_selector, extract_text};
use crate::domain::JobRecord;

/// Parser extracting the five job fields from a detail page.
///
/// Selectors are compiled once at construction; a bad selector string is a
/// configuration fault surfaced immediately, not during the crawl.
pub struct JobDetailParser {
    title: Selector,
    description: Selector,
    job_type: Selector,
    employer: Selector,
    location: Selector,
}

impl JobDetailParser {
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&SelectorConfig::default())
    }

    pub fn with_config(selectors: &SelectorConfig) -> ParsingResult<Self> {
        Ok(Self {
            title: compile_selector(&selectors.title)?,
            description: compile_selector(&selectors.description)?,
            job_type: compile_selector(&selectors.job_type)?,
            employer: compile_selector(&selectors.employer)?,
            location: compile_selector(&selectors.location)?,
        })
    }

    /// Build a [`JobRecord`] from a fetched detail page.
    ///
    /// `retrieved_at` is the wall-clock time stamped right after the fetch
    /// completed. Fields missing from the page stay absent; a record with
    /// absent fields is still a record.
    pub fn parse(&self, html: &Html, retrieved_at: DateTime<Utc>) -> JobRecord {
        let record = JobRecord {
            title: extract_text(html, &self.title),
            description: extract_text(html, &self.description),
            job_type: extract_text(html, &self.job_type),
            employer: extract_text(html, &self.employer),
            location: extract_text(html, &self.location),
            retrieved_at,
        };

        if record.is_empty() {
            debug!("detail page matched none of the field selectors");
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SelectorConfig {
        SelectorConfig {
            listing_link: "a.job".to_string(),
            title: "h1.title".to_string(),
            description: "div.desc".to_string(),
            job_type: "span.type".to_string(),
            employer: "span.employer".to_string(),
            location: "span.location".to_string(),
        }
    }

    #[test]
    fn extracts_all_five_fields() {
        let parser = JobDetailParser::with_config(&test_config()).unwrap();
        let html = Html::parse_document(
            "<h1 class=\"title\">Forklift Operator</h1>\
             <div class=\"desc\">Operate  forklifts\nsafely.</div>\
             <span class=\"type\">Full-time</span>\
             <span class=\"employer\">Acme Logistics</span>\
             <span class=\"location\">Industrial Area</span>",
        );
        let record = parser.parse(&html, Utc::now());

        assert_eq!(record.title.as_deref(), Some("Forklift Operator"));
        assert_eq!(
            record.description.as_deref(),
            Some("Operate forklifts safely.")
        );
        assert_eq!(record.job_type.as_deref(), Some("Full-time"));
        assert_eq!(record.employer.as_deref(), Some("Acme Logistics"));
        assert_eq!(record.location.as_deref(), Some("Industrial Area"));
    }

    #[test]
    fn missing_fields_stay_absent_without_failing_the_record() {
        let parser = JobDetailParser::with_config(&test_config()).unwrap();
        let html = Html::parse_document("<h1 class=\"title\">Security Guard</h1>");
        let when = Utc::now();
        let record = parser.parse(&html, when);

        assert_eq!(record.title.as_deref(), Some("Security Guard"));
        assert_eq!(record.description, None);
        assert_eq!(record.job_type, None);
        assert_eq!(record.employer, None);
        assert_eq!(record.location, None);
        assert_eq!(record.retrieved_at, when);
    }

    #[test]
    fn invalid_field_selector_fails_construction() {
        let config = SelectorConfig {
            title: "h1..[".to_string(),
            ..test_config()
        };
        assert!(JobDetailParser::with_config(&config).is_err());
    }
}
