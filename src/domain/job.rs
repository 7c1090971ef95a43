//! Job posting record extracted from a detail page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One job posting scraped from a detail page.
///
/// Every field except `retrieved_at` is extracted by a CSS selector and may
/// be absent independently of the others. `retrieved_at` is stamped with the
/// wall-clock time of the fetch that produced the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "jobType")]
    pub job_type: Option<String>,
    pub employer: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "retrievedAt")]
    pub retrieved_at: DateTime<Utc>,
}

impl JobRecord {
    /// True when no selector matched anything on the page.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.job_type.is_none()
            && self.employer.is_none()
            && self.location.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_has_no_fields() {
        let record = JobRecord {
            title: None,
            description: None,
            job_type: None,
            employer: None,
            location: None,
            retrieved_at: Utc::now(),
        };
        assert!(record.is_empty());
    }

    #[test]
    fn record_with_title_is_not_empty() {
        let record = JobRecord {
            title: Some("Warehouse Supervisor".to_string()),
            description: None,
            job_type: None,
            employer: None,
            location: None,
            retrieved_at: Utc::now(),
        };
        assert!(!record.is_empty());
    }
}
