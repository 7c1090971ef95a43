//! Failure kinds a single scrape can produce.

use thiserror::Error;

use crate::infrastructure::parsing::ParsingError;
use crate::infrastructure::FetchError;

/// Any failure while fetching or parsing one page.
///
/// In the detail stage these are isolated per address; in the listing stage
/// any one of them aborts the whole crawl.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parsing(#[from] ParsingError),
}
