//! Crawl pipeline: listing traversal, detail scraping, pacing, progress.
//!
//! Execution is strictly sequential: one request in flight at a time, with
//! a fixed politeness delay between consecutive fetches. The async runtime
//! is only the I/O idiom here, never a source of concurrency.

pub mod error;
pub mod listing;
pub mod pacing;
pub mod pipeline;
pub mod progress;

pub use error::ScrapeError;
pub use listing::ListingCrawler;
pub use pacing::{FixedDelay, Pacer};
pub use pipeline::CrawlPipeline;
pub use progress::{LogProgress, ProgressObserver};

use async_trait::async_trait;

use crate::infrastructure::{FetchError, HttpClient};

/// Source of page bodies. The production implementation is [`HttpClient`];
/// tests substitute canned or failing fetchers.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the document body at `url`, single attempt.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

#[async_trait]
impl<F: PageFetcher + ?Sized> PageFetcher for std::sync::Arc<F> {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url).await
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.fetch_html_string(url).await
    }
}
