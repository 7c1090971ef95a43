//! Listing stage: sequential traversal of the paginated listing.

use std::sync::Arc;

use scraper::Html;
use tracing::{debug, info};

use super::error::ScrapeError;
use super::pacing::{self, Pacer};
use super::PageFetcher;
use crate::infrastructure::config::listing_page_url;
use crate::infrastructure::ListingPageParser;

/// Crawls listing pages 1..=page_count and collects detail addresses.
///
/// Unlike the detail stage, a failure on any listing page aborts the whole
/// crawl. The listing is assumed reliable; individual postings are not.
pub struct ListingCrawler<F> {
    fetcher: F,
    parser: ListingPageParser,
    pacer: Arc<dyn Pacer>,
    origin: String,
}

impl<F: PageFetcher> ListingCrawler<F> {
    pub fn new(
        fetcher: F,
        parser: ListingPageParser,
        pacer: Arc<dyn Pacer>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            parser,
            pacer,
            origin: origin.into(),
        }
    }

    /// Collect detail-page addresses from pages 1..=page_count, in page
    /// order and, within a page, in document order.
    pub async fn crawl(&self, template: &str, page_count: u32) -> Result<Vec<String>, ScrapeError> {
        let mut addresses = Vec::new();

        for page in 1..=page_count {
            let url = listing_page_url(template, page);
            info!("fetching listing page {}/{}: {}", page, page_count, url);

            let body = self.fetcher.fetch(&url).await?;
            let links = {
                let html = Html::parse_document(&body);
                self.parser.extract_links(&html, &self.origin)?
            };
            debug!("page {} yielded {} postings", page, links.len());
            addresses.extend(links);

            if page < page_count {
                pacing::pause(self.pacer.as_ref()).await;
            }
        }

        info!(
            "listing crawl complete: {} detail addresses from {} pages",
            addresses.len(),
            page_count
        );
        Ok(addresses)
    }
}
