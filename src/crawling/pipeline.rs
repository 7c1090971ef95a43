//! Detail stage: per-address scraping with failure isolation.

use std::sync::Arc;

use chrono::Utc;
use scraper::Html;
use tracing::{info, warn};

use super::error::ScrapeError;
use super::pacing::{self, Pacer};
use super::progress::ProgressObserver;
use super::PageFetcher;
use crate::domain::JobRecord;
use crate::infrastructure::JobDetailParser;

/// Drives the detail stage over a collected address list and aggregates
/// the result table.
pub struct CrawlPipeline<F> {
    fetcher: F,
    parser: JobDetailParser,
    pacer: Arc<dyn Pacer>,
    observer: Arc<dyn ProgressObserver>,
}

impl<F: PageFetcher> CrawlPipeline<F> {
    pub fn new(
        fetcher: F,
        parser: JobDetailParser,
        pacer: Arc<dyn Pacer>,
        observer: Arc<dyn ProgressObserver>,
    ) -> Self {
        Self {
            fetcher,
            parser,
            pacer,
            observer,
        }
    }

    /// Process every address in order, one at a time.
    ///
    /// A failed address contributes no row and does not stop the run; the
    /// result table preserves crawl order and never holds more entries than
    /// there were input addresses.
    pub async fn run(&self, addresses: &[String]) -> Vec<JobRecord> {
        let total = addresses.len();
        let mut records = Vec::with_capacity(total);
        let mut skipped = 0usize;

        for (index, address) in addresses.iter().enumerate() {
            match self.scrape_detail(address).await {
                Ok(record) => records.push(record),
                Err(e) => {
                    skipped += 1;
                    warn!("skipping {}: {}", address, e);
                }
            }

            self.observer.on_item(index + 1, total);

            if index + 1 < total {
                pacing::pause(self.pacer.as_ref()).await;
            }
        }

        info!(
            "detail stage complete: {} records, {} skipped",
            records.len(),
            skipped
        );
        records
    }

    /// Fetch and parse one detail page.
    ///
    /// The retrieval timestamp is taken immediately after the fetch
    /// completes, before extraction.
    async fn scrape_detail(&self, address: &str) -> Result<JobRecord, ScrapeError> {
        let body = self.fetcher.fetch(address).await?;
        let retrieved_at = Utc::now();
        let html = Html::parse_document(&body);
        Ok(self.parser.parse(&html, retrieved_at))
    }
}
