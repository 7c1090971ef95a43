//! jobcrawl - classifieds job-posting crawler
//!
//! Crawls a paginated jobs listing, parses every linked detail page into a
//! structured record and aggregates the results into a CSV dataset.

pub mod crawling;
pub mod domain;
pub mod infrastructure;

pub use crawling::{CrawlPipeline, ListingCrawler, PageFetcher, ScrapeError};
pub use domain::JobRecord;
pub use infrastructure::AppConfig;
