//! jobcrawl binary: crawl the jobs listing and export a CSV dataset.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use url::Url;

use jobcrawl::crawling::{CrawlPipeline, FixedDelay, ListingCrawler, LogProgress};
use jobcrawl::infrastructure::config::listing_page_url;
use jobcrawl::infrastructure::{
    export, logging, robots, AppConfig, HttpClient, JobDetailParser, ListingPageParser,
};

#[derive(Debug, Parser)]
#[command(name = "jobcrawl", version, about = "Crawl a classifieds jobs listing into a CSV dataset")]
struct Cli {
    /// Number of listing pages to crawl
    #[arg(long)]
    pages: Option<u32>,

    /// Listing address template containing a {page} marker
    #[arg(long)]
    template: Option<String>,

    /// Output CSV path
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Delay between consecutive requests, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Optional JSON config file; CLI flags override it
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging()?;

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(pages) = cli.pages {
        config.crawl.page_count = pages;
    }
    if let Some(template) = cli.template {
        config.crawl.listing_template = template;
    }
    if let Some(output) = cli.output {
        config.crawl.output_path = output;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.crawl.request_delay_ms = delay_ms;
    }
    config.crawl.validate()?;

    let client = HttpClient::with_config(config.http.clone())?;

    // Crawl-permission pre-check: consult the site's robots policy for the
    // listing path before issuing any crawl request.
    let path = listing_path(&config.crawl.listing_template)?;
    if !robots::permits_crawl(&client, &config.crawl.origin, &path).await {
        bail!(
            "robots.txt of {} disallows crawling {}; refusing to run",
            config.crawl.origin,
            path
        );
    }

    let pacer = Arc::new(FixedDelay::from_millis(config.crawl.request_delay_ms));

    let listing_parser = ListingPageParser::with_config(&config.selectors)?;
    let crawler = ListingCrawler::new(
        client.clone(),
        listing_parser,
        pacer.clone(),
        config.crawl.origin.clone(),
    );
    let addresses = crawler
        .crawl(&config.crawl.listing_template, config.crawl.page_count)
        .await
        .context("listing crawl failed")?;

    let detail_parser = JobDetailParser::with_config(&config.selectors)?;
    let pipeline = CrawlPipeline::new(client, detail_parser, pacer, Arc::new(LogProgress));
    let records = pipeline.run(&addresses).await;

    export::write_csv(&config.crawl.output_path, &records)?;
    Ok(())
}

/// Path component of the listing template, with the first page substituted.
fn listing_path(template: &str) -> anyhow::Result<String> {
    let url = Url::parse(&listing_page_url(template, 1))
        .with_context(|| format!("invalid listing template '{template}'"))?;
    Ok(url.path().to_string())
}
