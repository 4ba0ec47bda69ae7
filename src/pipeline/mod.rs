// src/pipeline/mod.rs

//! Pipeline entry points for crawler operations.
//!
//! - `run_crawler`: crawl one search and return the report
//! - `log_summary`: print the end-of-run summary

pub mod crawl;
pub mod events;
pub mod pacing;
pub mod shutdown;

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Result;
use crate::models::Config;
use crate::services::PageFetcher;
use crate::utils::log;

pub use crawl::{CrawlOptions, CrawlReport, Crawler, DiscoveredLink};
pub use events::{CrawlEvent, CrawlObserver, LogObserver, NullObserver};
pub use pacing::Pacing;
pub use shutdown::{ShutdownSender, ShutdownToken, relay_interrupts, shutdown_channel};

/// Run the job crawler over one search URL, logging progress.
pub async fn run_crawler(
    config: &Config,
    search_url: &str,
    fetcher: Arc<dyn PageFetcher>,
    shutdown: ShutdownToken,
) -> Result<CrawlReport> {
    log::header("free-work job crawler");
    log::sub_item(&format!("Search URL: {search_url}"));
    if config.crawler.max_pages > 0 {
        log::sub_item(&format!("Page limit: {}", config.crawler.max_pages));
    } else {
        log::sub_item("Page limit: none");
    }

    let crawler = Crawler::new(config, fetcher)?
        .with_observer(Arc::new(LogObserver))
        .with_shutdown(shutdown);

    crawler.run(search_url).await
}

/// Log the run summary and where the records went.
pub fn log_summary(report: &CrawlReport, files: &[PathBuf]) {
    let stats = report.stats();

    log::separator();
    log::summary(
        "Crawl finished",
        &[
            ("Pages visited", stats.pages_visited.to_string()),
            ("Jobs", stats.total_jobs.to_string()),
            ("Succeeded", stats.ok.to_string()),
            ("Failed", stats.errors.to_string()),
            ("With salary", stats.with_salary.to_string()),
            ("With remote", stats.with_remote.to_string()),
            ("Success rate", format!("{:.1}%", stats.success_rate() * 100.0)),
            ("Duration", format!("{}s", stats.elapsed_secs)),
        ],
    );

    if report.stopped {
        log::sub_item("Stopped before the end on request");
    }
    if let Some(failure) = &report.failure {
        log::sub_item(&format!("Ended early: {failure}"));
    }
    for file in files {
        log::sub_item(&format!("Saved {}", file.display()));
    }
}
