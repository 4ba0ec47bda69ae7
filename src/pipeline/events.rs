// src/pipeline/events.rs

//! Progress events emitted while a crawl runs.
//!
//! The crawler reports what it does through a [`CrawlObserver`]; front ends
//! decide how to show it. [`LogObserver`] writes the events to the log.

use crate::models::JobStatus;

/// Crawl progress notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlEvent {
    /// A search page was read.
    PageCollected {
        page: u32,
        total_pages: Option<u32>,
        links: usize,
        new_links: usize,
    },
    /// A search page could not be fetched; discovery ends here.
    PageFailed { page: u32, error: String },
    /// Link discovery is over.
    DiscoveryFinished { pages: u32, jobs: usize },
    /// One job page was processed.
    JobExtracted {
        index: usize,
        total: usize,
        status: JobStatus,
        summary: String,
        url: String,
    },
    /// A stop request was honored.
    Stopped { pages: u32, jobs: usize },
}

/// Receiver of crawl progress events.
pub trait CrawlObserver: Send + Sync {
    fn on_event(&self, event: &CrawlEvent);
}

impl<F> CrawlObserver for F
where
    F: Fn(&CrawlEvent) + Send + Sync,
{
    fn on_event(&self, event: &CrawlEvent) {
        self(event)
    }
}

/// Ignores every event.
pub struct NullObserver;

impl CrawlObserver for NullObserver {
    fn on_event(&self, _event: &CrawlEvent) {}
}

/// Writes events to the log.
pub struct LogObserver;

impl CrawlObserver for LogObserver {
    fn on_event(&self, event: &CrawlEvent) {
        match event {
            CrawlEvent::PageFailed { .. } => log::error!("{}", describe(event)),
            CrawlEvent::JobExtracted {
                status: JobStatus::Error,
                ..
            } => log::warn!("{}", describe(event)),
            _ => log::info!("{}", describe(event)),
        }
    }
}

/// Human-readable line for an event.
pub fn describe(event: &CrawlEvent) -> String {
    match event {
        CrawlEvent::PageCollected {
            page,
            total_pages,
            links,
            new_links,
        } => {
            let total = total_pages.map_or_else(|| "?".to_string(), |t| t.to_string());
            format!("Page {page}/{total}: {links} links ({new_links} new)")
        }
        CrawlEvent::PageFailed { page, error } => format!("Page {page} failed: {error}"),
        CrawlEvent::DiscoveryFinished { pages, jobs } => {
            format!("Collected {jobs} job links across {pages} pages")
        }
        CrawlEvent::JobExtracted {
            index,
            total,
            status,
            summary,
            url,
        } => {
            let tag = match status {
                JobStatus::Ok => "OK",
                JobStatus::Error => "ERR",
            };
            let label = if summary.is_empty() { url } else { summary };
            format!("[{index}/{total}] [{tag}] {label}")
        }
        CrawlEvent::Stopped { pages, jobs } => {
            format!("Stopped on request after {pages} pages and {jobs} jobs")
        }
    }
}
