// src/pipeline/crawl.rs

//! Crawl orchestration.
//!
//! Walks the search pages one at a time until the site reports no further
//! page (or the page limit is reached), then visits every distinct job link in
//! discovery order. Job failures become error records; a search page that
//! cannot be fetched ends discovery, and the jobs found so far are still
//! extracted and returned with the failure.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};

use crate::error::{AppError, Result};
use crate::models::{Config, CrawlStats, CrawlerConfig, JobRecord, SelectorConfig};
use crate::pipeline::events::{CrawlEvent, CrawlObserver, NullObserver};
use crate::pipeline::pacing::Pacing;
use crate::pipeline::shutdown::ShutdownToken;
use crate::services::{JobExtractor, PageFetcher, SearchPaginator};
use crate::utils::url::page_url;

/// Knobs controlling the crawl loop.
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Maximum search pages to walk (0 = until the site says stop)
    pub max_pages: u32,
    /// Delay between job fetches
    pub job_pacing: Pacing,
    /// Delay between search page fetches
    pub page_pacing: Pacing,
    /// Job pages in flight at once
    pub max_concurrent: usize,
}

impl CrawlOptions {
    pub fn from_config(config: &CrawlerConfig) -> Self {
        Self {
            max_pages: config.max_pages,
            job_pacing: Pacing::from_millis(config.pacing_min_ms, config.pacing_max_ms),
            page_pacing: Pacing::from_millis(config.page_delay_min_ms, config.page_delay_max_ms),
            max_concurrent: config.max_concurrent.max(1),
        }
    }

    /// Sequential crawl without any delay.
    pub fn unpaced(max_pages: u32) -> Self {
        Self {
            max_pages,
            job_pacing: Pacing::disabled(),
            page_pacing: Pacing::disabled(),
            max_concurrent: 1,
        }
    }
}

/// A job link and the search page it was first seen on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredLink {
    pub url: String,
    pub page: u32,
}

/// Outcome of the link discovery phase.
#[derive(Debug, Default)]
pub struct Discovery {
    pub links: Vec<DiscoveredLink>,
    pub pages_visited: u32,
    pub total_pages: Option<u32>,
    pub failure: Option<AppError>,
    pub stopped: bool,
}

/// Everything a crawl produced, including how it ended.
#[derive(Debug)]
pub struct CrawlReport {
    pub search_url: String,
    /// Records in link discovery order
    pub records: Vec<JobRecord>,
    pub pages_visited: u32,
    /// Page count declared by the site, if any
    pub total_pages: Option<u32>,
    /// Distinct job links discovered
    pub links_found: usize,
    /// Search page failure that ended discovery early
    pub failure: Option<AppError>,
    /// Whether a stop request cut the crawl short
    pub stopped: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlReport {
    /// True when the crawl neither failed nor was stopped.
    pub fn is_complete(&self) -> bool {
        self.failure.is_none() && !self.stopped
    }

    pub fn stats(&self) -> CrawlStats {
        let elapsed = (self.finished_at - self.started_at).num_seconds();
        CrawlStats::from_records(&self.records, self.pages_visited, elapsed)
    }
}

/// Drives the paginator and the extractor over one search.
pub struct Crawler {
    fetcher: Arc<dyn PageFetcher>,
    extractor: JobExtractor,
    selectors: SelectorConfig,
    options: CrawlOptions,
    observer: Arc<dyn CrawlObserver>,
    shutdown: ShutdownToken,
}

impl Crawler {
    /// Create a crawler from the application configuration.
    pub fn new(config: &Config, fetcher: Arc<dyn PageFetcher>) -> Result<Self> {
        Ok(Self {
            fetcher,
            extractor: JobExtractor::new(&config.selectors)?,
            selectors: config.selectors.clone(),
            options: CrawlOptions::from_config(&config.crawler),
            observer: Arc::new(NullObserver),
            shutdown: ShutdownToken::never(),
        })
    }

    pub fn with_options(mut self, options: CrawlOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn CrawlObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_shutdown(mut self, shutdown: ShutdownToken) -> Self {
        self.shutdown = shutdown;
        self
    }

    /// Crawl a search and return every record produced.
    ///
    /// Only an unusable search URL is an `Err`; fetch failures are reported
    /// inside the returned [`CrawlReport`].
    pub async fn run(&self, search_url: &str) -> Result<CrawlReport> {
        let started_at = Utc::now();

        let discovery = self.discover(search_url).await?;
        self.observer.on_event(&CrawlEvent::DiscoveryFinished {
            pages: discovery.pages_visited,
            jobs: discovery.links.len(),
        });

        let (records, stopped_in_jobs) = if discovery.stopped {
            (Vec::new(), true)
        } else {
            self.extract_all(&discovery.links).await
        };

        let stopped = discovery.stopped || stopped_in_jobs;
        if stopped {
            self.observer.on_event(&CrawlEvent::Stopped {
                pages: discovery.pages_visited,
                jobs: records.len(),
            });
        }

        Ok(CrawlReport {
            search_url: search_url.to_string(),
            records,
            pages_visited: discovery.pages_visited,
            total_pages: discovery.total_pages,
            links_found: discovery.links.len(),
            failure: discovery.failure,
            stopped,
            started_at,
            finished_at: Utc::now(),
        })
    }

    /// Walk the search pages and collect distinct job links.
    pub async fn discover(&self, search_url: &str) -> Result<Discovery> {
        let paginator = SearchPaginator::new(search_url, &self.selectors)?;
        let mut discovery = Discovery::default();
        let mut seen = HashSet::new();
        let mut page = 1;

        loop {
            if self.shutdown.is_shutdown() {
                discovery.stopped = true;
                break;
            }
            if page > 1 && !self.pause(&self.options.page_pacing).await {
                discovery.stopped = true;
                break;
            }

            let url = page_url(search_url, page)?;
            let html = match self.fetcher.fetch(&url).await {
                Ok(html) => html,
                Err(error) => {
                    self.observer.on_event(&CrawlEvent::PageFailed {
                        page,
                        error: error.to_string(),
                    });
                    discovery.failure = Some(error);
                    break;
                }
            };

            let result = paginator.collect_page(&html);
            let continues = result.continues_after(page);
            let found = result.job_urls.len();

            discovery.pages_visited = page;
            discovery.total_pages = discovery.total_pages.max(result.total_pages);

            let before = discovery.links.len();
            for url in result.job_urls {
                if seen.insert(url.clone()) {
                    discovery.links.push(DiscoveredLink { url, page });
                }
            }
            let new_links = discovery.links.len() - before;

            self.observer.on_event(&CrawlEvent::PageCollected {
                page,
                total_pages: discovery.total_pages,
                links: found,
                new_links,
            });

            if self.options.max_pages > 0 && page >= self.options.max_pages {
                log::debug!("Page limit {} reached", self.options.max_pages);
                break;
            }
            // A page with nothing new is past the end or a repeat of an
            // earlier listing.
            if new_links == 0 {
                log::info!("Page {page} has no new job links ({found} found), stopping pagination");
                break;
            }
            if discovery.total_pages.is_some_and(|total| page >= total) {
                log::debug!("Last declared page {page} reached");
                break;
            }
            if !continues {
                break;
            }
            page += 1;
        }

        Ok(discovery)
    }

    /// Visit every link in order; the flag reports whether a stop cut it short.
    ///
    /// After a stop, links not yet fetched are skipped while the fetches
    /// already in flight run to completion and keep their records.
    pub async fn extract_all(&self, links: &[DiscoveredLink]) -> (Vec<JobRecord>, bool) {
        let total = links.len();
        let mut records = Vec::with_capacity(total);
        let mut stopped = false;

        let mut outcomes = stream::iter(links.iter().enumerate())
            .map(|(index, link)| async move {
                if self.shutdown.is_shutdown() {
                    return None;
                }
                if index > 0 && !self.pause(&self.options.job_pacing).await {
                    return None;
                }
                Some(self.extract_one(link).await)
            })
            .buffered(self.options.max_concurrent.max(1));

        while let Some(outcome) = outcomes.next().await {
            let Some(record) = outcome else {
                stopped = true;
                continue;
            };
            self.observer.on_event(&CrawlEvent::JobExtracted {
                index: records.len() + 1,
                total,
                status: record.status,
                summary: record.summary(),
                url: record.job_url.clone(),
            });
            records.push(record);
        }

        (records, stopped)
    }

    /// Sleep for the next pacing delay; false when a stop arrived meanwhile.
    async fn pause(&self, pacing: &Pacing) -> bool {
        if pacing.is_disabled() {
            return !self.shutdown.is_shutdown();
        }
        let mut shutdown = self.shutdown.clone();
        tokio::select! {
            _ = pacing.wait() => !self.shutdown.is_shutdown(),
            _ = shutdown.wait() => false,
        }
    }

    async fn extract_one(&self, link: &DiscoveredLink) -> JobRecord {
        match self.fetcher.fetch(&link.url).await {
            Ok(html) => self.extractor.extract(&html, &link.url, link.page),
            Err(error) => {
                log::warn!("Failed to fetch job {}: {}", link.url, error);
                JobRecord::failed(&link.url, link.page, None, error)
            }
        }
    }
}
