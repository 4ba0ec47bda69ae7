// src/services/fetcher.rs

//! Page fetching.
//!
//! The crawler only needs "rendered HTML for URL X". [`PageFetcher`] is that
//! seam; [`HttpFetcher`] implements it with a plain HTTP client, and a
//! browser-driven implementation can be plugged in the same way.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::CrawlerConfig;
use crate::utils::http::create_async_client;

/// Source of rendered page HTML.
///
/// Implementations must be safe to call from several in-flight requests at
/// once; an implementation backed by a single exclusive resource should
/// serialize internally.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the HTML of `url`.
    ///
    /// Network failures, timeouts and non-success statuses are reported as
    /// [`AppError::Fetch`].
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches pages over HTTP.
pub struct HttpFetcher {
    client: Client,
    headless: bool,
}

impl HttpFetcher {
    /// Create a fetcher from crawler settings.
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        Ok(Self {
            client: create_async_client(config)?,
            headless: config.headless,
        })
    }

    /// Headless flag this fetcher was configured with. Plain HTTP has no
    /// window, so the flag is informational.
    pub fn headless(&self) -> bool {
        self.headless
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::fetch(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch(url, format!("HTTP status {status}")));
        }

        response.text().await.map_err(|e| AppError::fetch(url, e))
    }
}
