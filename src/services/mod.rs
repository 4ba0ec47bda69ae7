//! Service layer for the crawler application.
//!
//! This module contains the business logic for:
//! - Icon classification (`icons`)
//! - Job page extraction (`JobExtractor`)
//! - Search page link and pagination discovery (`SearchPaginator`)
//! - Page fetching (`PageFetcher`, `HttpFetcher`)

mod extractor;
mod fetcher;
pub mod icons;
mod paginator;

pub use extractor::JobExtractor;
pub use fetcher::{HttpFetcher, PageFetcher};
pub use paginator::SearchPaginator;

use scraper::Selector;

use crate::error::{AppError, Result};

/// Parse a CSS selector, reporting the offending text on failure.
pub(crate) fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
