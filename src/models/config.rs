//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::services::parse_selector;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and crawling behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// CSS selectors for the search and job pages
    #[serde(default)]
    pub selectors: SelectorConfig,

    /// Output settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        if self.crawler.max_concurrent == 0 {
            return Err(AppError::validation("crawler.max_concurrent must be > 0"));
        }
        if self.crawler.pacing_min_ms > self.crawler.pacing_max_ms {
            return Err(AppError::validation(
                "crawler.pacing_min_ms must be <= crawler.pacing_max_ms",
            ));
        }
        if self.crawler.page_delay_min_ms > self.crawler.page_delay_max_ms {
            return Err(AppError::validation(
                "crawler.page_delay_min_ms must be <= crawler.page_delay_max_ms",
            ));
        }
        if self.selectors.job_link_pattern.trim().is_empty() {
            return Err(AppError::validation("selectors.job_link_pattern is empty"));
        }
        self.selectors.validate()
    }
}

/// HTTP client and crawling behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum number of search pages to walk (0 = all)
    #[serde(default)]
    pub max_pages: u32,

    /// Lower bound of the random delay between job fetches
    #[serde(default = "defaults::pacing_min")]
    pub pacing_min_ms: u64,

    /// Upper bound of the random delay between job fetches
    #[serde(default = "defaults::pacing_max")]
    pub pacing_max_ms: u64,

    /// Lower bound of the random delay between search page fetches
    #[serde(default = "defaults::page_delay_min")]
    pub page_delay_min_ms: u64,

    /// Upper bound of the random delay between search page fetches
    #[serde(default = "defaults::page_delay_max")]
    pub page_delay_max_ms: u64,

    /// Maximum job pages in flight
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,

    /// Headless rendering flag, forwarded to the page fetcher
    #[serde(default = "defaults::headless")]
    pub headless: bool,
}

impl CrawlerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_pages: 0,
            pacing_min_ms: defaults::pacing_min(),
            pacing_max_ms: defaults::pacing_max(),
            page_delay_min_ms: defaults::page_delay_min(),
            page_delay_max_ms: defaults::page_delay_max(),
            max_concurrent: defaults::max_concurrent(),
            headless: defaults::headless(),
        }
    }
}

/// CSS selectors for the target site's markup.
///
/// Every field has a default matching the current free-work.com layout, so a
/// config file only needs to override what changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Container holding the result cards on a search page
    pub search_result: String,

    /// Substring identifying job detail links
    pub job_link_pattern: String,

    /// Numbered pagination controls carrying a `data-page` attribute
    pub pagination_button: String,

    /// "Next page" control
    pub pagination_next: String,

    /// Top-level container of a job detail page
    pub job_container: String,

    /// Job header block (title, company, company location, category)
    pub job_header: String,

    /// Fallback for the job header block
    pub job_header_fallback: String,

    /// Publish date element
    pub publish_date: String,

    /// Fallback for the publish date element
    pub publish_date_fallback: String,

    /// Description body
    pub description: String,

    /// Icon-bearing attribute rows
    pub icon_row: String,

    /// Text element inside an icon row
    pub icon_text: String,

    /// Fallback text element inside an icon row
    pub icon_text_fallback: String,

    /// Skill badges
    pub skill_badge: String,

    /// Skill tag links
    pub skill_tag: String,

    /// Breadcrumb links (last one is the sector)
    pub breadcrumb_link: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            search_result: r#"div[data-testid="search-result"]"#.into(),
            job_link_pattern: "/job-mission/".into(),
            pagination_button: "[data-page]".into(),
            pagination_next: r#"[rel="next"], [aria-label="Page suivante"], [aria-label="Next page"]"#
                .into(),
            job_container: "main".into(),
            job_header: "div.text-white.w-full".into(),
            job_header_fallback: "header".into(),
            publish_date: "time.text-sm".into(),
            publish_date_fallback: "time".into(),
            description: "div.prose-content".into(),
            icon_row: "div.flex.items-center.py-1".into(),
            icon_text: "span.text-sm".into(),
            icon_text_fallback: "span".into(),
            skill_badge: r#"span[class*="badge"]"#.into(),
            skill_tag: r#"a[class*="tag"]"#.into(),
            breadcrumb_link: r#"nav[aria-label="breadcrumb"] a"#.into(),
        }
    }
}

impl SelectorConfig {
    /// Check that every selector parses.
    pub fn validate(&self) -> Result<()> {
        for selector in self.all_selectors() {
            parse_selector(selector)?;
        }
        Ok(())
    }

    fn all_selectors(&self) -> [&str; 15] {
        [
            self.search_result.as_str(),
            self.pagination_button.as_str(),
            self.pagination_next.as_str(),
            self.job_container.as_str(),
            self.job_header.as_str(),
            self.job_header_fallback.as_str(),
            self.publish_date.as_str(),
            self.publish_date_fallback.as_str(),
            self.description.as_str(),
            self.icon_row.as_str(),
            self.icon_text.as_str(),
            self.icon_text_fallback.as_str(),
            self.skill_badge.as_str(),
            self.skill_tag.as_str(),
            self.breadcrumb_link.as_str(),
        ]
    }
}

/// Which files the export step writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
    #[default]
    Both,
}

impl ExportFormat {
    pub fn wants_csv(self) -> bool {
        matches!(self, Self::Csv | Self::Both)
    }

    pub fn wants_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "both" => Ok(Self::Both),
            other => Err(AppError::config(format!("Unknown export format: {other}"))),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory receiving exported files
    #[serde(default = "defaults::output_dir")]
    pub output_dir: PathBuf,

    /// Formats to write
    #[serde(default)]
    pub format: ExportFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: defaults::output_dir(),
            format: ExportFormat::default(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
         Chrome/124.0.0.0 Safari/537.36"
            .into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn pacing_min() -> u64 {
        1000
    }
    pub fn pacing_max() -> u64 {
        3000
    }
    pub fn page_delay_min() -> u64 {
        2000
    }
    pub fn page_delay_max() -> u64 {
        4000
    }
    pub fn max_concurrent() -> usize {
        1
    }
    pub fn headless() -> bool {
        true
    }
    pub fn output_dir() -> PathBuf {
        PathBuf::from("output")
    }
}
