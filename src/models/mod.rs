// src/models/mod.rs

//! Domain models for the crawler application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod attribute;
mod config;
mod job;
mod page;
mod stats;

// Re-export all public types
pub use attribute::AttributeKind;
pub use config::{Config, CrawlerConfig, ExportConfig, ExportFormat, SelectorConfig};
pub use job::{JobRecord, JobStatus};
pub use page::PageResult;
pub use stats::CrawlStats;
