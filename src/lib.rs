// src/lib.rs

//! freework crawler library
//!
//! Collects job postings from free-work.com search results: the paginator
//! walks the search pages, the extractor turns each job page into a
//! [`models::JobRecord`], and the export sinks write the records to disk.

pub mod error;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;

#[cfg(test)]
mod fixtures;
