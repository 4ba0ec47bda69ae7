// src/export/mod.rs

//! Record export.
//!
//! A crawl ends with an ordered list of [`JobRecord`]s; each [`RecordSink`]
//! writes that list to one file format. Files land in the configured output
//! directory as `freework_jobs_<YYYYmmdd_HHMMSS>.<ext>` and are written
//! atomically (temp file, then rename).

mod csv;
mod json;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Local;
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::models::{ExportConfig, JobRecord};

pub use csv::CsvExporter;
pub use json::JsonExporter;

/// File name prefix for exported files.
pub const FILE_PREFIX: &str = "freework_jobs";

/// A destination format for crawled records.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// File extension without the dot.
    fn extension(&self) -> &'static str;

    /// Write all records to `path`, preserving their order.
    async fn write(&self, records: &[JobRecord], path: &Path) -> Result<()>;
}

/// Sinks selected by the export configuration.
pub fn sinks_for(config: &ExportConfig) -> Vec<Box<dyn RecordSink>> {
    let mut sinks: Vec<Box<dyn RecordSink>> = Vec::new();
    if config.format.wants_csv() {
        sinks.push(Box::new(CsvExporter));
    }
    if config.format.wants_json() {
        sinks.push(Box::new(JsonExporter));
    }
    sinks
}

/// Export records with a timestamp taken from the local clock.
///
/// Returns the written paths. An empty record list writes nothing.
pub async fn export_records(records: &[JobRecord], config: &ExportConfig) -> Result<Vec<PathBuf>> {
    let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    export_with_stamp(records, config, &stamp).await
}

/// Export records under an explicit `YYYYmmdd_HHMMSS` stamp.
pub async fn export_with_stamp(
    records: &[JobRecord],
    config: &ExportConfig,
    stamp: &str,
) -> Result<Vec<PathBuf>> {
    if records.is_empty() {
        log::warn!("No records to export");
        return Ok(Vec::new());
    }

    tokio::fs::create_dir_all(&config.output_dir).await?;

    let mut written = Vec::new();
    for sink in sinks_for(config) {
        let path = config.output_dir.join(file_name(stamp, sink.extension()));
        sink.write(records, &path).await?;
        log::info!("Exported {} records to {}", records.len(), path.display());
        written.push(path);
    }
    Ok(written)
}

/// `freework_jobs_<stamp>.<ext>`
pub fn file_name(stamp: &str, extension: &str) -> String {
    format!("{FILE_PREFIX}_{stamp}.{extension}")
}

/// Write bytes atomically (write to temp, then rename).
pub(crate) async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let tmp = path.with_extension("tmp");
    let mut file = tokio::fs::File::create(&tmp).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    drop(file);

    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}
