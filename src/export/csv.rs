// src/export/csv.rs

//! Spreadsheet-friendly CSV export.

use std::path::Path;

use async_trait::async_trait;
use chrono::Local;

use crate::error::{AppError, Result};
use crate::export::{RecordSink, write_atomic};
use crate::models::JobRecord;

/// Byte order mark so spreadsheet tools detect UTF-8.
const BOM: &[u8] = b"\xEF\xBB\xBF";

const COLUMNS: [&str; 19] = [
    "title",
    "company",
    "company_location",
    "category",
    "location",
    "remote",
    "salary",
    "duration",
    "experience",
    "start_date",
    "publish_date",
    "skills",
    "sector",
    "description",
    "job_url",
    "page",
    "scraped_at",
    "status",
    "error",
];

/// Writes one row per record, skills joined with `", "`.
pub struct CsvExporter;

impl CsvExporter {
    /// Encode records as CSV bytes, BOM included.
    pub fn encode(records: &[JobRecord]) -> Result<Vec<u8>> {
        let mut writer = ::csv::Writer::from_writer(BOM.to_vec());
        writer.write_record(COLUMNS)?;
        for record in records {
            writer.write_record(row(record))?;
        }
        writer
            .into_inner()
            .map_err(|e| AppError::Io(e.into_error()))
    }
}

#[async_trait]
impl RecordSink for CsvExporter {
    fn extension(&self) -> &'static str {
        "csv"
    }

    async fn write(&self, records: &[JobRecord], path: &Path) -> Result<()> {
        let bytes = Self::encode(records)?;
        write_atomic(path, &bytes).await
    }
}

fn row(record: &JobRecord) -> [String; 19] {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    [
        record.title.clone(),
        text(&record.company),
        text(&record.company_location),
        text(&record.category),
        text(&record.location),
        text(&record.remote),
        text(&record.salary),
        text(&record.duration),
        text(&record.experience),
        text(&record.start_date),
        text(&record.publish_date),
        record.skills.join(", "),
        text(&record.sector),
        text(&record.description),
        record.job_url.clone(),
        record.page.to_string(),
        record
            .scraped_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        record.status.to_string(),
        text(&record.error),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::record;

    fn read_back(bytes: &[u8]) -> (Vec<String>, Vec<Vec<String>>) {
        let mut reader = ::csv::Reader::from_reader(&bytes[BOM.len()..]);
        let headers = reader.headers().unwrap().iter().map(String::from).collect();
        let rows = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        (headers, rows)
    }

    #[test]
    fn test_starts_with_bom() {
        let bytes = CsvExporter::encode(&[record(1, "A")]).unwrap();
        assert!(bytes.starts_with(BOM));
    }

    #[test]
    fn test_header_and_rows_in_order() {
        let records = vec![record(1, "First"), record(2, "Second")];
        let (headers, rows) = read_back(&CsvExporter::encode(&records).unwrap());

        assert_eq!(headers, COLUMNS.to_vec());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "First");
        assert_eq!(rows[1][0], "Second");
        assert_eq!(rows[0][11], "Rust, Tokio");
        assert_eq!(rows[0][17], "ok");
        assert_eq!(rows[0][18], "");
    }

    #[test]
    fn test_error_record_row() {
        let failed = JobRecord::failed("https://e.com/job-mission/x", 3, None, "timeout");
        let (_, rows) = read_back(&CsvExporter::encode(&[failed]).unwrap());

        assert_eq!(rows[0][0], "");
        assert_eq!(rows[0][15], "3");
        assert_eq!(rows[0][17], "error");
        assert_eq!(rows[0][18], "timeout");
    }

    #[test]
    fn test_multiline_description_survives() {
        let mut job = record(1, "A");
        job.description = Some("Line one\nLine, two".to_string());
        let (_, rows) = read_back(&CsvExporter::encode(&[job]).unwrap());
        assert_eq!(rows[0][13], "Line one\nLine, two");
    }

    #[tokio::test]
    async fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.csv");
        CsvExporter.write(&[record(1, "A")], &path).await.unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let (_, rows) = read_back(&bytes);
        assert_eq!(rows.len(), 1);
    }
}
