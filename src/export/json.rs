// src/export/json.rs

//! JSON export.

use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::export::{RecordSink, write_atomic};
use crate::models::JobRecord;

/// Top-level JSON document.
#[derive(Debug, Serialize)]
struct JobsDocument<'a> {
    exported_at: DateTime<Utc>,
    count: usize,
    jobs: &'a [JobRecord],
}

/// Pretty-printed JSON export.
pub struct JsonExporter;

impl JsonExporter {
    pub fn encode(records: &[JobRecord]) -> Result<Vec<u8>> {
        let document = JobsDocument {
            exported_at: Utc::now(),
            count: records.len(),
            jobs: records,
        };
        Ok(serde_json::to_vec_pretty(&document)?)
    }
}

#[async_trait]
impl RecordSink for JsonExporter {
    fn extension(&self) -> &'static str {
        "json"
    }

    async fn write(&self, records: &[JobRecord], path: &Path) -> Result<()> {
        let bytes = Self::encode(records)?;
        write_atomic(path, &bytes).await
    }
}
