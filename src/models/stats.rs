//! Crawl statistics.

use serde::Serialize;

use crate::models::JobRecord;

/// Counters describing a finished crawl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrawlStats {
    pub pages_visited: u32,
    pub total_jobs: usize,
    pub ok: usize,
    pub errors: usize,
    pub with_salary: usize,
    pub with_remote: usize,
    pub elapsed_secs: i64,
}

impl CrawlStats {
    pub fn from_records(records: &[JobRecord], pages_visited: u32, elapsed_secs: i64) -> Self {
        let ok = records.iter().filter(|r| r.is_ok()).count();
        Self {
            pages_visited,
            total_jobs: records.len(),
            ok,
            errors: records.len() - ok,
            with_salary: records.iter().filter(|r| r.has_salary()).count(),
            with_remote: records.iter().filter(|r| r.has_remote()).count(),
            elapsed_secs,
        }
    }

    /// Share of successfully extracted jobs, in `[0, 1]`.
    pub fn success_rate(&self) -> f64 {
        if self.total_jobs == 0 {
            return 0.0;
        }
        self.ok as f64 / self.total_jobs as f64
    }
}
