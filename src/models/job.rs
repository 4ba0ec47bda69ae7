//! Job record data structure.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Extraction outcome for a job page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Ok,
    Error,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Ok => "ok",
            JobStatus::Error => "error",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One job posting scraped from a detail page.
///
/// `job_url` is the natural key. A record is built once by the extractor and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Job title (may be empty on error records)
    pub title: String,

    pub company: Option<String>,
    pub company_location: Option<String>,
    pub category: Option<String>,

    /// Job location (icon attribute)
    pub location: Option<String>,

    /// Remote work policy (icon attribute)
    pub remote: Option<String>,

    /// Salary or daily rate (TJM) (icon attribute)
    pub salary: Option<String>,

    /// Mission duration (icon attribute)
    pub duration: Option<String>,

    /// Required experience (icon attribute)
    pub experience: Option<String>,

    /// Start date (icon attribute)
    pub start_date: Option<String>,

    pub publish_date: Option<String>,

    /// Skills in page order, without duplicates
    #[serde(default)]
    pub skills: Vec<String>,

    pub sector: Option<String>,
    pub description: Option<String>,

    /// Absolute URL of the job detail page
    pub job_url: String,

    /// Search page the job was discovered on (1-based)
    pub page: u32,

    /// Wall-clock time of extraction
    pub scraped_at: DateTime<Utc>,

    pub status: JobStatus,

    /// Failure reason, set only when `status` is `Error`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JobRecord {
    /// Build an error record that carries only identity fields.
    pub fn failed(
        job_url: impl Into<String>,
        page: u32,
        title: Option<String>,
        reason: impl fmt::Display,
    ) -> Self {
        Self {
            title: title.unwrap_or_default(),
            company: None,
            company_location: None,
            category: None,
            location: None,
            remote: None,
            salary: None,
            duration: None,
            experience: None,
            start_date: None,
            publish_date: None,
            skills: Vec::new(),
            sector: None,
            description: None,
            job_url: job_url.into(),
            page,
            scraped_at: Utc::now(),
            status: JobStatus::Error,
            error: Some(reason.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == JobStatus::Ok
    }

    pub fn has_salary(&self) -> bool {
        has_text(&self.salary)
    }

    pub fn has_remote(&self) -> bool {
        has_text(&self.remote)
    }

    /// One-line description: `Title @ Company (Location)`.
    pub fn summary(&self) -> String {
        let mut out = self.title.clone();
        if let Some(company) = self.company.as_deref().filter(|c| !c.is_empty()) {
            out.push_str(" @ ");
            out.push_str(company);
        }
        if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
            out.push_str(" (");
            out.push_str(location);
            out.push(')');
        }
        out
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}
