//! Attribute kinds inferred from job page icons.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic meaning of an icon-bearing attribute row on a job page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Salary,
    Remote,
    Duration,
    Experience,
    Location,
    StartDate,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 6] = [
        AttributeKind::Salary,
        AttributeKind::Remote,
        AttributeKind::Duration,
        AttributeKind::Experience,
        AttributeKind::Location,
        AttributeKind::StartDate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKind::Salary => "salary",
            AttributeKind::Remote => "remote",
            AttributeKind::Duration => "duration",
            AttributeKind::Experience => "experience",
            AttributeKind::Location => "location",
            AttributeKind::StartDate => "start_date",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
