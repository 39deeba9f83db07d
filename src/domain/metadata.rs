//! Repository metadata
//!
//! Deserialized view of the hosting service's repository payload. Transient:
//! replaced wholesale on each new selection, never merged across requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Remote repository description and statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryMetadata {
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl RepositoryMetadata {
    /// Last-push timestamp as a `d/m/yyyy` display string, without the time
    /// component. `None` when the service reported no push date.
    pub fn pushed_date(&self) -> Option<String> {
        self.pushed_at
            .map(|ts| ts.format("%-d/%-m/%Y").to_string())
    }
}
