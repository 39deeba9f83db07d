//! Debounced search filter state
//!
//! Holds the published search string for the gallery list. Submissions are
//! published only after a quiet interval so the list is not re-filtered on
//! every keystroke; a newer submission supersedes a pending one. Length
//! policy (30 characters by default) is enforced by form-level validation
//! before text reaches this controller.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;

use crate::config::SearchConfig;
use crate::domain::project::Project;

/// Debounced text-filter state for the project list
pub struct SearchFilter {
    published: Arc<RwLock<String>>,
    epoch: Arc<AtomicU64>,
    debounce: Duration,
    max_query_length: usize,
}

impl SearchFilter {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            published: Arc::new(RwLock::new(String::new())),
            epoch: Arc::new(AtomicU64::new(0)),
            debounce: config.debounce(),
            max_query_length: config.max_query_length,
        }
    }

    /// Maximum query length the form layer should accept
    pub fn max_query_length(&self) -> usize {
        self.max_query_length
    }

    /// Submit new input; published after the debounce interval unless a
    /// newer submission supersedes it first.
    pub fn submit(&self, text: impl Into<String>) {
        let token = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let text = text.into();
        let published = Arc::clone(&self.published);
        let epoch = Arc::clone(&self.epoch);
        let debounce = self.debounce;

        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            let mut current = published.write().await;
            if epoch.load(Ordering::SeqCst) != token {
                return; // superseded while waiting
            }
            *current = text;
        });
    }

    /// The last published search string
    pub async fn current(&self) -> String {
        self.published.read().await.clone()
    }

    /// Case-insensitive name/tag containment check used by the list view
    pub async fn matches(&self, project: &Project) -> bool {
        let query = self.current().await;
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        project.name.to_lowercase().contains(&query)
            || project
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query))
    }
}
