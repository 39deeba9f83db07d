//! Metadata fetching with total failure absorption
//!
//! The fetcher is the error boundary of the enrichment pipeline: network
//! faults, non-success statuses, malformed payloads and elapsed deadlines all
//! collapse into an absent result here. Callers never distinguish causes:
//! "no data" is the uniform failure signal, and returning is the finalize
//! signal, fired exactly once per call regardless of outcome.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::domain::host::RepositoryHost;
use crate::domain::metadata::RepositoryMetadata;
use crate::domain::slug::RepositorySlug;

/// Issues the per-selection remote calls against a repository host
#[derive(Clone)]
pub struct MetadataFetcher {
    host: Arc<dyn RepositoryHost>,
    deadline: Duration,
}

impl MetadataFetcher {
    pub fn new(host: Arc<dyn RepositoryHost>, deadline: Duration) -> Self {
        Self { host, deadline }
    }

    /// Fetch repository description and statistics.
    ///
    /// `None` on any failure; the error cause is logged, not propagated.
    pub async fn repository_info(&self, slug: &RepositorySlug) -> Option<RepositoryMetadata> {
        match tokio::time::timeout(self.deadline, self.host.repository_info(slug)).await {
            Ok(Ok(metadata)) => Some(metadata),
            Ok(Err(error)) => {
                warn!(slug = %slug, %error, "repository info fetch failed");
                None
            }
            Err(_) => {
                warn!(slug = %slug, deadline_s = self.deadline.as_secs(), "repository info fetch timed out");
                None
            }
        }
    }

    /// Fetch the ordered language mapping.
    ///
    /// `None` on any failure; the error cause is logged, not propagated.
    pub async fn languages(&self, slug: &RepositorySlug) -> Option<Vec<(String, u64)>> {
        match tokio::time::timeout(self.deadline, self.host.repository_languages(slug)).await {
            Ok(Ok(languages)) => Some(languages),
            Ok(Err(error)) => {
                warn!(slug = %slug, %error, "language fetch failed");
                None
            }
            Err(_) => {
                warn!(slug = %slug, deadline_s = self.deadline.as_secs(), "language fetch timed out");
                None
            }
        }
    }
}
