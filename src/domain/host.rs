//! Repository host abstraction
//!
//! Two idempotent read operations against the repository-hosting service.
//! The trait is object-safe and used with dynamic dispatch via
//! `Arc<dyn RepositoryHost>`.

use async_trait::async_trait;

use crate::domain::error::HostError;
use crate::domain::metadata::RepositoryMetadata;
use crate::domain::slug::RepositorySlug;

/// Read access to a repository-hosting service
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Fetch description and statistics for a repository
    async fn repository_info(&self, slug: &RepositorySlug)
    -> Result<RepositoryMetadata, HostError>;

    /// Fetch the language → byte-count mapping for a repository, in the
    /// service's own iteration order
    async fn repository_languages(
        &self,
        slug: &RepositorySlug,
    ) -> Result<Vec<(String, u64)>, HostError>;
}
