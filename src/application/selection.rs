//! Selection lifecycle orchestration
//!
//! `SelectionController` drives the enrichment pipeline for the modal
//! overlay: resolve the slug, start both remote fetches concurrently, and
//! publish display-ready state as each completes. A new selection supersedes
//! every in-flight one through a monotonically increasing epoch token; a
//! stale fetch checks the token before touching shared state and otherwise
//! discards itself silently.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::debug;

use crate::application::fetcher::MetadataFetcher;
use crate::domain::languages::LanguageBreakdown;
use crate::domain::metadata::RepositoryMetadata;
use crate::domain::slug::RepositorySlug;

/// Lifecycle phase of the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    /// No project selected, modal closed
    #[default]
    Idle,
    /// Slug resolution in progress
    Resolving,
    /// Remote fetches in flight
    Fetching,
    /// Both fetches finalized (possibly with empty results)
    Settled,
}

/// Display-ready state of the current selection
///
/// Mutated in place as each fetch resolves; torn down on modal close.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pub phase: SelectionPhase,
    pub slug: Option<RepositorySlug>,
    pub metadata: Option<RepositoryMetadata>,
    pub languages: LanguageBreakdown,
    /// Total bytes across the full, untruncated language input
    pub language_files_count: u64,
    pub is_loading: bool,
    /// Raw README reference handed to the external renderer
    pub readme_ref: Option<String>,
}

/// Top-level orchestration of the "project selected" event
pub struct SelectionController {
    fetcher: MetadataFetcher,
    raw_content_url: String,
    state: Arc<RwLock<SelectionState>>,
    epoch: Arc<AtomicU64>,
}

impl SelectionController {
    pub fn new(fetcher: MetadataFetcher, raw_content_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            raw_content_url: raw_content_url.into(),
            state: Arc::new(RwLock::new(SelectionState::default())),
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Snapshot of the current selection state
    pub async fn state(&self) -> SelectionState {
        self.state.read().await.clone()
    }

    /// Handle a "project selected" event.
    ///
    /// Supersedes any prior selection, resolves the slug from the project's
    /// repository URL and starts both fetches concurrently. An unresolvable
    /// URL settles immediately with empty state; it is an expected input,
    /// not an error.
    pub async fn select(&self, repository_url: &str) {
        let token = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;

        let slug = {
            let mut state = self.state.write().await;
            if self.epoch.load(Ordering::SeqCst) != token {
                return; // a newer selection won the lock first
            }
            *state = SelectionState {
                phase: SelectionPhase::Resolving,
                ..SelectionState::default()
            };

            let Some(slug) = RepositorySlug::resolve(repository_url) else {
                debug!(url = repository_url, "selection URL yields no slug");
                state.phase = SelectionPhase::Settled;
                return;
            };

            state.phase = SelectionPhase::Fetching;
            state.is_loading = true;
            state.slug = Some(slug.clone());
            state.readme_ref = Some(slug.readme_url(&self.raw_content_url));
            slug
        };

        debug!(slug = %slug, "selection resolved, starting fetches");

        // Both fetches are issued before either resolves. Each writes only
        // its own slice of state; the loading flag clears once the pair has
        // finalized (a join of the two finalize signals, counter of size 2).
        let pending = Arc::new(AtomicU8::new(2));

        {
            let fetcher = self.fetcher.clone();
            let state = Arc::clone(&self.state);
            let epoch = Arc::clone(&self.epoch);
            let pending = Arc::clone(&pending);
            let slug = slug.clone();
            tokio::spawn(async move {
                let metadata = fetcher.repository_info(&slug).await;
                let mut state = state.write().await;
                if epoch.load(Ordering::SeqCst) != token {
                    return; // superseded, result discarded
                }
                state.metadata = metadata;
                finalize(&mut state, &pending);
            });
        }

        {
            let fetcher = self.fetcher.clone();
            let state = Arc::clone(&self.state);
            let epoch = Arc::clone(&self.epoch);
            tokio::spawn(async move {
                let languages = fetcher.languages(&slug).await;
                let mut state = state.write().await;
                if epoch.load(Ordering::SeqCst) != token {
                    return; // superseded, result discarded
                }
                if let Some(languages) = languages {
                    let breakdown = LanguageBreakdown::aggregate(languages);
                    state.language_files_count = breakdown.total_bytes;
                    state.languages = breakdown;
                }
                finalize(&mut state, &pending);
            });
        }
    }

    /// Handle modal close: tear the selection down and discard any fetch
    /// still in flight.
    pub async fn close(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.write().await;
        *state = SelectionState::default();
    }
}

fn finalize(state: &mut SelectionState, pending: &AtomicU8) {
    if pending.fetch_sub(1, Ordering::SeqCst) == 1 {
        state.is_loading = false;
        state.phase = SelectionPhase::Settled;
    }
}
