//! Repolens - GitHub metadata enrichment for a project gallery
//!
//! This crate provides the enrichment core behind a browsable gallery of
//! software projects: given a project's public repository URL it derives the
//! canonical `owner/repo` slug, fetches repository metadata and a language
//! breakdown from GitHub, reduces the languages into a bounded display table,
//! and manages the concurrent, cancellable selection lifecycle behind a modal
//! overlay. List rendering, pagination, and styling are external collaborators
//! that call into this core and render its output.
//!
//! # Architecture
//!
//! The crate follows Domain-Driven Design principles:
//!
//! ```text
//! repolens/
//! ├── domain/           # Pure business logic
//! │   ├── slug.rs       # Repository slug resolution and derived URLs
//! │   ├── languages.rs  # Language breakdown aggregation
//! │   ├── metadata.rs   # Repository metadata
//! │   └── host.rs       # RepositoryHost trait
//! ├── application/      # Selection lifecycle and filters
//! ├── infrastructure/   # GitHub REST client
//! └── config/           # Configuration management
//! ```
//!
//! # Configuration
//!
//! Load configuration from files and environment:
//!
//! ```rust,ignore
//! use repolens::Config;
//!
//! let config = Config::load()?;
//! ```
//!
//! Environment variables use the `REPOLENS__` prefix with double underscore
//! separators:
//!
//! ```bash
//! REPOLENS__GITHUB__REQUEST_TIMEOUT_SECONDS=10
//! REPOLENS__SEARCH__DEBOUNCE_MS=300
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

pub use application::{MetadataFetcher, SearchFilter, SelectionController, SelectionState};
pub use config::Config;
pub use domain::{
    HostError, LanguageBreakdown, LanguageEntry, Project, RepositoryHost, RepositoryMetadata,
    RepositorySlug,
};
pub use infrastructure::github::GitHubClient;
pub use logging::init_tracing;
