//! Core domain models and logic

pub mod error;
pub mod host;
pub mod languages;
pub mod metadata;
pub mod project;
pub mod readme;
pub mod slug;

pub use error::HostError;
pub use host::RepositoryHost;
pub use languages::{LanguageBreakdown, LanguageEntry};
pub use metadata::RepositoryMetadata;
pub use project::{Project, shuffle_projects};
pub use readme::{ReadmeDecodeError, decode_readme};
pub use slug::RepositorySlug;
