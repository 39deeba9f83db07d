//! Repository slug resolution
//!
//! A slug is the canonical `owner/repo` identifier of a hosted repository,
//! derived from the project's public URL. Malformed URLs are a normal,
//! expected case and resolve to `None` rather than an error.

use serde::{Deserialize, Serialize};
use url::Url;

/// Canonical `owner/repo` identifier for a hosted repository
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositorySlug {
    pub owner: String,
    pub repo: String,
}

impl RepositorySlug {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Derive a slug from a repository URL.
    ///
    /// Takes the last two non-empty path segments; succeeds only when exactly
    /// two are present. Deterministic and side-effect free.
    pub fn resolve(url: &str) -> Option<Self> {
        let parsed = Url::parse(url).ok()?;
        let segments: Vec<&str> = parsed
            .path()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        let tail = segments.iter().rev().take(2).rev().collect::<Vec<_>>();
        match tail.as_slice() {
            [owner, repo] => Some(Self::new(**owner, **repo)),
            _ => None,
        }
    }

    /// Raw README reference, by the hosting service's raw-content convention.
    ///
    /// No validation that the file exists; the renderer handles absence.
    pub fn readme_url(&self, raw_content_url: &str) -> String {
        format!(
            "{}/{}/{}/master/README.md",
            raw_content_url.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }

    /// Star-history chart URL for this repository
    pub fn star_history_url(&self) -> String {
        format!(
            "https://api.star-history.com/svg?repos={}/{}&type=Timeline",
            self.owner, self.repo
        )
    }
}

impl std::fmt::Display for RepositorySlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_owner_and_repo() {
        let slug = RepositorySlug::resolve("https://github.com/acme/widget").unwrap();
        assert_eq!(slug, RepositorySlug::new("acme", "widget"));
        assert_eq!(slug.to_string(), "acme/widget");
    }

    #[test]
    fn single_segment_is_rejected() {
        assert_eq!(RepositorySlug::resolve("https://github.com/acme"), None);
    }

    #[test]
    fn empty_path_is_rejected() {
        assert_eq!(RepositorySlug::resolve("https://github.com"), None);
        assert_eq!(RepositorySlug::resolve("https://github.com/"), None);
    }

    #[test]
    fn malformed_url_is_rejected() {
        assert_eq!(RepositorySlug::resolve("not a url"), None);
        assert_eq!(RepositorySlug::resolve(""), None);
    }

    #[test]
    fn deep_path_takes_last_two_segments() {
        let slug = RepositorySlug::resolve("https://example.com/mirrors/acme/widget").unwrap();
        assert_eq!(slug, RepositorySlug::new("acme", "widget"));
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let slug = RepositorySlug::resolve("https://github.com/acme/widget/").unwrap();
        assert_eq!(slug, RepositorySlug::new("acme", "widget"));
    }

    #[test]
    fn derived_urls() {
        let slug = RepositorySlug::new("acme", "widget");
        assert_eq!(
            slug.readme_url("https://raw.githubusercontent.com"),
            "https://raw.githubusercontent.com/acme/widget/master/README.md"
        );
        assert_eq!(
            slug.star_history_url(),
            "https://api.star-history.com/svg?repos=acme/widget&type=Timeline"
        );
    }
}
