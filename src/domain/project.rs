//! Project listing entries
//!
//! Projects are owned by the external project-listing collaborator and are
//! read-only to this core: only the repository URL is consumed here, the
//! display fields pass through to the view.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One entry of the project gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    /// Public repository URL, the only field this core reads
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Randomize gallery display order in place (Fisher-Yates)
pub fn shuffle_projects(projects: &mut [Project]) {
    let mut rng = rand::rng();
    for i in (1..projects.len()).rev() {
        let j = rng.random_range(0..=i);
        projects.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: usize) -> Vec<Project> {
        (0..n)
            .map(|i| Project {
                name: format!("project-{i}"),
                url: format!("https://github.com/acme/project-{i}"),
                image: None,
                tags: vec![],
            })
            .collect()
    }

    #[test]
    fn shuffle_keeps_every_project() {
        let original = sample(20);
        let mut shuffled = original.clone();
        shuffle_projects(&mut shuffled);

        assert_eq!(shuffled.len(), original.len());
        for project in &original {
            assert!(shuffled.contains(project));
        }
    }

    #[test]
    fn shuffle_handles_empty_and_single() {
        let mut empty: Vec<Project> = vec![];
        shuffle_projects(&mut empty);
        assert!(empty.is_empty());

        let mut one = sample(1);
        shuffle_projects(&mut one);
        assert_eq!(one.len(), 1);
    }
}
