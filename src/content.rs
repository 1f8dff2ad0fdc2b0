//! Content feed loading, structural checks and summaries.
//!
//! The feed is immutable once loaded. Nothing here transforms it beyond
//! grouping and counting; the view-state controllers only ever read it.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{PortfolioError, Result};
use crate::types::{PortfolioData, Project, ProjectStatus};

/// Feed compiled into the binary.
pub const BUILTIN_CONTENT: &str = include_str!("../content/portfolio.json");

/// Highest proficiency a skill can carry.
pub const MAX_SKILL_LEVEL: u8 = 100;

impl PortfolioData {
    /// Load the built-in content feed.
    ///
    /// # Errors
    /// Returns an error if the embedded feed fails to parse or check.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CONTENT)
    }

    /// Parse and check a camelCase JSON content feed.
    ///
    /// # Errors
    /// Returns an error on malformed JSON or a structurally unusable feed.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: PortfolioData = serde_json::from_str(json)?;
        if let Err(e) = data.check() {
            log::warn!("rejected content feed: {e}");
            return Err(e);
        }
        Ok(data)
    }

    /// Reject feeds the page cannot be driven from.
    ///
    /// # Errors
    /// Returns [`PortfolioError::Content`] describing the first problem found.
    pub fn check(&self) -> Result<()> {
        if self.navigation.is_empty() {
            return Err(PortfolioError::Content("navigation is empty".into()));
        }
        for item in &self.navigation {
            if item.section_id().is_none() {
                return Err(PortfolioError::Content(format!(
                    "navigation item '{}' has non-anchor href '{}'",
                    item.name, item.href
                )));
            }
        }
        for category in &self.skills {
            if let Some(skill) = category.skills.iter().find(|s| s.level > MAX_SKILL_LEVEL) {
                return Err(PortfolioError::Content(format!(
                    "skill '{}' has level {} (max {MAX_SKILL_LEVEL})",
                    skill.name, skill.level
                )));
            }
        }
        let mut ids = HashSet::new();
        for project in &self.projects {
            if !ids.insert(project.id.as_str()) {
                return Err(PortfolioError::Content(format!(
                    "duplicate project id '{}'",
                    project.id
                )));
            }
        }
        Ok(())
    }

    /// Section ids in navigation order.
    pub fn section_ids(&self) -> Vec<&str> {
        self.navigation
            .iter()
            .filter_map(|item| item.section_id())
            .collect()
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Featured projects in collection order.
    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    pub fn project_stats(&self) -> ProjectStats {
        ProjectStats::from_projects(&self.projects)
    }
}

/// Counters shown under the project gallery
#[derive(Debug, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub planned: usize,
    pub featured: usize,
    /// Distinct categories (excluding "All")
    pub categories: usize,
    /// Distinct technologies across every project
    pub technologies: usize,
}

impl ProjectStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        let mut stats = ProjectStats {
            total: projects.len(),
            ..ProjectStats::default()
        };
        let mut categories = HashSet::new();
        let mut technologies = HashSet::new();
        for project in projects {
            match project.status {
                ProjectStatus::Completed => stats.completed += 1,
                ProjectStatus::InProgress => stats.in_progress += 1,
                ProjectStatus::Planned => stats.planned += 1,
            }
            if project.featured {
                stats.featured += 1;
            }
            categories.insert(project.category.as_str());
            technologies.extend(project.technologies.iter().map(String::as_str));
        }
        stats.categories = categories.len();
        stats.technologies = technologies.len();
        stats
    }
}
