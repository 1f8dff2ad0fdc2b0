use serde::{Deserialize, Serialize};

use super::NavItem;

/// Owner's contact and summary details
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
}

/// A social profile link shown in the hero and footer
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    /// Icon key resolved by the rendering layer
    pub icon: String,
    /// CSS color, e.g. "#0077b5"
    pub color: String,
}

/// Coarse grouping a skill belongs to
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Frontend,
    Backend,
    Tools,
}

/// A single skill with a proficiency level (0-100)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: SkillKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub icon: Option<String>,
}

/// Proficiency band shown on a skill badge
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillTier {
    Basic,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillTier {
    pub fn from_level(level: u8) -> Self {
        match level {
            90.. => SkillTier::Expert,
            80..=89 => SkillTier::Advanced,
            70..=79 => SkillTier::Intermediate,
            _ => SkillTier::Basic,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillTier::Basic => "Basic",
            SkillTier::Intermediate => "Intermediate",
            SkillTier::Advanced => "Advanced",
            SkillTier::Expert => "Expert",
        }
    }
}

/// Number of dots in a skill's rating row.
pub const SKILL_DOTS: u8 = 5;

impl Skill {
    pub fn tier(&self) -> SkillTier {
        SkillTier::from_level(self.level)
    }

    /// Filled dots out of [`SKILL_DOTS`]: `ceil(level / 20)`, capped at 5.
    pub fn dots(&self) -> u8 {
        self.level.div_ceil(20).min(SKILL_DOTS)
    }

    pub fn rating(&self) -> SkillRating<'_> {
        SkillRating {
            name: &self.name,
            level: self.level,
            tier: self.tier(),
            dots: self.dots(),
        }
    }
}

/// Display data for one skill row: level bar, tier badge and dots
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkillRating<'a> {
    pub name: &'a str,
    pub level: u8,
    pub tier: SkillTier,
    pub dots: u8,
}

/// A named tab of skills in the skills view
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

impl SkillCategory {
    /// Mean proficiency of the category, rounded to the nearest integer.
    ///
    /// Returns 0 for a category without skills.
    pub fn average_level(&self) -> u8 {
        if self.skills.is_empty() {
            return 0;
        }
        let sum: u32 = self.skills.iter().map(|s| u32::from(s.level)).sum();
        let count = u32::try_from(self.skills.len()).unwrap_or(u32::MAX);
        // Round half up: (2 * sum + count) / (2 * count)
        let avg = (2 * sum + count) / (2 * count);
        u8::try_from(avg).unwrap_or(u8::MAX)
    }
}

/// Employment arrangement of a job history entry
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    Internship,
    Contract,
}

/// One job history entry (rendered as a disclosure)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub position: String,
    /// Free-form display range, e.g. "Jun 2024 – Present"
    pub duration: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// Delivery status of a project
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    /// Human label, e.g. "in progress"
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in progress",
            ProjectStatus::Planned => "planned",
        }
    }
}

/// A project card in the gallery
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Free-form gallery category, e.g. "Full Stack"
    pub category: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub featured: bool,
}

/// An education entry
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub details: Vec<String>,
}

/// The complete static content feed of the page
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    /// Ordered section anchors; drives the scroll spy
    pub navigation: Vec<NavItem>,
    /// Role titles rotated in the hero
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
}
