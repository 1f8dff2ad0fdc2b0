//! Content feed and configuration tests
//!
//! Loading the built-in feed, rejecting structurally unusable feeds, derived
//! summaries, and site configuration parsing.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use folio::config::SiteConfig;
use folio::error::PortfolioError;
use folio::types::{EmploymentType, PortfolioData, ProjectStatus, Skill, SkillKind, SkillTier};
use serde_json::{json, Value};
use test_case::test_case;

fn builtin_json() -> Value {
    serde_json::from_str(folio::content::BUILTIN_CONTENT).unwrap()
}

fn load(value: &Value) -> Result<PortfolioData, PortfolioError> {
    PortfolioData::from_json(&value.to_string())
}

// ============================================================================
// Built-in feed
// ============================================================================

#[test]
fn test_builtin_feed_shape() {
    let data = PortfolioData::builtin().unwrap();
    assert_eq!(
        data.section_ids(),
        vec!["home", "about", "skills", "experience", "projects", "contact"]
    );
    assert_eq!(data.roles.len(), 4);
    assert_eq!(data.skills.len(), 3);
    assert_eq!(data.experience.len(), 3);
    assert_eq!(data.education.len(), 2);
    assert_eq!(data.experience[0].employment_type, EmploymentType::FullTime);
}

#[test]
fn test_builtin_project_summary() {
    let data = PortfolioData::builtin().unwrap();
    let stats = data.project_stats();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.completed, 3);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.planned, 0);
    assert_eq!(stats.featured, 3);
    assert_eq!(stats.categories, 4);

    let featured: Vec<&str> = data.featured_projects().map(|p| p.id.as_str()).collect();
    assert_eq!(
        featured,
        vec!["learning-management-platform", "ai-job-portal", "portfolio-website"]
    );
    let site = data.project("portfolio-website").unwrap();
    assert_eq!(site.status, ProjectStatus::InProgress);
    assert_eq!(site.status.label(), "in progress");
    assert!(site.github_url.is_some());
}

#[test]
fn test_skill_averages() {
    let data = PortfolioData::builtin().unwrap();
    for category in &data.skills {
        let avg = category.average_level();
        let min = category.skills.iter().map(|s| s.level).min().unwrap();
        let max = category.skills.iter().map(|s| s.level).max().unwrap();
        assert!(min <= avg && avg <= max, "{}", category.name);
    }
}

#[test]
fn test_builtin_distinct_technologies() {
    let stats = PortfolioData::builtin().unwrap().project_stats();
    assert_eq!(stats.technologies, 18);
    let value = serde_json::to_value(stats).unwrap();
    assert_eq!(value["technologies"], 18);
    assert_eq!(value["inProgress"], 1);
}

// ============================================================================
// Skill ratings
// ============================================================================

fn skill(level: u8) -> Skill {
    Skill {
        name: format!("level {level}"),
        level,
        category: SkillKind::Frontend,
        icon: None,
    }
}

#[test_case(0, SkillTier::Basic)]
#[test_case(69, SkillTier::Basic)]
#[test_case(70, SkillTier::Intermediate)]
#[test_case(79, SkillTier::Intermediate)]
#[test_case(80, SkillTier::Advanced)]
#[test_case(89, SkillTier::Advanced)]
#[test_case(90, SkillTier::Expert)]
#[test_case(100, SkillTier::Expert)]
fn test_skill_tier(level: u8, tier: SkillTier) {
    assert_eq!(skill(level).tier(), tier);
}

#[test_case(0, 0)]
#[test_case(1, 1)]
#[test_case(20, 1)]
#[test_case(21, 2)]
#[test_case(75, 4)]
#[test_case(100, 5)]
fn test_skill_dots(level: u8, dots: u8) {
    assert_eq!(skill(level).dots(), dots);
}

#[test]
fn test_tier_labels() {
    assert_eq!(skill(95).tier().label(), "Expert");
    assert_eq!(skill(50).tier().label(), "Basic");
}

// ============================================================================
// Rejected feeds
// ============================================================================

#[test]
fn test_rejects_empty_navigation() {
    let mut feed = builtin_json();
    feed["navigation"] = json!([]);
    assert!(matches!(load(&feed), Err(PortfolioError::Content(_))));
}

#[test]
fn test_rejects_external_nav_link() {
    let mut feed = builtin_json();
    feed["navigation"][2]["href"] = json!("https://example.com/skills");
    let err = load(&feed).unwrap_err();
    assert!(err.to_string().contains("non-anchor href"));
}

#[test]
fn test_rejects_duplicate_project_ids() {
    let mut feed = builtin_json();
    feed["projects"][1]["id"] = json!("learning-management-platform");
    let err = load(&feed).unwrap_err();
    assert!(err.to_string().contains("duplicate project id"));
}

#[test]
fn test_rejects_skill_level_over_100() {
    let mut feed = builtin_json();
    feed["skills"][0]["skills"][0]["level"] = json!(120);
    assert!(matches!(load(&feed), Err(PortfolioError::Content(_))));
}

#[test]
fn test_malformed_json_is_json_error() {
    let err = PortfolioData::from_json("{ not json").unwrap_err();
    assert!(matches!(err, PortfolioError::Json(_)));
}

#[test]
fn test_unknown_status_is_rejected() {
    let mut feed = builtin_json();
    feed["projects"][0]["status"] = json!("abandoned");
    assert!(matches!(load(&feed), Err(PortfolioError::Json(_))));
}

#[test]
fn test_round_trip_keeps_camel_case() {
    let data = PortfolioData::builtin().unwrap();
    let value = serde_json::to_value(&data).unwrap();
    assert!(value.get("personalInfo").is_some());
    assert_eq!(value["projects"][3]["status"], "in-progress");
    assert!(value["projects"][3].get("githubUrl").is_some());
    assert!(value["projects"][0].get("githubUrl").is_none());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_defaults() {
    let config = SiteConfig::from_json("{}").unwrap();
    assert_eq!(config.header_offset, 100.0);
    assert_eq!(config.scrolled_threshold, 50.0);
    assert_eq!(config.disclosure_transition_ms, 300);
    assert_eq!(config.role_interval_ms, 3000);
    assert_eq!(config.submit_delay_ms, 2000);
    assert_eq!(config.success_banner_ms, 5000);
    assert_eq!(config.message_max_len, 1000);
    assert_eq!(config.log_level_filter(), Some(log::LevelFilter::Info));
}

#[test]
fn test_config_overrides() {
    let config =
        SiteConfig::from_json(r#"{"headerOffset": 64, "logLevel": "debug"}"#).unwrap();
    assert_eq!(config.header_offset, 64.0);
    assert_eq!(config.log_level_filter(), Some(log::LevelFilter::Debug));
    assert_eq!(config.message_max_len, 1000);
}

#[test]
fn test_config_rejects_invalid_values() {
    assert!(matches!(
        SiteConfig::from_json(r#"{"messageMaxLen": 0}"#),
        Err(PortfolioError::Config(_))
    ));
    assert!(matches!(
        SiteConfig::from_json(r#"{"logLevel": "loud"}"#),
        Err(PortfolioError::Config(_))
    ));
}
