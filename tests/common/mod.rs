//! Common test utilities: layouts, content and headless pages.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use folio::config::SiteConfig;
use folio::layout::{Section, SectionLayout};
use folio::types::{PortfolioData, Project, ProjectStatus};
use folio::viewer::{PageHandle, PortfolioPage};
use folio::viewport::HeadlessViewport;

/// Layout from `(id, top, height)` triples, in navigation order.
#[must_use]
pub fn layout(sections: &[(&str, f64, f64)]) -> SectionLayout {
    SectionLayout::new(
        sections
            .iter()
            .enumerate()
            .map(|(order, (id, top, height))| Section::new(*id, order, *top, *height))
            .collect(),
    )
}

/// Contiguous layout for the built-in navigation: home, about, skills,
/// experience, projects, contact, each `height` tall.
#[must_use]
pub fn builtin_layout(height: f64) -> SectionLayout {
    let data = PortfolioData::builtin().expect("builtin content");
    SectionLayout::measure(data.section_ids(), |id| {
        let index = data
            .navigation
            .iter()
            .position(|item| item.section_id() == Some(id))?;
        Some((f64::from(u32::try_from(index).unwrap()) * height, height))
    })
}

#[must_use]
pub fn project(id: &str, category: &str) -> Project {
    Project {
        id: id.to_string(),
        title: format!("Project {id}"),
        description: String::new(),
        long_description: None,
        technologies: vec![],
        features: vec![],
        live_url: None,
        github_url: None,
        images: vec![],
        category: category.to_string(),
        status: ProjectStatus::Completed,
        featured: false,
    }
}

/// Built-in content on a headless viewport, sections 800px tall.
///
/// Returns the page handle and a viewport clone for dispatching events.
#[must_use]
pub fn headless_page() -> (PageHandle<HeadlessViewport>, HeadlessViewport) {
    headless_page_with(SiteConfig::default())
}

#[must_use]
pub fn headless_page_with(
    config: SiteConfig,
) -> (PageHandle<HeadlessViewport>, HeadlessViewport) {
    let viewport = HeadlessViewport::new();
    let data = PortfolioData::builtin().expect("builtin content");
    let page = PortfolioPage::new(data, config, viewport.clone(), builtin_layout(800.0))
        .expect("page")
        .into_handle();
    (page, viewport)
}
