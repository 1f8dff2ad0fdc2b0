//! CLI tool for folio - checks a content feed and prints a JSON summary
//!
//! Usage:
//!   folio_cli                                 # Summarize the built-in feed
//!   folio_cli <content.json>                  # Summarize a custom feed
//!   folio_cli <content.json> --category AI/ML # Visible projects for a category
//!   folio_cli [content.json] -o out.json      # Write the summary to a file
//!
//! The summary lists categories with counts, the visible projects, project
//! stats (including distinct technologies) and per-skill tier and dot ratings.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use folio::content::ProjectStats;
use folio::state::{filter, SelectionFilter, ALL};
use folio::types::{PortfolioData, Skill, SkillRating};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategorySummary {
    name: String,
    count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectSummary<'a> {
    id: &'a str,
    title: &'a str,
    category: &'a str,
    status: &'static str,
    featured: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SkillSummary<'a> {
    name: &'a str,
    skills: usize,
    average_level: u8,
    ratings: Vec<SkillRating<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary<'a> {
    name: &'a str,
    sections: Vec<&'a str>,
    categories: Vec<CategorySummary>,
    active_category: String,
    visible_projects: Vec<ProjectSummary<'a>>,
    stats: ProjectStats,
    skills: Vec<SkillSummary<'a>>,
}

struct Args {
    input: Option<String>,
    category: String,
    output: Option<String>,
}

fn usage() -> ! {
    eprintln!("Usage: folio_cli [content.json] [--category <name>] [-o output.json]");
    std::process::exit(1);
}

fn parse_args() -> Args {
    let mut args = Args {
        input: None,
        category: ALL.to_string(),
        output: None,
    };
    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--category" => args.category = iter.next().unwrap_or_else(|| usage()),
            "-o" => args.output = Some(iter.next().unwrap_or_else(|| usage())),
            "-h" | "--help" => usage(),
            _ if args.input.is_none() && !arg.starts_with('-') => args.input = Some(arg),
            _ => usage(),
        }
    }
    args
}

fn summarize<'a>(data: &'a PortfolioData, category: &str) -> Summary<'a> {
    let mut selection = SelectionFilter::new();
    selection.select(category);
    if category != ALL && filter::count(&data.projects, category) == 0 {
        log::warn!("no projects in category {category:?}");
    }

    Summary {
        name: &data.personal_info.name,
        sections: data.section_ids(),
        categories: filter::categories(&data.projects)
            .into_iter()
            .map(|name| CategorySummary {
                count: filter::count(&data.projects, &name),
                name,
            })
            .collect(),
        active_category: selection.active().to_string(),
        visible_projects: selection
            .visible(&data.projects)
            .into_iter()
            .map(|p| ProjectSummary {
                id: &p.id,
                title: &p.title,
                category: &p.category,
                status: p.status.label(),
                featured: p.featured,
            })
            .collect(),
        stats: data.project_stats(),
        skills: data
            .skills
            .iter()
            .map(|c| SkillSummary {
                name: &c.name,
                skills: c.skills.len(),
                average_level: c.average_level(),
                ratings: c.skills.iter().map(Skill::rating).collect(),
            })
            .collect(),
    }
}

fn main() {
    env_logger::init();
    let args = parse_args();

    // Load content
    let loaded = match &args.input {
        Some(path) => {
            let json = match fs::read_to_string(path) {
                Ok(j) => j,
                Err(e) => {
                    eprintln!("Error reading {}: {}", path, e);
                    std::process::exit(1);
                }
            };
            PortfolioData::from_json(&json)
        }
        None => PortfolioData::builtin(),
    };
    let data = match loaded {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error loading content: {}", e);
            std::process::exit(1);
        }
    };
    log::info!(
        "loaded {} projects, {} sections",
        data.projects.len(),
        data.navigation.len()
    );

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&summarize(&data, &args.category)) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
