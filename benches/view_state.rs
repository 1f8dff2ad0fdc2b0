//! Benchmarks for the per-event view-state paths.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_precision_loss)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use folio::layout::{Section, SectionLayout};
use folio::state::{filter, validate, ScrollSpy};
use folio::types::{ContactForm, PortfolioData, Project};

fn stacked_layout(count: usize) -> SectionLayout {
    SectionLayout::new(
        (0..count)
            .map(|i| Section::new(format!("section-{i}"), i, i as f64 * 700.0, 700.0))
            .collect(),
    )
}

/// Scroll spy recomputation, the work done once per animation frame
fn bench_scroll_spy(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_spy_update");
    for count in [6usize, 50, 500] {
        let mut spy = ScrollSpy::new(stacked_layout(count), 100.0).expect("layout");
        let height = count as f64 * 700.0;
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(count), &height, |b, &height| {
            let mut offset = 0.0;
            b.iter(|| {
                offset = (offset + 37.0) % height;
                spy.update(black_box(offset))
            });
        });
    }
    group.finish();
}

/// Category list and visible subset over a large gallery
fn bench_filter(c: &mut Criterion) {
    let data = PortfolioData::builtin().expect("builtin content");
    let projects: Vec<Project> = data.projects.iter().cycle().take(1000).cloned().collect();

    c.bench_function("filter_categories_1000", |b| {
        b.iter(|| filter::categories(black_box(&projects)))
    });
    c.bench_function("filter_visible_1000", |b| {
        b.iter(|| filter::visible(black_box(&projects), black_box("AI/ML")))
    });
}

fn bench_validate(c: &mut Criterion) {
    let form = ContactForm {
        name: "Ada Lovelace".into(),
        email: "ada@analytical.engine.org".into(),
        subject: "Collaboration".into(),
        message: "x".repeat(900),
    };
    c.bench_function("contact_validate", |b| b.iter(|| validate(black_box(&form))));
}

criterion_group!(benches, bench_scroll_spy, bench_filter, bench_validate);
criterion_main!(benches);
