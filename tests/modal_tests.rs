//! Modal visibility tests
//!
//! Opening and closing the project modal, its scroll lock and Escape
//! listener, and listener hygiene across mount/unmount cycles.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::{headless_page, project};
use folio::state::{ClickTarget, Modal, ESCAPE_KEY};
use folio::viewer::PortfolioPage;
use folio::viewport::{HeadlessViewport, KeyHandler};

fn noop_key_handler() -> KeyHandler {
    Rc::new(|_key: &str| {})
}

// ============================================================================
// Modal state
// ============================================================================

#[test]
fn test_switching_items_keeps_one_lock_and_listener() {
    let mut viewport = HeadlessViewport::new();
    let mut modal = Modal::new();

    modal.open(project("x", "Full Stack"), &mut viewport, noop_key_handler());
    modal.open(project("y", "AI/ML"), &mut viewport, noop_key_handler());

    assert_eq!(modal.selected().unwrap().id, "y");
    assert!(viewport.is_scroll_locked());
    assert_eq!(viewport.lock_calls(), 1);
    assert_eq!(viewport.key_listener_count(), 1);
}

#[test]
fn test_close_releases_everything() {
    let mut viewport = HeadlessViewport::new();
    let mut modal = Modal::new();
    modal.open(project("x", "Full Stack"), &mut viewport, noop_key_handler());

    assert!(modal.close(&mut viewport));
    assert!(!modal.is_open());
    assert!(!modal.holds_resources());
    assert!(!viewport.is_scroll_locked());
    assert_eq!(viewport.key_listener_count(), 0);
}

#[test]
fn test_close_when_closed_is_noop() {
    let mut viewport = HeadlessViewport::new();
    let mut modal: Modal<u32> = Modal::new();
    assert!(!modal.close(&mut viewport));
    assert!(!modal.close(&mut viewport));
    assert_eq!(viewport.unlock_calls(), 0);
    assert_eq!(viewport.lock_calls(), 0);
}

#[test]
fn test_only_escape_and_backdrop_close() {
    let mut viewport = HeadlessViewport::new();
    let mut modal = Modal::new();
    modal.open(7u32, &mut viewport, noop_key_handler());

    assert!(!modal.handle_key("Enter", &mut viewport));
    assert!(!modal.handle_click(ClickTarget::Content, &mut viewport));
    assert!(modal.is_open());

    assert!(modal.handle_click(ClickTarget::Backdrop, &mut viewport));
    assert!(!modal.is_open());

    modal.open(8u32, &mut viewport, noop_key_handler());
    assert!(modal.handle_key(ESCAPE_KEY, &mut viewport));
    assert!(!modal.is_open());
    assert!(!modal.handle_key(ESCAPE_KEY, &mut viewport));
}

// ============================================================================
// Page wiring
// ============================================================================

#[test]
fn test_escape_key_closes_project_modal() {
    let (page, viewport) = headless_page();
    assert!(PortfolioPage::open_project(&page, "ai-job-portal"));
    assert_eq!(
        page.borrow().selected_project().unwrap().title,
        "AI-Driven Job Portal"
    );
    assert!(viewport.is_scroll_locked());

    viewport.press_key("a");
    assert!(page.borrow().selected_project().is_some());

    viewport.press_key(ESCAPE_KEY);
    assert!(page.borrow().selected_project().is_none());
    assert!(!viewport.is_scroll_locked());
    assert_eq!(viewport.key_listener_count(), 0);
}

#[test]
fn test_unknown_project_does_not_open() {
    let (page, viewport) = headless_page();
    assert!(!PortfolioPage::open_project(&page, "nope"));
    assert!(page.borrow().selected_project().is_none());
    assert_eq!(viewport.lock_calls(), 0);
}

#[test]
fn test_escape_triggers_render_hook() {
    let (page, viewport) = headless_page();
    let renders = Rc::new(Cell::new(0));
    let counter = Rc::clone(&renders);
    page.borrow_mut()
        .set_render_hook(Some(Rc::new(move || counter.set(counter.get() + 1))));

    PortfolioPage::open_project(&page, "portfolio-website");
    viewport.press_key(ESCAPE_KEY);
    assert_eq!(renders.get(), 1);
}

#[test]
fn test_overlay_click_on_page() {
    let (page, viewport) = headless_page();
    PortfolioPage::open_project(&page, "learning-management-platform");
    assert!(!page.borrow_mut().overlay_click(ClickTarget::Content));
    assert!(page.borrow_mut().overlay_click(ClickTarget::Backdrop));
    assert!(!viewport.is_scroll_locked());
    assert!(!page.borrow_mut().close_project());
}

#[test]
fn test_mount_unmount_cycles_leave_nothing_behind() {
    let (page, viewport) = headless_page();
    for _ in 0..25 {
        PortfolioPage::mount(&page);
        PortfolioPage::mount(&page);
        PortfolioPage::open_project(&page, "ai-job-portal");
        PortfolioPage::open_project(&page, "project-management-system");
        assert_eq!(viewport.scroll_listener_count(), 1);
        assert_eq!(viewport.key_listener_count(), 1);

        let mut p = page.borrow_mut();
        p.unmount();
        p.unmount();
    }
    assert_eq!(viewport.scroll_listener_count(), 0);
    assert_eq!(viewport.key_listener_count(), 0);
    assert!(!viewport.is_scroll_locked());
    assert_eq!(viewport.lock_calls(), viewport.unlock_calls());
}

#[test]
fn test_dropping_page_releases_listeners() {
    let (page, viewport) = headless_page();
    PortfolioPage::mount(&page);
    PortfolioPage::open_project(&page, "ai-job-portal");
    drop(page);

    assert_eq!(viewport.scroll_listener_count(), 0);
    assert_eq!(viewport.key_listener_count(), 0);
    assert!(!viewport.is_scroll_locked());
}
