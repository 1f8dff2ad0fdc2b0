//! Disclosure set tests
//!
//! Independent expand/collapse of job history entries and the inline panel
//! styles derived from it.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use common::headless_page;
use folio::state::{DisclosureSet, PanelStyle};

#[test]
fn test_first_entry_starts_expanded() {
    let set = DisclosureSet::new();
    assert!(set.is_expanded(0));
    assert!(!set.is_expanded(1));
    assert_eq!(set.expanded_count(), 1);
}

#[test]
fn test_toggle_is_independent() {
    let mut set = DisclosureSet::new();
    assert!(set.toggle(2));
    assert!(set.is_expanded(0));
    assert!(set.is_expanded(2));

    assert!(!set.toggle(0));
    assert!(!set.is_expanded(0));
    assert!(set.is_expanded(2));
    assert_eq!(set.expanded().collect::<Vec<_>>(), vec![2]);
}

#[test]
fn test_membership_follows_toggle_parity() {
    // Deterministic pseudo-random toggle sequence over 6 entries
    let mut seed: u32 = 0x2545_f491;
    let mut set = DisclosureSet::new();
    let mut toggles = [0u32; 6];
    for _ in 0..500 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let index = (seed % 6) as usize;
        set.toggle(index);
        toggles[index] += 1;
    }
    for (index, count) in toggles.iter().enumerate() {
        let initially = index == 0;
        let expected = initially ^ (count % 2 == 1);
        assert_eq!(set.is_expanded(index), expected, "entry {index}");
    }
}

#[test]
fn test_collapsed_and_explicit_start() {
    assert_eq!(DisclosureSet::collapsed().expanded_count(), 0);
    let set = DisclosureSet::with_expanded([1, 3]);
    assert!(!set.is_expanded(0));
    assert!(set.is_expanded(1));
    assert!(set.is_expanded(3));
}

#[test]
fn test_panel_styles() {
    let set = DisclosureSet::new();
    let open = set.panel_style(0, 300);
    assert_eq!(open, PanelStyle::new(true, 300));
    assert_eq!(open.height, "auto");
    assert_eq!(open.opacity, "1");
    assert_eq!(open.aria_expanded(), "true");

    let closed = set.panel_style(1, 300);
    assert_eq!(closed.height, "0");
    assert_eq!(closed.opacity, "0");
    assert_eq!(closed.overflow, "hidden");
    assert_eq!(closed.aria_expanded(), "false");
    assert_eq!(
        closed.transition,
        "height 300ms ease-in-out, opacity 300ms ease-in-out"
    );
    assert_eq!(closed.properties()[0], ("height", "0"));
}

#[test]
fn test_page_ignores_out_of_range_entries() {
    let (page, _viewport) = headless_page();
    let mut p = page.borrow_mut();
    let entries = p.data().experience.len();
    assert_eq!(entries, 3);

    assert_eq!(p.toggle_experience(1), Some(true));
    assert!(p.is_expanded(1));
    assert_eq!(p.toggle_experience(entries), None);
    assert!(!p.is_expanded(entries));
    assert_eq!(p.experience_panel_style(1).height, "auto");
}
