//! Fixed header chrome: solid-on-scroll flag, mobile menu, anchor navigation.

use crate::layout::{Section, SectionLayout};
use crate::types::section_id_of;

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderState {
    scrolled: bool,
    menu_open: bool,
    threshold: f64,
}

impl HeaderState {
    pub fn new(threshold: f64) -> Self {
        Self {
            scrolled: false,
            menu_open: false,
            threshold,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Returns true if the scrolled flag changed.
    pub fn update_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Resolve a `#section` href against `layout`. The mobile menu closes
    /// whether or not the target exists.
    pub fn navigate<'a>(&mut self, href: &str, layout: &'a SectionLayout) -> Option<&'a Section> {
        self.menu_open = false;
        let id = section_id_of(href)?;
        layout.get(id)
    }
}
