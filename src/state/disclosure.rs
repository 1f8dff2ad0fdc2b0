//! Expand/collapse state for a list of entries (job history cards).

use std::collections::BTreeSet;

/// Indices of expanded entries. Entry 0 starts expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureSet {
    expanded: BTreeSet<usize>,
}

impl Default for DisclosureSet {
    fn default() -> Self {
        Self::new()
    }
}

impl DisclosureSet {
    pub fn new() -> Self {
        Self::with_expanded([0])
    }

    /// Everything collapsed.
    pub fn collapsed() -> Self {
        Self::with_expanded([])
    }

    pub fn with_expanded(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            expanded: indices.into_iter().collect(),
        }
    }

    /// Flip `index`. Returns the new state (true = expanded).
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.expanded.remove(&index) {
            false
        } else {
            self.expanded.insert(index);
            true
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    pub fn expanded(&self) -> impl Iterator<Item = usize> + '_ {
        self.expanded.iter().copied()
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    /// Inline style for the entry's collapsible panel.
    pub fn panel_style(&self, index: usize, transition_ms: u32) -> PanelStyle {
        PanelStyle::new(self.is_expanded(index), transition_ms)
    }
}

/// CSS applied to a disclosure panel.
///
/// Collapsed panels keep their content in the DOM with zero height so
/// testing and assistive tooling can still reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelStyle {
    pub expanded: bool,
    pub height: &'static str,
    pub opacity: &'static str,
    pub overflow: &'static str,
    pub transition: String,
}

impl PanelStyle {
    pub fn new(expanded: bool, transition_ms: u32) -> Self {
        Self {
            expanded,
            height: if expanded { "auto" } else { "0" },
            opacity: if expanded { "1" } else { "0" },
            overflow: "hidden",
            transition: format!("height {transition_ms}ms ease-in-out, opacity {transition_ms}ms ease-in-out"),
        }
    }

    /// `(property, value)` pairs for `CssStyleDeclaration::set_property`.
    pub fn properties(&self) -> [(&'static str, &str); 4] {
        [
            ("height", self.height),
            ("opacity", self.opacity),
            ("overflow", self.overflow),
            ("transition", self.transition.as_str()),
        ]
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }
}
