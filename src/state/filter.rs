//! Category selection over a static collection, and index tabs.
//!
//! The visible subset is always derived from `(active, items)` and never
//! stored.

use crate::types::Project;

/// Pseudo-category that shows every item.
pub const ALL: &str = "All";

/// Anything that belongs to exactly one gallery category
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for Project {
    fn category(&self) -> &str {
        &self.category
    }
}

/// `"All"` followed by each distinct category in first-seen order.
pub fn categories<T: Categorized>(items: &[T]) -> Vec<String> {
    let mut out = vec![ALL.to_string()];
    for item in items {
        let category = item.category();
        if !out.iter().any(|c| c == category) {
            out.push(category.to_string());
        }
    }
    out
}

/// Items shown for `active`, in collection order. Unknown categories yield
/// nothing.
pub fn visible<'a, T: Categorized>(items: &'a [T], active: &str) -> Vec<&'a T> {
    if active == ALL {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.category() == active).collect()
}

/// Badge count for a filter button.
pub fn count<T: Categorized>(items: &[T], category: &str) -> usize {
    if category == ALL {
        return items.len();
    }
    items.iter().filter(|item| item.category() == category).count()
}

/// Active gallery category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionFilter {
    active: String,
}

impl Default for SelectionFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionFilter {
    pub fn new() -> Self {
        Self {
            active: ALL.to_string(),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.active == category
    }

    /// Returns true if the selection changed.
    pub fn select(&mut self, category: &str) -> bool {
        if self.active == category {
            return false;
        }
        category.clone_into(&mut self.active);
        true
    }

    pub fn visible<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        visible(items, &self.active)
    }
}

/// Index-based tab selection (skills view)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSet {
    active: usize,
    len: usize,
}

impl TabSet {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Switch tabs. Out-of-range indices leave the selection alone.
    /// Returns true if the active tab changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.active {
            return false;
        }
        self.active = index;
        true
    }

    pub fn active_item<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagged(&'static str);

    impl Categorized for Tagged {
        fn category(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_count() {
        let items = [Tagged("a"), Tagged("b"), Tagged("a")];
        assert_eq!(count(&items, ALL), 3);
        assert_eq!(count(&items, "a"), 2);
        assert_eq!(count(&items, "zzz"), 0);
    }

    #[test]
    fn test_select_reports_change() {
        let mut filter = SelectionFilter::new();
        assert!(!filter.select(ALL));
        assert!(filter.select("a"));
        assert!(filter.is_active("a"));
    }

    #[test]
    fn test_tabs_ignore_out_of_range() {
        let mut tabs = TabSet::new(3);
        assert!(!tabs.select(3));
        assert_eq!(tabs.active(), 0);
        assert!(tabs.select(2));
        assert_eq!(tabs.active_item(&["x", "y", "z"]), Some(&"z"));
    }
}
