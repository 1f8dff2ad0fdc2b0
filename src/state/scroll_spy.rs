//! Scroll offset to active navigation section.
//!
//! `focus = offset + header_offset`; the first section (navigation order)
//! whose `[top, top + height)` contains the focus point becomes active. When nothing
//! matches the previous section stays active.

use crate::error::{PortfolioError, Result};
use crate::layout::SectionLayout;

/// Coalesces bursts of events into at most one pending frame.
///
/// `record` keeps only the latest value and reports whether the caller has
/// to request a frame; `take` hands the latest value to the frame callback.
#[derive(Debug, Clone, Default)]
pub struct FrameThrottle<T> {
    latest: Option<T>,
    frame_requested: bool,
}

impl<T> FrameThrottle<T> {
    pub fn new() -> Self {
        Self {
            latest: None,
            frame_requested: false,
        }
    }

    /// Store `value`. Returns true if no frame is pending yet.
    pub fn record(&mut self, value: T) -> bool {
        self.latest = Some(value);
        if self.frame_requested {
            return false;
        }
        self.frame_requested = true;
        true
    }

    /// Consume the latest value and clear the pending frame.
    pub fn take(&mut self) -> Option<T> {
        self.frame_requested = false;
        self.latest.take()
    }

    pub fn is_pending(&self) -> bool {
        self.frame_requested
    }

    /// Forget any pending value (unmount).
    pub fn reset(&mut self) {
        self.latest = None;
        self.frame_requested = false;
    }
}

/// Active-section tracker for the navigation bar
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    layout: SectionLayout,
    header_offset: f64,
    current: String,
    throttle: FrameThrottle<f64>,
}

impl ScrollSpy {
    /// The first section starts out active.
    ///
    /// # Errors
    /// Returns [`PortfolioError::NoSections`] for an empty layout.
    pub fn new(layout: SectionLayout, header_offset: f64) -> Result<Self> {
        let current = layout.first().ok_or(PortfolioError::NoSections)?.id.clone();
        Ok(Self {
            layout,
            header_offset,
            current,
            throttle: FrameThrottle::new(),
        })
    }

    /// Id of the active section.
    pub fn active(&self) -> &str {
        &self.current
    }

    pub fn header_offset(&self) -> f64 {
        self.header_offset
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    /// Swap in re-measured geometry. The active section is kept as-is until
    /// the next update.
    pub fn set_layout(&mut self, layout: SectionLayout) {
        if !layout.is_empty() {
            self.layout = layout;
        }
    }

    pub fn layout_mut(&mut self) -> &mut SectionLayout {
        &mut self.layout
    }

    /// Recompute the active section for `scroll_offset`. Returns true if it changed.
    pub fn update(&mut self, scroll_offset: f64) -> bool {
        let focus = scroll_offset + self.header_offset;
        let Some(section) = self.layout.section_at(focus) else {
            return false;
        };
        if section.id == self.current {
            return false;
        }
        log::debug!("active section {} -> {}", self.current, section.id);
        self.current.clone_from(&section.id);
        true
    }

    /// Record a scroll event. Returns true if the caller must request a frame.
    pub fn schedule(&mut self, scroll_offset: f64) -> bool {
        self.throttle.record(scroll_offset)
    }

    /// Apply the latest scheduled offset (frame callback). Returns true if the
    /// active section changed.
    pub fn flush(&mut self) -> bool {
        match self.throttle.take() {
            Some(offset) => self.update(offset),
            None => false,
        }
    }

    pub fn has_pending_frame(&self) -> bool {
        self.throttle.is_pending()
    }

    pub fn cancel_pending(&mut self) {
        self.throttle.reset();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::layout::Section;

    #[test]
    fn test_throttle_coalesces() {
        let mut throttle = FrameThrottle::new();
        assert!(throttle.record(1.0));
        assert!(!throttle.record(2.0));
        assert!(!throttle.record(3.0));
        assert_eq!(throttle.take(), Some(3.0));
        assert_eq!(throttle.take(), None);
        assert!(throttle.record(4.0));
    }

    #[test]
    fn test_empty_layout_rejected() {
        let err = ScrollSpy::new(SectionLayout::default(), 100.0).unwrap_err();
        assert!(matches!(err, PortfolioError::NoSections));
    }

    #[test]
    fn test_set_layout_ignores_empty() {
        let layout = SectionLayout::new(vec![Section::new("home", 0, 0.0, 100.0)]);
        let mut spy = ScrollSpy::new(layout, 0.0).unwrap();
        spy.set_layout(SectionLayout::default());
        assert_eq!(spy.layout().len(), 1);
    }
}
