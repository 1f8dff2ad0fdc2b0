//! Project detail overlay: at most one inspected item at a time.
//!
//! While an item is selected the modal owns two global resources on the
//! viewport: the body scroll lock and a `keydown` listener. Both are taken
//! exactly once on the first `open` and released exactly once on `close`.

use crate::viewport::{KeyHandler, ListenerId, ViewportController};

/// Key that dismisses the modal
pub const ESCAPE_KEY: &str = "Escape";

/// Where a click inside the overlay landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the dialog
    Backdrop,
    /// The dialog itself; never closes
    Content,
}

/// Overlay state for one inspected item
#[derive(Debug)]
pub struct Modal<T> {
    selected: Option<T>,
    key_listener: Option<ListenerId>,
    scroll_locked: bool,
}

impl<T> Default for Modal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Modal<T> {
    pub fn new() -> Self {
        Self {
            selected: None,
            key_listener: None,
            scroll_locked: false,
        }
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Inspect `item`, replacing any item already shown.
    ///
    /// `on_key` is registered for the lifetime of the open modal and should
    /// route keys back to [`Modal::handle_key`]. When the modal is already
    /// open it is dropped unused and the existing listener stays.
    pub fn open<V>(&mut self, item: T, viewport: &mut V, on_key: KeyHandler)
    where
        V: ViewportController + ?Sized,
    {
        self.selected = Some(item);
        if !self.scroll_locked {
            viewport.lock_scroll();
            self.scroll_locked = true;
        }
        if self.key_listener.is_none() {
            self.key_listener = Some(viewport.on_key(on_key));
        }
    }

    /// Hide the modal and release its global resources. No-op when closed.
    /// Returns true if the modal was open.
    pub fn close<V>(&mut self, viewport: &mut V) -> bool
    where
        V: ViewportController + ?Sized,
    {
        let was_open = self.selected.take().is_some();
        if let Some(id) = self.key_listener.take() {
            viewport.off_key(id);
        }
        if self.scroll_locked {
            viewport.unlock_scroll();
            self.scroll_locked = false;
        }
        was_open
    }

    /// Escape closes. Returns true if the key closed the modal.
    pub fn handle_key<V>(&mut self, key: &str, viewport: &mut V) -> bool
    where
        V: ViewportController + ?Sized,
    {
        if key != ESCAPE_KEY || !self.is_open() {
            return false;
        }
        self.close(viewport)
    }

    /// Backdrop clicks close; content clicks are contained.
    pub fn handle_click<V>(&mut self, target: ClickTarget, viewport: &mut V) -> bool
    where
        V: ViewportController + ?Sized,
    {
        match target {
            ClickTarget::Backdrop => self.close(viewport),
            ClickTarget::Content => false,
        }
    }

    /// True while the modal still holds the scroll lock or a listener.
    pub fn holds_resources(&self) -> bool {
        self.scroll_locked || self.key_listener.is_some()
    }
}
