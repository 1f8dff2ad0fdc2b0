//! Native viewport used by the CLI and tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{FrameCallback, KeyHandler, ListenerId, ScrollHandler, ViewportController};

#[derive(Default)]
struct Inner {
    offset: f64,
    locked: bool,
    lock_calls: u32,
    unlock_calls: u32,
    next_id: u32,
    key_handlers: BTreeMap<ListenerId, KeyHandler>,
    scroll_handlers: BTreeMap<ListenerId, ScrollHandler>,
    frames: Vec<FrameCallback>,
    refuse_frames: bool,
}

impl Inner {
    fn next_id(&mut self) -> ListenerId {
        self.next_id += 1;
        ListenerId(self.next_id)
    }
}

/// In-memory [`ViewportController`].
///
/// Clones share state, so a test can keep one handle for dispatching events
/// while the page owns another.
#[derive(Clone, Default)]
pub struct HeadlessViewport {
    inner: Rc<RefCell<Inner>>,
}

impl HeadlessViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a `keydown` to every registered key handler.
    pub fn press_key(&self, key: &str) {
        let handlers: Vec<KeyHandler> = self.inner.borrow().key_handlers.values().cloned().collect();
        for handler in handlers {
            handler(key);
        }
    }

    /// Move the document to `offset` and fire `scroll` at every listener,
    /// the way user scrolling does.
    pub fn scroll_by_user(&self, offset: f64) {
        self.inner.borrow_mut().offset = offset;
        let handlers: Vec<ScrollHandler> =
            self.inner.borrow().scroll_handlers.values().cloned().collect();
        for handler in handlers {
            handler(offset);
        }
    }

    /// Run all frame callbacks queued so far. Returns how many ran.
    pub fn run_frames(&self) -> usize {
        let frames = std::mem::take(&mut self.inner.borrow_mut().frames);
        let count = frames.len();
        for frame in frames {
            frame();
        }
        count
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.inner.borrow().locked
    }

    pub fn lock_calls(&self) -> u32 {
        self.inner.borrow().lock_calls
    }

    pub fn unlock_calls(&self) -> u32 {
        self.inner.borrow().unlock_calls
    }

    pub fn key_listener_count(&self) -> usize {
        self.inner.borrow().key_handlers.len()
    }

    pub fn scroll_listener_count(&self) -> usize {
        self.inner.borrow().scroll_handlers.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.inner.borrow().frames.len()
    }

    /// Make `request_frame` fail, like a browser that rejects
    /// `requestAnimationFrame`.
    pub fn set_refuse_frames(&self, refuse: bool) {
        self.inner.borrow_mut().refuse_frames = refuse;
    }
}

impl ViewportController for HeadlessViewport {
    fn lock_scroll(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.locked = true;
        inner.lock_calls += 1;
    }

    fn unlock_scroll(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.locked = false;
        inner.unlock_calls += 1;
    }

    fn on_key(&mut self, handler: KeyHandler) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id();
        inner.key_handlers.insert(id, handler);
        id
    }

    fn off_key(&mut self, id: ListenerId) -> bool {
        self.inner.borrow_mut().key_handlers.remove(&id).is_some()
    }

    fn on_scroll(&mut self, handler: ScrollHandler) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id();
        inner.scroll_handlers.insert(id, handler);
        id
    }

    fn off_scroll(&mut self, id: ListenerId) -> bool {
        self.inner.borrow_mut().scroll_handlers.remove(&id).is_some()
    }

    fn request_frame(&mut self, callback: FrameCallback) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.refuse_frames {
            return false;
        }
        inner.frames.push(callback);
        true
    }

    fn scroll_offset(&self) -> f64 {
        self.inner.borrow().offset
    }

    fn scroll_to(&mut self, top: f64) {
        self.scroll_by_user(top);
    }
}
