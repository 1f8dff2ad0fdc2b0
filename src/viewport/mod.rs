//! The page's global side-effect boundary.
//!
//! Everything that touches process-wide state (body scroll lock, document
//! `keydown`, window `scroll`, animation frames) goes through
//! [`ViewportController`], so the controllers can run without a DOM.
//!
//! - [`HeadlessViewport`]: native, records every call and lets callers
//!   dispatch key, scroll and frame events.
//! - `DomViewport` (wasm32 only, in `viewer`): the browser implementation.

mod headless;

use std::rc::Rc;

pub use headless::HeadlessViewport;

/// Handle returned when a listener is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u32);

/// Receives the `key` of every `keydown` while registered.
pub type KeyHandler = Rc<dyn Fn(&str)>;

/// Receives the current vertical scroll offset on every `scroll` event.
pub type ScrollHandler = Rc<dyn Fn(f64)>;

/// Runs once on the next animation frame.
pub type FrameCallback = Box<dyn FnOnce()>;

/// Injected capability over document-level side effects.
///
/// Handlers may call back into the same controller (e.g. an Escape handler
/// that unregisters itself), so implementations must not hold internal
/// borrows while invoking them.
pub trait ViewportController {
    /// Suppress background scrolling of the document.
    fn lock_scroll(&mut self);

    /// Restore background scrolling.
    fn unlock_scroll(&mut self);

    fn on_key(&mut self, handler: KeyHandler) -> ListenerId;

    /// Returns false if `id` was not registered.
    fn off_key(&mut self, id: ListenerId) -> bool;

    fn on_scroll(&mut self, handler: ScrollHandler) -> ListenerId;

    /// Returns false if `id` was not registered.
    fn off_scroll(&mut self, id: ListenerId) -> bool;

    /// Schedule `callback` for the next animation frame.
    ///
    /// Returns false if no frame could be requested; `callback` is then
    /// dropped without running and the caller does the work itself.
    fn request_frame(&mut self, callback: FrameCallback) -> bool;

    /// Current vertical scroll offset of the document (px).
    fn scroll_offset(&self) -> f64;

    /// Scroll the document so that `top` is at the viewport top.
    fn scroll_to(&mut self, top: f64);
}
