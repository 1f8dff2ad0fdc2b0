//! Scroll handling for `PortfolioPage`.
//!
//! Every `scroll` event updates the header flag immediately and records the
//! offset for the scroll spy; the spy itself recomputes at most once per
//! animation frame. If no frame can be requested the spy updates in place,
//! so the throttle never stays pending.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::page::{PageHandle, PortfolioPage};
use crate::viewport::{ScrollHandler, ViewportController};

impl<V> PortfolioPage<V>
where
    V: ViewportController + Clone + 'static,
{
    pub(crate) fn scroll_handler(weak: Weak<RefCell<Self>>) -> ScrollHandler {
        Rc::new(move |offset: f64| {
            if let Some(page) = weak.upgrade() {
                Self::handle_scroll(&page, offset);
            }
        })
    }

    pub(crate) fn handle_scroll(page: &PageHandle<V>, offset: f64) {
        let hook = {
            let mut p = page.borrow_mut();
            let p = &mut *p;
            let mut changed = p.header.update_scroll(offset);
            if p.scroll_spy.schedule(offset) {
                let weak = Self::weak(page);
                let scheduled = p.viewport.request_frame(Box::new(move || {
                    if let Some(page) = weak.upgrade() {
                        Self::handle_frame(&page);
                    }
                }));
                if !scheduled {
                    changed |= p.scroll_spy.flush();
                }
            }
            if !changed {
                return;
            }
            p.needs_render = true;
            p.render_hook.clone()
        };
        Self::notify(hook);
    }

    pub(crate) fn handle_frame(page: &PageHandle<V>) {
        let hook = {
            let mut p = page.borrow_mut();
            if !p.scroll_spy.flush() {
                return;
            }
            p.needs_render = true;
            p.render_hook.clone()
        };
        Self::notify(hook);
    }
}
