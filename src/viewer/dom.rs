//! Browser implementation of [`ViewportController`].
//!
//! Listeners are attached to `document` (`keydown`) and `window` (`scroll`,
//! passive). The scroll lock toggles `overflow: hidden` on `<body>` and
//! restores whatever value was there before.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Event, KeyboardEvent, ScrollBehavior, ScrollToOptions,
    Window,
};

use crate::error::{PortfolioError, Result};
use crate::layout::SectionLayout;
use crate::viewport::{FrameCallback, KeyHandler, ListenerId, ScrollHandler, ViewportController};

struct DomInner {
    window: Window,
    document: Document,
    next_id: u32,
    key_closures: BTreeMap<ListenerId, Closure<dyn FnMut(KeyboardEvent)>>,
    scroll_closures: BTreeMap<ListenerId, Closure<dyn FnMut(Event)>>,
    // A listener can be removed from inside its own invocation (Escape
    // closing the modal); its closure must outlive that call.
    retired_keys: Vec<Closure<dyn FnMut(KeyboardEvent)>>,
    retired_scrolls: Vec<Closure<dyn FnMut(Event)>>,
    saved_overflow: Option<String>,
}

impl DomInner {
    fn next_id(&mut self) -> ListenerId {
        self.next_id += 1;
        ListenerId(self.next_id)
    }

    fn drop_retired(&mut self) {
        self.retired_keys.clear();
        self.retired_scrolls.clear();
    }
}

#[derive(Clone)]
pub struct DomViewport {
    inner: Rc<RefCell<DomInner>>,
}

impl DomViewport {
    /// # Errors
    /// Returns [`PortfolioError::Dom`] outside a browser window.
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| PortfolioError::Dom("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| PortfolioError::Dom("no document".into()))?;
        Ok(Self {
            inner: Rc::new(RefCell::new(DomInner {
                window,
                document,
                next_id: 0,
                key_closures: BTreeMap::new(),
                scroll_closures: BTreeMap::new(),
                retired_keys: Vec::new(),
                retired_scrolls: Vec::new(),
                saved_overflow: None,
            })),
        })
    }

    /// Measure the elements with the given ids (`offsetTop`/`offsetHeight`).
    pub fn measure_sections<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> SectionLayout {
        let inner = self.inner.borrow();
        SectionLayout::measure(ids, |id| measure_element(&inner.document, id))
    }

    pub fn remeasure(&self, layout: &mut SectionLayout) {
        let inner = self.inner.borrow();
        layout.remeasure(|id| measure_element(&inner.document, id));
    }
}

fn measure_element(document: &Document, id: &str) -> Option<(f64, f64)> {
    let element = document
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    Some((
        f64::from(element.offset_top()),
        f64::from(element.offset_height()),
    ))
}

impl ViewportController for DomViewport {
    fn lock_scroll(&mut self) {
        let mut inner = self.inner.borrow_mut();
        let Some(body) = inner.document.body() else {
            return;
        };
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        let _ = style.set_property("overflow", "hidden");
        inner.saved_overflow = Some(previous);
    }

    fn unlock_scroll(&mut self) {
        let mut inner = self.inner.borrow_mut();
        let previous = inner.saved_overflow.take().unwrap_or_default();
        let Some(body) = inner.document.body() else {
            return;
        };
        let style = body.style();
        if previous.is_empty() {
            let _ = style.remove_property("overflow");
        } else {
            let _ = style.set_property("overflow", &previous);
        }
    }

    fn on_key(&mut self, handler: KeyHandler) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        inner.drop_retired();
        let id = inner.next_id();
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            handler(&event.key());
        }) as Box<dyn FnMut(KeyboardEvent)>);
        if let Err(e) = inner
            .document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        {
            log::warn!("keydown listener not attached: {e:?}");
        }
        inner.key_closures.insert(id, closure);
        id
    }

    fn off_key(&mut self, id: ListenerId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let Some(closure) = inner.key_closures.remove(&id) else {
            return false;
        };
        let _ = inner
            .document
            .remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        inner.retired_keys.push(closure);
        true
    }

    fn on_scroll(&mut self, handler: ScrollHandler) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        inner.drop_retired();
        let id = inner.next_id();
        let window = inner.window.clone();
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            handler(window.scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(e) = inner
            .window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                closure.as_ref().unchecked_ref(),
                &options,
            )
        {
            log::warn!("scroll listener not attached: {e:?}");
        }
        inner.scroll_closures.insert(id, closure);
        id
    }

    fn off_scroll(&mut self, id: ListenerId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let Some(closure) = inner.scroll_closures.remove(&id) else {
            return false;
        };
        let _ = inner
            .window
            .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        inner.retired_scrolls.push(closure);
        true
    }

    fn request_frame(&mut self, callback: FrameCallback) -> bool {
        let inner = self.inner.borrow();
        let frame = Closure::once_into_js(move || callback());
        match inner.window.request_animation_frame(frame.unchecked_ref()) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {e:?}");
                false
            }
        }
    }

    fn scroll_offset(&self) -> f64 {
        self.inner.borrow().window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&mut self, top: f64) {
        let window = self.inner.borrow().window.clone();
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
