//! The page binding.
//!
//! [`PortfolioPage`] holds every controller and runs on any
//! [`ViewportController`](crate::viewport::ViewportController). On wasm32 the
//! exported `PortfolioView` wraps one over the browser viewport:
//! - measures section geometry from the DOM
//! - attaches the passive `scroll` listener on mount, detaches on unmount
//! - rotates the hero role on an interval
//! - runs the simulated contact submission as a Promise
//!
//! Every mutating call ends by invoking the render callback, if one is set.

mod events;
mod page;
mod scroll;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::DomViewport;
pub use page::{PageHandle, PortfolioPage, RenderHook};

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Object, Promise, Reflect};
#[cfg(target_arch = "wasm32")]
use serde::Serialize;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;
#[cfg(target_arch = "wasm32")]
use web_sys::MouseEvent;

#[cfg(target_arch = "wasm32")]
use crate::config::SiteConfig;
#[cfg(target_arch = "wasm32")]
use crate::error::PortfolioError;
#[cfg(target_arch = "wasm32")]
use crate::layout::{Section, SectionLayout};
#[cfg(target_arch = "wasm32")]
use crate::state::{ClickTarget, ContactSubmitter, SimulatedSubmitter, SubmitStatus};
#[cfg(target_arch = "wasm32")]
use crate::types::{Field, PortfolioData};

#[cfg(target_arch = "wasm32")]
type DomPage = PortfolioPage<DomViewport>;

#[cfg(target_arch = "wasm32")]
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

#[cfg(target_arch = "wasm32")]
fn clamp_ms(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// Resolve after `ms` milliseconds (immediately when no window is available).
#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u32) -> Result<(), JsValue> {
    let promise = Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().is_some_and(|window| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, clamp_ms(ms))
                .is_ok()
        });
        if !scheduled {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    JsFuture::from(promise).await.map(|_| ())
}

/// Portfolio page view-state, exported to JavaScript.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct PortfolioView {
    page: PageHandle<DomViewport>,
    viewport: DomViewport,
    role_timer: Option<i32>,
    role_closure: Option<Closure<dyn FnMut()>>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl PortfolioView {
    /// Create a view from an optional config object and optional content JSON.
    /// Without content the built-in feed is used.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, content: Option<String>) -> Result<PortfolioView, JsValue> {
        let config = SiteConfig::from_js(config)?;
        crate::logging::init(config.log_level_filter().unwrap_or(log::LevelFilter::Info));

        let data = match content {
            Some(json) => PortfolioData::from_json(&json)?,
            None => PortfolioData::builtin()?,
        };
        let viewport = DomViewport::new()?;
        let layout = Self::initial_layout(&viewport, &data);
        let page = PortfolioPage::new(data, config, viewport.clone(), layout)?.into_handle();
        log::info!("portfolio view created (folio {})", env!("CARGO_PKG_VERSION"));
        Ok(PortfolioView {
            page,
            viewport,
            role_timer: None,
            role_closure: None,
        })
    }

    /// Re-read section geometry from the DOM and attach global listeners.
    #[wasm_bindgen]
    pub fn mount(&mut self) {
        self.remeasure();
        DomPage::mount(&self.page);
        self.start_role_rotation();
        self.render();
    }

    /// Detach every global listener, release the scroll lock and stop the
    /// role rotation.
    #[wasm_bindgen]
    pub fn unmount(&mut self) {
        self.stop_role_rotation();
        self.page.borrow_mut().unmount();
    }

    #[wasm_bindgen]
    pub fn is_mounted(&self) -> bool {
        self.page.borrow().is_mounted()
    }

    /// Re-read section geometry after a layout change (fonts, images, resize).
    #[wasm_bindgen]
    pub fn remeasure(&mut self) {
        let mut p = self.page.borrow_mut();
        let mut layout = p.scroll_spy().layout().clone();
        self.viewport.remeasure(&mut layout);
        p.set_layout(layout);
    }

    /// Register a JS callback invoked whenever the page needs a re-render.
    #[wasm_bindgen]
    pub fn set_render_callback(&mut self, callback: Option<Function>) {
        let hook = callback.map(|f| {
            Rc::new(move || {
                let _ = f.call0(&JsValue::NULL);
            }) as RenderHook
        });
        self.page.borrow_mut().set_render_hook(hook);
    }

    // ------------------------------------------------------------------
    // Content
    // ------------------------------------------------------------------

    /// The full content feed as a JS object.
    #[wasm_bindgen]
    pub fn content(&self) -> Result<JsValue, JsValue> {
        to_js(self.page.borrow().data())
    }

    #[wasm_bindgen]
    pub fn project_stats(&self) -> Result<JsValue, JsValue> {
        to_js(&self.page.borrow().project_stats())
    }

    // ------------------------------------------------------------------
    // Header and navigation
    // ------------------------------------------------------------------

    #[wasm_bindgen]
    pub fn active_section(&self) -> String {
        self.page.borrow().active_section().to_string()
    }

    #[wasm_bindgen]
    pub fn is_scrolled(&self) -> bool {
        self.page.borrow().is_scrolled()
    }

    #[wasm_bindgen]
    pub fn is_menu_open(&self) -> bool {
        self.page.borrow().is_menu_open()
    }

    #[wasm_bindgen]
    pub fn toggle_menu(&mut self) -> bool {
        let open = self.page.borrow_mut().toggle_menu();
        self.render();
        open
    }

    /// Smooth-scroll to the section behind `href`. Returns the target offset.
    #[wasm_bindgen]
    pub fn navigate(&mut self, href: &str) -> Option<f64> {
        let top = DomPage::navigate(&self.page, href);
        self.render();
        top
    }

    // ------------------------------------------------------------------
    // Experience
    // ------------------------------------------------------------------

    #[wasm_bindgen]
    pub fn toggle_experience(&mut self, index: usize) -> Option<bool> {
        let expanded = self.page.borrow_mut().toggle_experience(index);
        self.render();
        expanded
    }

    #[wasm_bindgen]
    pub fn is_expanded(&self, index: usize) -> bool {
        self.page.borrow().is_expanded(index)
    }

    /// Inline style properties for the panel of entry `index`.
    #[wasm_bindgen]
    pub fn experience_panel_style(&self, index: usize) -> JsValue {
        let style = self.page.borrow().experience_panel_style(index);
        let obj = Object::new();
        for (property, value) in style.properties() {
            let _ = Reflect::set(&obj, &property.into(), &value.into());
        }
        let _ = Reflect::set(
            &obj,
            &"aria-expanded".into(),
            &style.aria_expanded().into(),
        );
        obj.into()
    }

    // ------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------

    #[wasm_bindgen]
    pub fn project_categories(&self) -> Vec<String> {
        self.page.borrow().project_categories()
    }

    #[wasm_bindgen]
    pub fn category_count(&self, category: &str) -> usize {
        self.page.borrow().category_count(category)
    }

    #[wasm_bindgen]
    pub fn active_category(&self) -> String {
        self.page.borrow().active_category().to_string()
    }

    #[wasm_bindgen]
    pub fn select_category(&mut self, category: &str) -> bool {
        let changed = self.page.borrow_mut().select_category(category);
        self.render();
        changed
    }

    #[wasm_bindgen]
    pub fn visible_projects(&self) -> Result<JsValue, JsValue> {
        to_js(&self.page.borrow().visible_projects())
    }

    #[wasm_bindgen]
    pub fn open_project(&mut self, id: &str) -> bool {
        let opened = DomPage::open_project(&self.page, id);
        self.render();
        opened
    }

    #[wasm_bindgen]
    pub fn close_project(&mut self) -> bool {
        let closed = self.page.borrow_mut().close_project();
        self.render();
        closed
    }

    /// Click handler for the modal overlay. Only a click whose target is the
    /// overlay itself closes the modal.
    #[wasm_bindgen]
    pub fn on_backdrop_click(&mut self, event: &MouseEvent) -> bool {
        let on_backdrop = match (event.target(), event.current_target()) {
            (Some(target), Some(current)) => Object::is(&target, &current),
            _ => false,
        };
        let target = if on_backdrop {
            ClickTarget::Backdrop
        } else {
            ClickTarget::Content
        };
        let closed = self.page.borrow_mut().overlay_click(target);
        self.render();
        closed
    }

    #[wasm_bindgen]
    pub fn selected_project(&self) -> Result<JsValue, JsValue> {
        to_js(&self.page.borrow().selected_project())
    }

    // ------------------------------------------------------------------
    // Skills
    // ------------------------------------------------------------------

    #[wasm_bindgen]
    pub fn select_skill_tab(&mut self, index: usize) -> bool {
        let changed = self.page.borrow_mut().select_skill_tab(index);
        self.render();
        changed
    }

    #[wasm_bindgen]
    pub fn active_skill_tab(&self) -> usize {
        self.page.borrow().active_skill_tab()
    }

    /// `{name, level, tier, dots}` for every skill in the active tab.
    #[wasm_bindgen]
    pub fn skill_ratings(&self) -> Result<JsValue, JsValue> {
        to_js(&self.page.borrow().skill_ratings())
    }

    // ------------------------------------------------------------------
    // Contact form
    // ------------------------------------------------------------------

    /// Edit a field (`name`, `email`, `subject`, `message`). Returns false
    /// for an unknown field name.
    #[wasm_bindgen]
    pub fn set_contact_field(&mut self, field: &str, value: &str) -> bool {
        let Some(field) = Field::parse(field) else {
            return false;
        };
        self.page.borrow_mut().set_contact_field(field, value);
        self.render();
        true
    }

    #[wasm_bindgen]
    pub fn contact_form(&self) -> Result<JsValue, JsValue> {
        to_js(self.page.borrow().contact().form())
    }

    /// Inline errors keyed by field name.
    #[wasm_bindgen]
    pub fn contact_errors(&self) -> Result<JsValue, JsValue> {
        to_js(self.page.borrow().contact().errors())
    }

    #[wasm_bindgen]
    pub fn contact_status(&self) -> Result<JsValue, JsValue> {
        to_js(&self.page.borrow().contact().status())
    }

    #[wasm_bindgen]
    pub fn message_remaining(&self) -> usize {
        self.page.borrow().contact().message_remaining()
    }

    /// Validate and submit the form. Resolves with the resulting status
    /// (`"idle"` when validation failed, `"submitted"` on success). The
    /// success banner is dismissed automatically after the configured delay.
    #[wasm_bindgen]
    pub fn submit_contact(&self) -> Promise {
        let page = Rc::clone(&self.page);
        wasm_bindgen_futures::future_to_promise(async move {
            let (form, delay_ms, banner_ms, hook) = {
                let mut p = page.borrow_mut();
                p.needs_render = true;
                let hook = p.render_hook.clone();
                let begun = p.contact_mut().begin_submit()?;
                match begun {
                    Ok(form) => (
                        form,
                        p.config.submit_delay_ms,
                        p.config.success_banner_ms,
                        hook,
                    ),
                    Err(_) => {
                        drop(p);
                        DomPage::notify(hook);
                        return to_js(&SubmitStatus::Idle);
                    }
                }
            };
            DomPage::notify(hook);

            // A failed timer still has to leave the Submitting state
            let outcome = match sleep_ms(delay_ms).await {
                Ok(()) => SimulatedSubmitter.submit(&form),
                Err(e) => Err(PortfolioError::Submit(format!("submit timer failed: {e:?}"))),
            };
            let (status, hook) = {
                let mut p = page.borrow_mut();
                p.contact_mut().finish_submit(outcome);
                p.needs_render = true;
                (p.contact().status(), p.render_hook.clone())
            };
            DomPage::notify(hook);

            if status == SubmitStatus::Submitted {
                let weak = DomPage::weak(&page);
                wasm_bindgen_futures::spawn_local(async move {
                    if sleep_ms(banner_ms).await.is_err() {
                        return;
                    }
                    let Some(page) = weak.upgrade() else {
                        return;
                    };
                    let hook = {
                        let mut p = page.borrow_mut();
                        p.contact_mut().dismiss_success();
                        p.needs_render = true;
                        p.render_hook.clone()
                    };
                    DomPage::notify(hook);
                });
            }
            to_js(&status)
        })
    }

    // ------------------------------------------------------------------
    // Hero
    // ------------------------------------------------------------------

    #[wasm_bindgen]
    pub fn current_role(&self) -> Option<String> {
        self.page.borrow().current_role().map(str::to_string)
    }

    #[wasm_bindgen]
    pub fn advance_role(&mut self) -> Option<String> {
        let role = self.page.borrow_mut().advance_role().map(str::to_string);
        self.render();
        role
    }
}

#[cfg(target_arch = "wasm32")]
impl PortfolioView {
    /// Geometry for the navigation targets. Sections not in the DOM yet get
    /// zero height and are filled in by the remeasure on mount.
    fn initial_layout(viewport: &DomViewport, data: &PortfolioData) -> SectionLayout {
        let ids = data.section_ids();
        let layout = viewport.measure_sections(ids.iter().copied());
        if layout.len() == ids.len() {
            return layout;
        }
        SectionLayout::new(
            ids.iter()
                .enumerate()
                .map(|(order, id)| Section::new(*id, order, 0.0, 0.0))
                .collect(),
        )
    }

    /// Invoke the render callback if the page is dirty.
    fn render(&self) {
        let hook = {
            let mut p = self.page.borrow_mut();
            if p.take_needs_render() {
                p.render_hook.clone()
            } else {
                None
            }
        };
        DomPage::notify(hook);
    }

    fn start_role_rotation(&mut self) {
        if self.role_timer.is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let interval = {
            let p = self.page.borrow();
            if p.data().roles.len() < 2 {
                return;
            }
            p.config().role_interval_ms
        };
        if self.role_closure.is_none() {
            let weak = DomPage::weak(&self.page);
            self.role_closure = Some(Closure::wrap(Box::new(move || {
                let Some(page) = weak.upgrade() else {
                    return;
                };
                let hook = {
                    let mut p = page.borrow_mut();
                    p.advance_role();
                    p.render_hook.clone()
                };
                DomPage::notify(hook);
            }) as Box<dyn FnMut()>));
        }
        let Some(callback) = self.role_closure.as_ref() else {
            return;
        };
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            clamp_ms(interval),
        ) {
            Ok(id) => self.role_timer = Some(id),
            Err(e) => log::warn!("role rotation not started: {e:?}"),
        }
    }

    fn stop_role_rotation(&mut self) {
        if let Some(id) = self.role_timer.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(id);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for PortfolioView {
    fn drop(&mut self) {
        self.stop_role_rotation();
        self.page.borrow_mut().unmount();
    }
}
