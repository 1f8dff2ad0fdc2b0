//! The page: every controller plus the viewport they share.
//!
//! `PortfolioPage` is platform-independent. The wasm viewer wraps one over a
//! `DomViewport`; the CLI and tests drive one over a `HeadlessViewport`.
//!
//! Callbacks registered on the viewport hold a `Weak` handle to the page and
//! borrow it only for the duration of one event. Render notifications are
//! taken out under the borrow and invoked after it is released.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::SiteConfig;
use crate::content::ProjectStats;
use crate::error::Result;
use crate::layout::SectionLayout;
use crate::state::{
    filter, ClickTarget, ContactState, ContactSubmitter, DisclosureSet, HeaderState, Modal,
    PanelStyle, RoleCycle, ScrollSpy, SelectionFilter, SubmitStatus, TabSet,
};
use crate::types::{Field, PortfolioData, Project, Skill, SkillCategory, SkillRating};
use crate::viewport::{KeyHandler, ListenerId, ViewportController};

/// Shared handle used by viewport callbacks.
pub type PageHandle<V> = Rc<RefCell<PortfolioPage<V>>>;

/// Called after a callback-driven state change that needs a re-render.
pub type RenderHook = Rc<dyn Fn()>;

pub struct PortfolioPage<V: ViewportController> {
    pub(crate) data: PortfolioData,
    pub(crate) config: SiteConfig,
    pub(crate) viewport: V,
    pub(crate) scroll_spy: ScrollSpy,
    pub(crate) scroll_listener: Option<ListenerId>,
    pub(crate) header: HeaderState,
    pub(crate) experience: DisclosureSet,
    pub(crate) project_filter: SelectionFilter,
    pub(crate) skill_tabs: TabSet,
    pub(crate) project_modal: Modal<Project>,
    pub(crate) contact: ContactState,
    pub(crate) roles: RoleCycle,
    pub(crate) needs_render: bool,
    pub(crate) render_hook: Option<RenderHook>,
}

impl<V> PortfolioPage<V>
where
    V: ViewportController + Clone + 'static,
{
    /// Build a page over measured section geometry.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or `layout` is empty.
    pub fn new(
        data: PortfolioData,
        config: SiteConfig,
        viewport: V,
        layout: SectionLayout,
    ) -> Result<Self> {
        config.validate()?;
        let scroll_spy = ScrollSpy::new(layout, config.header_offset)?;
        let header = HeaderState::new(config.scrolled_threshold);
        let skill_tabs = TabSet::new(data.skills.len());
        let contact = ContactState::new(config.message_max_len);
        let roles = RoleCycle::new(data.roles.clone());
        Ok(Self {
            data,
            config,
            viewport,
            scroll_spy,
            scroll_listener: None,
            header,
            experience: DisclosureSet::new(),
            project_filter: SelectionFilter::new(),
            skill_tabs,
            project_modal: Modal::new(),
            contact,
            roles,
            needs_render: true,
            render_hook: None,
        })
    }

    pub fn into_handle(self) -> PageHandle<V> {
        Rc::new(RefCell::new(self))
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Attach the viewport `scroll` listener. Idempotent.
    pub fn mount(page: &PageHandle<V>) {
        let weak = Rc::downgrade(page);
        let mut p = page.borrow_mut();
        if p.scroll_listener.is_some() {
            return;
        }
        let id = p.viewport.on_scroll(Self::scroll_handler(weak));
        p.scroll_listener = Some(id);
        let offset = p.viewport.scroll_offset();
        p.header.update_scroll(offset);
        p.scroll_spy.update(offset);
        p.needs_render = true;
        log::debug!("page mounted (scroll listener {id:?})");
    }

    /// Detach every global listener this page registered and release the
    /// scroll lock. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if let Some(id) = self.scroll_listener.take() {
            self.viewport.off_scroll(id);
            log::debug!("page unmounted (scroll listener {id:?})");
        }
        self.scroll_spy.cancel_pending();
        self.project_modal.close(&mut self.viewport);
    }

    pub fn is_mounted(&self) -> bool {
        self.scroll_listener.is_some()
    }

    pub fn set_render_hook(&mut self, hook: Option<RenderHook>) {
        self.render_hook = hook;
    }

    /// Returns and clears the dirty flag.
    pub fn take_needs_render(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }

    pub(crate) fn notify(hook: Option<RenderHook>) {
        if let Some(hook) = hook {
            hook();
        }
    }

    pub(crate) fn weak(page: &PageHandle<V>) -> Weak<RefCell<Self>> {
        Rc::downgrade(page)
    }

    // ------------------------------------------------------------------
    // Content
    // ------------------------------------------------------------------

    pub fn data(&self) -> &PortfolioData {
        &self.data
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn project_stats(&self) -> ProjectStats {
        self.data.project_stats()
    }

    // ------------------------------------------------------------------
    // Header and scroll spy
    // ------------------------------------------------------------------

    pub fn active_section(&self) -> &str {
        self.scroll_spy.active()
    }

    pub fn scroll_spy(&self) -> &ScrollSpy {
        &self.scroll_spy
    }

    /// Replace section geometry after a layout change.
    pub fn set_layout(&mut self, layout: SectionLayout) {
        self.scroll_spy.set_layout(layout);
    }

    pub fn is_scrolled(&self) -> bool {
        self.header.is_scrolled()
    }

    pub fn is_menu_open(&self) -> bool {
        self.header.is_menu_open()
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.needs_render = true;
        self.header.toggle_menu()
    }

    /// Click on a navigation link: close the menu and scroll to the target.
    /// Returns the target's top offset, or `None` for an unknown href.
    pub fn navigate(page: &PageHandle<V>, href: &str) -> Option<f64> {
        let (top, mut viewport) = {
            let mut p = page.borrow_mut();
            let p = &mut *p;
            p.needs_render = true;
            let top = p.header.navigate(href, p.scroll_spy.layout())?.top;
            (top, p.viewport.clone())
        };
        // Scrolling may dispatch scroll events synchronously; the page must
        // not be borrowed here.
        viewport.scroll_to(top);
        Some(top)
    }

    // ------------------------------------------------------------------
    // Experience disclosures
    // ------------------------------------------------------------------

    /// Toggle job entry `index`. Returns the new state, or `None` if there
    /// is no such entry.
    pub fn toggle_experience(&mut self, index: usize) -> Option<bool> {
        if index >= self.data.experience.len() {
            return None;
        }
        self.needs_render = true;
        Some(self.experience.toggle(index))
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.experience.is_expanded(index)
    }

    pub fn experience_panel_style(&self, index: usize) -> PanelStyle {
        self.experience
            .panel_style(index, self.config.disclosure_transition_ms)
    }

    // ------------------------------------------------------------------
    // Project gallery
    // ------------------------------------------------------------------

    pub fn project_categories(&self) -> Vec<String> {
        filter::categories(&self.data.projects)
    }

    pub fn category_count(&self, category: &str) -> usize {
        filter::count(&self.data.projects, category)
    }

    pub fn active_category(&self) -> &str {
        self.project_filter.active()
    }

    pub fn select_category(&mut self, category: &str) -> bool {
        let changed = self.project_filter.select(category);
        self.needs_render |= changed;
        changed
    }

    pub fn visible_projects(&self) -> Vec<&Project> {
        self.project_filter.visible(&self.data.projects)
    }

    // ------------------------------------------------------------------
    // Skills tabs
    // ------------------------------------------------------------------

    pub fn select_skill_tab(&mut self, index: usize) -> bool {
        let changed = self.skill_tabs.select(index);
        self.needs_render |= changed;
        changed
    }

    pub fn active_skill_tab(&self) -> usize {
        self.skill_tabs.active()
    }

    pub fn active_skill_category(&self) -> Option<&SkillCategory> {
        self.skill_tabs.active_item(&self.data.skills)
    }

    /// Ratings for the skills of the active tab.
    pub fn skill_ratings(&self) -> Vec<SkillRating<'_>> {
        self.active_skill_category()
            .map(|c| c.skills.iter().map(Skill::rating).collect())
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Project modal
    // ------------------------------------------------------------------

    /// Inspect the project `id`. Returns false for an unknown id.
    pub fn open_project(page: &PageHandle<V>, id: &str) -> bool {
        let handler = Self::key_handler(Self::weak(page));
        let mut p = page.borrow_mut();
        let p = &mut *p;
        let Some(project) = p.data.project(id).cloned() else {
            return false;
        };
        log::debug!("inspect project {id}");
        p.project_modal.open(project, &mut p.viewport, handler);
        p.needs_render = true;
        true
    }

    pub fn close_project(&mut self) -> bool {
        let closed = self.project_modal.close(&mut self.viewport);
        self.needs_render |= closed;
        closed
    }

    pub fn overlay_click(&mut self, target: ClickTarget) -> bool {
        let closed = self.project_modal.handle_click(target, &mut self.viewport);
        self.needs_render |= closed;
        closed
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.project_modal.selected()
    }

    pub fn project_modal(&self) -> &Modal<Project> {
        &self.project_modal
    }

    // ------------------------------------------------------------------
    // Contact form
    // ------------------------------------------------------------------

    pub fn contact(&self) -> &ContactState {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactState {
        &mut self.contact
    }

    pub fn set_contact_field(&mut self, field: Field, value: &str) {
        self.contact.set_field(field, value);
        self.needs_render = true;
    }

    /// Validate and submit synchronously through `submitter`.
    ///
    /// # Errors
    /// Returns an error if a submission is already in flight.
    pub fn submit_contact<S>(&mut self, submitter: &S) -> Result<SubmitStatus>
    where
        S: ContactSubmitter + ?Sized,
    {
        self.needs_render = true;
        self.contact.submit_with(submitter)
    }

    // ------------------------------------------------------------------
    // Hero
    // ------------------------------------------------------------------

    pub fn current_role(&self) -> Option<&str> {
        self.roles.current()
    }

    pub fn advance_role(&mut self) -> Option<&str> {
        self.needs_render = true;
        self.roles.advance()
    }
}

impl<V: ViewportController> Drop for PortfolioPage<V> {
    fn drop(&mut self) {
        if let Some(id) = self.scroll_listener.take() {
            self.viewport.off_scroll(id);
        }
        self.project_modal.close(&mut self.viewport);
    }
}

impl<V> PortfolioPage<V>
where
    V: ViewportController + Clone + 'static,
{
    fn key_handler(weak: Weak<RefCell<Self>>) -> KeyHandler {
        Rc::new(move |key: &str| {
            if let Some(page) = weak.upgrade() {
                Self::handle_key(&page, key);
            }
        })
    }
}
