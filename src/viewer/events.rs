//! Keyboard handling for `PortfolioPage`.

use super::page::{PageHandle, PortfolioPage};
use crate::viewport::ViewportController;

impl<V> PortfolioPage<V>
where
    V: ViewportController + Clone + 'static,
{
    /// `keydown` while the project modal is open.
    pub(crate) fn handle_key(page: &PageHandle<V>, key: &str) {
        let hook = {
            let mut p = page.borrow_mut();
            let p = &mut *p;
            if !p.project_modal.handle_key(key, &mut p.viewport) {
                return;
            }
            log::debug!("project modal dismissed with {key}");
            p.needs_render = true;
            p.render_hook.clone()
        };
        Self::notify(hook);
    }
}
