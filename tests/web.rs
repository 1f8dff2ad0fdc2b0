//! Browser tests, run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use folio::PortfolioView;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_view_over_builtin_content() {
    let mut view = PortfolioView::new(JsValue::UNDEFINED, None).unwrap();
    view.mount();
    assert!(view.is_mounted());
    assert_eq!(view.active_section(), "home");
    assert_eq!(view.project_categories().len(), 5);

    assert!(view.open_project("ai-job-portal"));
    assert!(view.close_project());
    assert!(!view.close_project());

    view.unmount();
    assert!(!view.is_mounted());
}

#[wasm_bindgen_test]
fn test_contact_field_names() {
    let mut view = PortfolioView::new(JsValue::NULL, None).unwrap();
    assert!(view.set_contact_field("email", "a@b.co"));
    assert!(!view.set_contact_field("phone", "123"));
}

#[wasm_bindgen_test]
fn test_version() {
    assert_eq!(folio::version(), env!("CARGO_PKG_VERSION"));
}
