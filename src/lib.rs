//! folio - view-state core for a single-page developer portfolio
//!
//! Drives the interactive parts of the page from Rust via WebAssembly:
//! - Scroll spy: highlights the navigation entry for the section in view
//! - Experience disclosures: independently expandable job entries
//! - Project gallery: category filter and a modal with scroll lock
//! - Contact form: inline validation and a simulated submission
//!
//! Global side effects (listeners, scroll lock, animation frames) go through
//! the [`viewport::ViewportController`] trait, so everything except the DOM
//! adapter runs and tests natively.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { PortfolioView } from 'folio';
//! await init();
//! const view = new PortfolioView({ headerOffset: 100 });
//! view.set_render_callback(() => requestAnimationFrame(render));
//! view.mount();
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod layout;
pub mod logging;
pub mod state;
pub mod types;
pub mod viewer;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub use config::SiteConfig;
pub use content::ProjectStats;
pub use error::{PortfolioError, Result};
pub use layout::{Section, SectionLayout};
pub use viewer::{PageHandle, PortfolioPage, RenderHook};
#[cfg(target_arch = "wasm32")]
pub use viewer::{DomViewport, PortfolioView};
pub use viewport::{HeadlessViewport, ViewportController};

pub use types::*;

/// Crate version, for display in the page footer.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// The built-in content feed as a JS object.
///
/// # Errors
/// Returns an error if the embedded feed does not parse.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn builtin_content() -> std::result::Result<JsValue, JsValue> {
    let data = PortfolioData::builtin()?;
    serde_wasm_bindgen::to_value(&data)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// The built-in content feed as a JSON string.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn builtin_content_json() -> String {
    content::BUILTIN_CONTENT.to_string()
}
