//! Structured error types for folio.
//!
//! Only structural problems surface here. View-state misses (no matching
//! section, unknown category, out-of-range tab) are not errors.

/// All errors that can occur while loading content or driving the page.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    /// JSON (de)serialization error from serde_json.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid site configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Structurally unusable content feed.
    #[error("Invalid content: {0}")]
    Content(String),

    /// A scroll spy needs at least one section.
    #[error("No sections to track")]
    NoSections,

    /// A contact submission is already running.
    #[error("A submission is already in progress")]
    SubmitInFlight,

    /// The contact submitter reported a failure.
    #[error("Submission failed: {0}")]
    Submit(String),

    /// DOM access failed (missing window/document, listener registration).
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(target_arch = "wasm32")]
impl From<PortfolioError> for wasm_bindgen::JsValue {
    fn from(e: PortfolioError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
