//! Site configuration: JSON (or a JS object) with defaults for every knob.

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, Result};

/// Tunables for the page's view-state controllers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Lookahead added to the scroll offset to compensate for the fixed header (px).
    pub header_offset: f64,
    /// Scroll offset past which the header switches to its solid style (px).
    pub scrolled_threshold: f64,
    /// Height transition of a disclosure panel (ms).
    pub disclosure_transition_ms: u32,
    /// Hero role rotation period (ms).
    pub role_interval_ms: u32,
    /// Simulated contact submission latency (ms).
    pub submit_delay_ms: u32,
    /// How long the "message sent" banner stays up (ms).
    pub success_banner_ms: u32,
    /// Input cap for the contact message, in characters.
    pub message_max_len: usize,
    /// One of "error", "warn", "info", "debug", "trace", "off".
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset: 100.0,
            scrolled_threshold: 50.0,
            disclosure_transition_ms: 300,
            role_interval_ms: 3000,
            submit_delay_ms: 2000,
            success_banner_ms: 5000,
            message_max_len: 1000,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) camelCase JSON config and validate it.
    ///
    /// # Errors
    /// Returns an error on malformed JSON or out-of-range values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Deserialize from a JS object. `undefined`/`null` yields the defaults.
    ///
    /// # Errors
    /// Returns an error if the object has the wrong shape or fails validation.
    #[cfg(target_arch = "wasm32")]
    pub fn from_js(value: wasm_bindgen::JsValue) -> Result<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_wasm_bindgen::from_value(value)
            .map_err(|e| PortfolioError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns [`PortfolioError::Config`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        if !self.header_offset.is_finite() || self.header_offset < 0.0 {
            return Err(PortfolioError::Config(format!(
                "headerOffset must be a non-negative number, got {}",
                self.header_offset
            )));
        }
        if !self.scrolled_threshold.is_finite() || self.scrolled_threshold < 0.0 {
            return Err(PortfolioError::Config(format!(
                "scrolledThreshold must be a non-negative number, got {}",
                self.scrolled_threshold
            )));
        }
        if self.message_max_len == 0 {
            return Err(PortfolioError::Config("messageMaxLen must be > 0".into()));
        }
        if self.log_level_filter().is_none() {
            return Err(PortfolioError::Config(format!(
                "unknown logLevel '{}'",
                self.log_level
            )));
        }
        Ok(())
    }

    pub fn log_level_filter(&self) -> Option<log::LevelFilter> {
        self.log_level.parse().ok()
    }
}
