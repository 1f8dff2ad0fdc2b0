//! View-state controllers.
//!
//! Each controller owns disjoint state and exposes plain transition methods,
//! so any binding layer (the wasm viewer, the CLI, tests) can drive it:
//! - [`ScrollSpy`]: scroll offset to active navigation section
//! - [`DisclosureSet`]: expanded job-history entries
//! - [`SelectionFilter`] / [`TabSet`]: gallery category and skills tab
//! - [`Modal`]: inspected project, scroll lock and Escape listener
//! - [`HeaderState`], [`RoleCycle`], [`ContactState`]: header chrome, hero
//!   rotation, contact form

mod contact;
mod disclosure;
pub mod filter;
mod header;
mod hero;
mod modal;
mod scroll_spy;

pub use contact::{
    is_valid_email, validate, validate_field, ContactState, ContactSubmitter, FieldErrors,
    SimulatedSubmitter, SubmitStatus, MESSAGE_MIN_LEN, NAME_MIN_LEN, SUBJECT_MIN_LEN,
};
pub use disclosure::{DisclosureSet, PanelStyle};
pub use filter::{Categorized, SelectionFilter, TabSet, ALL};
pub use header::HeaderState;
pub use hero::RoleCycle;
pub use modal::{ClickTarget, Modal, ESCAPE_KEY};
pub use scroll_spy::{FrameThrottle, ScrollSpy};
