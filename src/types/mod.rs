//! Data types for the portfolio content feed.

mod contact;
mod content;
mod nav;

pub use contact::*;
pub use content::*;
pub use nav::*;
