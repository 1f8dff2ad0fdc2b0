//! Page geometry used by the scroll spy and click-to-scroll navigation.

mod sections;

pub use sections::{Section, SectionLayout};
