use serde::{Deserialize, Serialize};

/// One navigation anchor: a label and a `#`-prefixed section href
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub name: String,
    pub href: String,
}

impl NavItem {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }

    /// Section id this item points at (`"#about"` -> `"about"`).
    ///
    /// Returns `None` when the href is not an in-page anchor or is empty.
    pub fn section_id(&self) -> Option<&str> {
        section_id_of(&self.href)
    }
}

/// Strip the leading `#` from an in-page href.
pub fn section_id_of(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
