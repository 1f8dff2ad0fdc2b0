//! Rotating role title in the hero section.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCycle {
    roles: Vec<String>,
    current: usize,
}

impl RoleCycle {
    pub fn new(roles: Vec<String>) -> Self {
        Self { roles, current: 0 }
    }

    pub fn current(&self) -> Option<&str> {
        self.roles.get(self.current).map(String::as_str)
    }

    pub fn index(&self) -> usize {
        self.current
    }

    /// Step to the next role, wrapping at the end.
    pub fn advance(&mut self) -> Option<&str> {
        if self.roles.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.roles.len();
        self.current()
    }
}
