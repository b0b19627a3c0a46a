//! Results of resolving the same operation along different call paths.

use serde::Serialize;

/// One operation resolved three ways.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution<T> {
    /// Called on the base record itself, bound at the base's depth.
    pub static_call: T,
    /// Called on whatever `dynamic()` of the held value returns.
    pub dynamic_call: T,
    /// Called directly on the held value.
    pub handle_call: T,
}

impl<T: PartialEq> Resolution<T> {
    /// Whether any of the three paths disagrees with another.
    pub fn diverges(&self) -> bool {
        self.static_call != self.handle_call || self.dynamic_call != self.handle_call
    }

    /// Whether the two dynamic paths agree.
    pub fn dynamic_agrees(&self) -> bool {
        self.dynamic_call == self.handle_call
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    pub name: String,
    pub identity: Resolution<&'static str>,
    pub default0: Resolution<String>,
    pub default1: Resolution<String>,
    pub area: Resolution<i64>,
    /// Set when `bug` was called and returned normally.
    pub bug_checked: bool,
}
