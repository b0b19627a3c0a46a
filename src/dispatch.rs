//! The dispatch contract every concrete shape implements.

use std::fmt;

use crate::base::{BaseView, ShapeBase};
use crate::error::DispatchFault;

/// Names the contract operations, for faults and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Dynamic,
    Area,
    Bug,
    Default0,
    Default1,
    SetBorder,
    SetFill,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dynamic => "Dynamic",
            Self::Area => "Area",
            Self::Bug => "Bug",
            Self::Default0 => "Default0",
            Self::Default1 => "Default1",
            Self::SetBorder => "SetBorder",
            Self::SetFill => "SetFill",
        };
        f.write_str(name)
    }
}

/// The hand-built vtable.
///
/// Methods with a body here are the ones the base record defines itself; an
/// implementor that does not write them gets the base's version, the same way
/// an embedded ancestor's methods are promoted. That includes `bug`, which the
/// base only forwards back through the dispatch handle: an implementor that
/// forgets it compiles fine and faults the first time it is called.
pub trait VTable {
    /// The composed base record.
    fn base(&self) -> &ShapeBase;

    /// Name of the layer that answered the call.
    fn identity(&self) -> &'static str;

    /// This value as the contract type, as seen from the layer that defines
    /// the method.
    fn dynamic(&self) -> &dyn VTable;

    fn area(&self) -> i64;

    fn bug(&self) -> Result<(), DispatchFault> {
        self.base().bug()
    }

    fn default0(&self) -> String {
        self.base().default0()
    }

    fn default1(&self) -> String;

    /// Chaining continues on the base, not on this value.
    fn set_border(&self, border: &str) -> Result<BaseView, DispatchFault> {
        self.base().set_border(border)
    }

    fn set_fill(&self, fill: &str) -> Result<BaseView, DispatchFault> {
        self.base().set_fill(fill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Default0.to_string(), "Default0");
        assert_eq!(Operation::SetBorder.to_string(), "SetBorder");
        assert_eq!(Operation::Bug.to_string(), "Bug");
    }
}
