use std::fmt;
use std::rc::{Rc, Weak};

use crate::base::ShapeBase;
use crate::dispatch::VTable;

/// A shape with a single dimension.
///
/// `Square` never writes `bug`. It still satisfies [`VTable`] because the
/// trait supplies the base's version, which only forwards back through the
/// dispatch handle to this same square. Calling `bug` therefore faults with
/// [`DispatchFault::MissingOperation`](crate::DispatchFault::MissingOperation).
#[derive(Debug)]
pub struct Square {
    base: ShapeBase,
    side: i64,
}

impl Square {
    pub fn new(name: impl Into<String>, side: i64) -> Rc<Self> {
        Rc::new_cyclic(|me: &Weak<Self>| {
            let mut base = ShapeBase::new(name);
            let handle: Weak<dyn VTable> = me.clone();
            base.wire(handle);
            Self { base, side }
        })
    }

    pub fn side(&self) -> i64 {
        self.side
    }

    /// Looks like the contract's `bug`, but the name is wrong, so nothing
    /// dispatches here.
    pub fn buuuuug(&self) {}
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} is a square of side length {}.",
            self.base.name(),
            self.side
        )
    }
}

impl VTable for Square {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn identity(&self) -> &'static str {
        "square"
    }

    fn dynamic(&self) -> &dyn VTable {
        self
    }

    #[inline(never)]
    fn area(&self) -> i64 {
        self.side.wrapping_mul(self.side)
    }

    fn default1(&self) -> String {
        "square.Default1".to_string()
    }
}
