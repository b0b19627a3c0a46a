use std::fmt;
use std::rc::{Rc, Weak};

use crate::base::ShapeBase;
use crate::dispatch::VTable;
use crate::error::DispatchFault;
use crate::rectangle::Rectangle;

/// A rectangle whose length never exceeds its width.
///
/// Owns a [`Rectangle`] and adds no fields of its own. The inner rectangle's
/// base is pointed at the wide value, so dispatch through the handle reaches
/// the overrides below.
#[derive(Debug)]
pub struct WideRectangle {
    rect: Rectangle,
}

impl WideRectangle {
    /// Swaps the dimensions when `length > width`; never rejects.
    pub fn new(name: impl Into<String>, length: i64, width: i64) -> Rc<Self> {
        let (length, width) = if length <= width {
            (length, width)
        } else {
            tracing::trace!(length, width, "swapping dimensions");
            (width, length)
        };

        Rc::new_cyclic(|me: &Weak<Self>| {
            let mut rect = Rectangle::unwired(name, length, width);
            let handle: Weak<dyn VTable> = me.clone();
            rect.rewire(handle);
            Self { rect }
        })
    }

    pub fn rectangle(&self) -> &Rectangle {
        &self.rect
    }

    pub fn length(&self) -> i64 {
        self.rect.length()
    }

    pub fn width(&self) -> i64 {
        self.rect.width()
    }
}

impl fmt::Display for WideRectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (With width invariant.)", self.rect)
    }
}

impl VTable for WideRectangle {
    fn base(&self) -> &ShapeBase {
        self.rect.base()
    }

    fn identity(&self) -> &'static str {
        "wide"
    }

    // Deliberately passed through: the contract object comes back as the
    // inner rectangle, one layer short of this value.
    fn dynamic(&self) -> &dyn VTable {
        self.rect.dynamic()
    }

    fn area(&self) -> i64 {
        self.rect.area()
    }

    fn bug(&self) -> Result<(), DispatchFault> {
        self.rect.bug()
    }

    fn default0(&self) -> String {
        format!("wide.Default0->{}", self.rect.default0())
    }

    fn default1(&self) -> String {
        format!("wide.Default1->{}", self.rect.default1())
    }
}
