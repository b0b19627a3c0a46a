use std::fmt;
use std::rc::{Rc, Weak};

use crate::base::ShapeBase;
use crate::dispatch::VTable;
use crate::error::DispatchFault;

/// A shape with two independent dimensions.
#[derive(Debug)]
pub struct Rectangle {
    base: ShapeBase,
    length: i64,
    width: i64,
}

impl Rectangle {
    /// A named rectangle, wired to itself and ready for dispatch.
    pub fn new(name: impl Into<String>, length: i64, width: i64) -> Rc<Self> {
        Rc::new_cyclic(|me: &Weak<Self>| {
            let mut rect = Self::unwired(name, length, width);
            let handle: Weak<dyn VTable> = me.clone();
            rect.rewire(handle);
            rect
        })
    }

    /// A rectangle whose base has no handle yet. Types that embed a
    /// rectangle build it this way and then point it at themselves.
    pub(crate) fn unwired(name: impl Into<String>, length: i64, width: i64) -> Self {
        Self {
            base: ShapeBase::new(name),
            length,
            width,
        }
    }

    pub(crate) fn rewire(&mut self, handle: Weak<dyn VTable>) {
        self.base.wire(handle);
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    pub fn width(&self) -> i64 {
        self.width
    }
}

/// Static description; not part of the contract.
impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} is a rectangle of dimensions {} x {}.",
            self.base.name(),
            self.length,
            self.width
        )
    }
}

impl VTable for Rectangle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn identity(&self) -> &'static str {
        "rectangle"
    }

    fn dynamic(&self) -> &dyn VTable {
        self
    }

    /// Wraps on overflow.
    fn area(&self) -> i64 {
        self.length.wrapping_mul(self.width)
    }

    fn bug(&self) -> Result<(), DispatchFault> {
        Ok(())
    }

    /// Wraps the base's own default.
    fn default0(&self) -> String {
        format!("rectangle.Default0->{}", self.base.default0())
    }

    /// First definition in this subtree; the base has none.
    fn default1(&self) -> String {
        "rectangle.Default1".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;
    use proptest::prelude::*;

    #[test]
    fn test_area() {
        let rect = Rectangle::new("s1", 6, 7);
        assert_eq!(rect.area(), 42);
        assert_eq!(rect.base().area().unwrap(), 42);
    }

    #[test]
    fn test_display() {
        let rect = Rectangle::new("s1", 6, 7);
        assert_eq!(rect.to_string(), "\"s1\" is a rectangle of dimensions 6 x 7.");
    }

    #[test]
    fn test_wired_to_itself() {
        let rect = Rectangle::new("s1", 6, 7);
        assert!(rect.base().is_wired());
        assert_eq!(rect.base().held().unwrap().identity(), "rectangle");
    }

    #[test]
    fn test_every_operation_resolves() {
        let rect = Rectangle::new("s1", 6, 7);
        let contract: &dyn VTable = &*rect;

        assert_eq!(contract.dynamic().identity(), "rectangle");
        assert_eq!(contract.area(), 42);
        assert!(contract.bug().is_ok());
        assert_eq!(contract.default0(), "rectangle.Default0->shape.Default0");
        assert_eq!(contract.default1(), "rectangle.Default1");
        assert_eq!(contract.set_border("dashed").unwrap().area(), 42);
        assert_eq!(contract.set_fill("blue").unwrap().area(), 42);
        assert_eq!(rect.base().border(), "dashed");
        assert_eq!(rect.base().fill(), "blue");
    }

    #[test]
    fn test_chaining_lands_on_base_depth() {
        let rect = Rectangle::new("s1", 6, 7);
        let chained = rect.set_border("x").unwrap();

        assert_eq!(chained.identity(), "shape");
        assert_eq!(chained.default0(), "shape.Default0");
        assert_eq!(chained.default1(), "rectangle.Default1");
        assert_eq!(chained.area(), 42);
        assert_eq!(chained.dynamic().identity(), "rectangle");
        assert_eq!(
            chained.dynamic().default0(),
            "rectangle.Default0->shape.Default0"
        );
    }

    #[test]
    fn test_area_wraps_on_overflow() {
        let rect = Rectangle::new("big", i64::MAX, 2);
        assert_eq!(rect.area(), i64::MAX.wrapping_mul(2));
        assert_eq!(rect.area(), -2);
        assert_eq!(rect.base().area().unwrap(), -2);
    }

    #[test]
    fn test_static_default0_diverges_from_dynamic() {
        let rect = Rectangle::new("s1", 6, 7);
        let report = rect.base().resolve_and_report(&DemoConfig::default()).unwrap();

        assert_eq!(report.default0.static_call, "shape.Default0");
        assert_eq!(report.default0.handle_call, "rectangle.Default0->shape.Default0");
        assert!(report.default0.diverges());
        assert!(report.default0.dynamic_agrees());

        assert!(!report.default1.diverges());
        assert_eq!(report.default1.static_call, "rectangle.Default1");
    }

    #[test]
    fn test_crash_demo_succeeds() {
        let rect = Rectangle::new("s1", 6, 7);
        let report = rect
            .base()
            .resolve_and_report(&DemoConfig::with_crash_demo(true))
            .unwrap();
        assert!(report.bug_checked);
    }

    proptest! {
        #[test]
        fn test_area_matches_on_every_path(length in 0i64..10_000, width in 0i64..10_000) {
            let rect = Rectangle::new("p", length, width);
            let contract: &dyn VTable = &*rect;

            prop_assert_eq!(rect.area(), length * width);
            prop_assert_eq!(contract.area(), length * width);
            prop_assert_eq!(rect.base().area().unwrap(), length * width);
        }
    }
}
