//! The base record shared by every shape, and the dispatch handle that lets
//! it reach the value it is embedded in.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::DemoConfig;
use crate::dispatch::{Operation, VTable};
use crate::error::DispatchFault;
use crate::report::{DispatchReport, Resolution};

const IDENTITY: &str = "shape";

/// State common to all shapes plus the back-reference used for dispatch.
///
/// The base cannot see the type that embeds it. Every call it wants resolved
/// at the most-derived depth goes through `handle`, which the enclosing
/// constructor must point at the outermost value. The handle is weak: it is
/// only ever used to dispatch, never to keep anything alive.
#[derive(Debug)]
pub struct ShapeBase {
    handle: Option<Weak<dyn VTable>>,
    name: String,
    border: RefCell<String>,
    fill: RefCell<String>,
    in_flight: RefCell<Vec<Operation>>,
}

/// Marks an operation as being forwarded; cleared on drop.
struct InFlight<'a> {
    base: &'a ShapeBase,
    operation: Operation,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.base
            .in_flight
            .borrow_mut()
            .retain(|op| *op != self.operation);
    }
}

impl ShapeBase {
    /// An unwired base. Nothing dispatches until `wire` is called.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            handle: None,
            name: name.into(),
            border: RefCell::new(String::new()),
            fill: RefCell::new(String::new()),
            in_flight: RefCell::new(Vec::new()),
        }
    }

    /// Point the handle at the enclosing value, replacing any earlier target.
    pub fn wire(&mut self, handle: Weak<dyn VTable>) {
        tracing::trace!(shape = %self.name, rewired = self.handle.is_some(), "wire dispatch handle");
        self.handle = Some(handle);
    }

    pub fn is_wired(&self) -> bool {
        self.handle.is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn border(&self) -> String {
        self.border.borrow().clone()
    }

    pub fn fill(&self) -> String {
        self.fill.borrow().clone()
    }

    pub fn identity(&self) -> &'static str {
        IDENTITY
    }

    /// The value behind the dispatch handle.
    pub fn held(&self) -> Result<Rc<dyn VTable>, DispatchFault> {
        self.held_for(Operation::Dynamic)
    }

    /// Defined at this depth, so a call made here binds here even when the
    /// held value overrides it.
    pub fn default0(&self) -> String {
        "shape.Default0".to_string()
    }

    /// Not defined at this depth: always resolved through the handle.
    pub fn default1(&self) -> Result<String, DispatchFault> {
        self.forward(Operation::Default1, |held| held.default1())
    }

    pub fn area(&self) -> Result<i64, DispatchFault> {
        self.forward(Operation::Area, |held| held.area())
    }

    pub fn bug(&self) -> Result<(), DispatchFault> {
        self.forward(Operation::Bug, |held| held.bug())?
    }

    /// Sets the border and hands back the base as the contract type, so
    /// the caller can chain only through contract operations.
    pub fn set_border(&self, border: &str) -> Result<BaseView, DispatchFault> {
        *self.border.borrow_mut() = border.to_string();
        self.view(Operation::SetBorder)
    }

    pub fn set_fill(&self, fill: &str) -> Result<BaseView, DispatchFault> {
        *self.fill.borrow_mut() = fill.to_string();
        self.view(Operation::SetFill)
    }

    /// Resolve `Default0`, `Default1` and `Area` along the static, dynamic
    /// and handle paths. With `crash_demo` set, also call `Bug` through the
    /// handle; a fault there ends the report.
    pub fn resolve_and_report(&self, config: &DemoConfig) -> Result<DispatchReport, DispatchFault> {
        let _span = tracing::debug_span!("resolve_and_report", shape = %self.name).entered();

        let held = self.held()?;
        let dynamic = held.dynamic();

        let mut report = DispatchReport {
            name: self.name.clone(),
            identity: Resolution {
                static_call: self.identity(),
                dynamic_call: dynamic.identity(),
                handle_call: held.identity(),
            },
            default0: Resolution {
                static_call: self.default0(),
                dynamic_call: dynamic.default0(),
                handle_call: held.default0(),
            },
            default1: Resolution {
                static_call: self.default1()?,
                dynamic_call: dynamic.default1(),
                handle_call: held.default1(),
            },
            area: Resolution {
                static_call: self.area()?,
                dynamic_call: dynamic.area(),
                handle_call: held.area(),
            },
            bug_checked: false,
        };

        if config.crash_demo {
            self.bug()?;
            report.bug_checked = true;
        }

        tracing::debug!(
            identity = held.identity(),
            default0_diverges = report.default0.diverges(),
            default1_diverges = report.default1.diverges(),
            "report complete"
        );
        Ok(report)
    }

    fn view(&self, operation: Operation) -> Result<BaseView, DispatchFault> {
        let held = self.held_for(operation)?;
        Ok(BaseView { held })
    }

    fn held_for(&self, operation: Operation) -> Result<Rc<dyn VTable>, DispatchFault> {
        let Some(handle) = &self.handle else {
            tracing::warn!(shape = %self.name, %operation, "dispatch through unwired base");
            return Err(DispatchFault::Unwired {
                shape: self.name.clone(),
                operation,
            });
        };
        handle.upgrade().ok_or_else(|| {
            tracing::warn!(shape = %self.name, %operation, "dispatch through dangling handle");
            DispatchFault::Dangling {
                shape: self.name.clone(),
                operation,
            }
        })
    }

    fn enter(&self, operation: Operation) -> Result<InFlight<'_>, DispatchFault> {
        let mut ops = self.in_flight.borrow_mut();
        if ops.contains(&operation) {
            tracing::warn!(shape = %self.name, %operation, "operation resolved back to the base");
            return Err(DispatchFault::MissingOperation {
                shape: self.name.clone(),
                operation,
            });
        }
        ops.push(operation);
        Ok(InFlight {
            base: self,
            operation,
        })
    }

    fn forward<T>(
        &self,
        operation: Operation,
        call: impl FnOnce(&dyn VTable) -> T,
    ) -> Result<T, DispatchFault> {
        let held = self.held_for(operation)?;
        let _in_flight = self.enter(operation)?;
        tracing::trace!(shape = %self.name, %operation, target = held.identity(), "forward");
        Ok(call(&*held))
    }
}

/// The base record seen as the contract type.
///
/// Answers `default0` at base depth like a call written inside the base;
/// everything the base does not define goes through the dispatch handle.
/// Reaching the outer value's own `default0` takes an explicit `dynamic()`.
pub struct BaseView {
    held: Rc<dyn VTable>,
}

impl fmt::Debug for BaseView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseView")
            .field("shape", &self.held.base().name())
            .field("held", &self.held.identity())
            .finish()
    }
}

impl VTable for BaseView {
    fn base(&self) -> &ShapeBase {
        self.held.base()
    }

    fn identity(&self) -> &'static str {
        IDENTITY
    }

    fn dynamic(&self) -> &dyn VTable {
        self.held.dynamic()
    }

    fn area(&self) -> i64 {
        self.held.area()
    }

    fn default1(&self) -> String {
        self.held.default1()
    }
}
