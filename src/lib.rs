//! # Hand-Built Virtual Dispatch over Composition
//!
//! Rust has no inheritance, so a "base class" that wants to call a method
//! overridden further down has to be handed a reference to the outer value.
//! This crate builds that machinery by hand and keeps its sharp edges visible.
//!
//! ## The pieces
//! - [`VTable`]: the dispatch contract every shape implements
//! - [`ShapeBase`]: shared state plus the weak dispatch handle
//! - [`Rectangle`], [`Square`], [`WideRectangle`]: concrete shapes
//! - [`DispatchReport`]: the same operation resolved along three call paths
//!
//! ## What it shows
//! - A default defined on the base binds statically when the base calls it,
//!   even though the outer value overrides it (`default0`)
//! - An operation the base never defines is always resolved through the
//!   handle, so there is nothing to shadow (`default1`)
//! - A missing implementation compiles and only fails when called
//!   ([`Square`] and `bug`)
//! - A passed-through `dynamic` answers one layer short of the real value
//!   ([`WideRectangle`])
//!
//! ```
//! use vtable_demo::{DemoConfig, VTable, WideRectangle};
//!
//! let wide = WideRectangle::new("s3", 10, 2);
//! assert_eq!((wide.length(), wide.width()), (2, 10));
//!
//! let report = wide.base().resolve_and_report(&DemoConfig::default()).unwrap();
//! assert!(report.default0.diverges());
//! ```

pub mod base;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod rectangle;
pub mod report;
pub mod square;
pub mod wide;

pub use base::{BaseView, ShapeBase};
pub use config::DemoConfig;
pub use dispatch::{Operation, VTable};
pub use error::{ConfigError, DispatchFault};
pub use rectangle::Rectangle;
pub use report::{DispatchReport, Resolution};
pub use square::Square;
pub use wide::WideRectangle;
