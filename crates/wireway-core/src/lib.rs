//! Wireway core: the data side of the wireframe engine.
//!
//! - [`schema`]: screens, elements and form fields as an immutable value
//! - [`validate`]: minimal shape checks turning raw JSON into a schema
//! - [`navigation`]: current screen and per-tabs-element active index
//! - [`editor`]: text buffer with last-good-state semantics
//! - [`lint`]: advisory findings (dangling targets, duplicate ids)
//!
//! Rendering lives in `wireway-render`; nothing here depends on a terminal.

pub mod editor;
pub mod error;
pub mod lint;
pub mod navigation;
pub mod schema;
pub mod validate;

#[cfg(feature = "test-utils")]
pub mod proptest_strategies;

pub use editor::SchemaEditor;
pub use error::{SchemaError, SchemaResult};
pub use lint::{lint, LintFinding};
pub use navigation::NavigationState;
pub use schema::{Element, FormField, Screen, WireframeSchema};
pub use validate::{check_shape, parse_schema, validate};
