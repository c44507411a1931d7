//! Wireway render: schema to oil node tree.
//!
//! - [`engine`]: total screen lookup, placeholder for unknown screens
//! - [`elements`]: exhaustive per-variant dispatcher
//! - [`interaction`]: interaction keys wired during render
//! - [`widgets`]: checkbox, field, select and search state
//! - [`session`]: applies activated interactions to navigation and widgets
//! - [`theme`]: semantic style tokens
//!
//! Rendering is a pure function of the schema, navigation state, widget
//! state and focus. Activation goes back through [`Session`].

pub mod elements;
pub mod engine;
pub mod interaction;
pub mod session;
pub mod theme;
pub mod widgets;

pub use engine::{render, Frame, RenderEngine};
pub use interaction::{Interaction, Wiring};
pub use session::Session;
pub use theme::ThemeTokens;
pub use widgets::{EditOutcome, EditTarget, WidgetState};
