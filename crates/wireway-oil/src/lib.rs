//! Oil: a small declarative terminal UI layer.
//!
//! Apps describe each frame as a [`Node`] tree; [`render`] lays it out into
//! lines; [`runner`] owns the raw-mode loop and focus ring; [`test_harness`]
//! drives the same loop headlessly.

pub mod ansi;
pub mod app;
pub mod event;
pub mod focus;
pub mod node;
pub mod render;
pub mod runner;
pub mod style;
pub mod terminal;
pub mod test_harness;

#[cfg(feature = "test-utils")]
pub mod proptest_strategies;

pub use app::{Action, App, ViewContext};
pub use event::{Event, InputAction, InputBuffer};
pub use focus::{FocusContext, FocusId};
pub use node::*;
pub use render::{render_lines, render_plain, render_to_string};
pub use runner::{run_sync, Runner, RunnerOptions};
pub use style::{Border, Color, Gap, JustifyContent, Padding, Style, TextAlign};
pub use test_harness::AppHarness;
