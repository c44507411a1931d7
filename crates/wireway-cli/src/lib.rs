//! `wire`: terminal previewer for wireframe schemas.
//!
//! The binary is a thin shell over `wireway-render`: it reads files, loads
//! configuration, installs logging and runs the interactive preview.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod preview;
