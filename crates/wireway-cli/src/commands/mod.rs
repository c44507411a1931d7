pub mod preview;
pub mod render;
pub mod screens;
pub mod validate;

use anyhow::{Context, Result};
use std::path::Path;
use wireway_core::{parse_schema, WireframeSchema};

pub(crate) fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file: {}", path.display()))
}

pub(crate) fn load_schema(path: &Path) -> Result<WireframeSchema> {
    let text = read_text(path)?;
    parse_schema(&text).with_context(|| format!("Invalid schema: {}", path.display()))
}
