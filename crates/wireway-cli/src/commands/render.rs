use anyhow::Result;
use std::path::Path;
use tracing::warn;
use wireway_oil::{render_plain, render_to_string};

use super::load_schema;
use crate::config::WireConfig;

const DEFAULT_WIDTH: usize = 80;

/// Print one screen. An unknown `--screen` prints the not-found placeholder.
pub fn execute(
    config: &WireConfig,
    file: &Path,
    screen: Option<&str>,
    width: Option<usize>,
    plain: bool,
) -> Result<()> {
    let schema = load_schema(file)?;
    let frame = wireway_render::render(&schema, screen);
    if frame.is_not_found() {
        warn!(screen = screen.unwrap_or_default(), "screen not found");
    }

    let width = match width.unwrap_or(config.preview.width) {
        0 => DEFAULT_WIDTH,
        n => n,
    };
    let output = if plain {
        render_plain(&frame.tree, width)
    } else {
        render_to_string(&frame.tree, width)
    };
    println!("{output}");
    Ok(())
}
