use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;

use super::load_schema;

pub fn execute(file: &Path, as_json: bool) -> Result<()> {
    let schema = load_schema(file)?;

    if as_json {
        let screens: Vec<_> = schema
            .screens
            .iter()
            .map(|screen| {
                json!({
                    "id": screen.id,
                    "name": screen.name,
                    "elements": screen.elements.len(),
                })
            })
            .collect();
        let text = serde_json::to_string_pretty(&screens).context("Failed to serialize screens")?;
        println!("{text}");
        return Ok(());
    }

    let width = schema
        .screens
        .iter()
        .map(|screen| screen.id.chars().count())
        .max()
        .unwrap_or(0);
    for screen in &schema.screens {
        println!("{:<width$}  {}", screen.id, screen.name);
    }
    Ok(())
}
