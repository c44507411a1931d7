use anyhow::{bail, Result};
use std::path::Path;
use tracing::debug;
use wireway_core::{lint, parse_schema};

use super::read_text;

/// Validate then lint. Validation errors always fail; lint findings fail
/// only with `strict`.
pub fn execute(file: &Path, strict: bool) -> Result<()> {
    let text = read_text(file)?;
    let schema = match parse_schema(&text) {
        Ok(schema) => schema,
        Err(err) => {
            eprintln!("error[{}]: {err}", err.rule());
            bail!("{} is not a valid schema", file.display());
        }
    };

    let findings = lint(&schema);
    for finding in &findings {
        debug!(%finding, "lint");
        println!("warning: {finding}");
    }
    println!(
        "{}: {} screen(s), {} finding(s)",
        file.display(),
        schema.screens.len(),
        findings.len()
    );

    if strict && !findings.is_empty() {
        bail!("{} lint finding(s) in strict mode", findings.len());
    }
    Ok(())
}
