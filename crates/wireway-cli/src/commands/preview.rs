use anyhow::{Context, Result};
use notify::{EventKind, RecommendedWatcher, RecursiveMode};
use notify_debouncer_full::{new_debouncer, DebounceEventResult, Debouncer, RecommendedCache};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::time::Duration;
use tracing::{debug, info};
use wireway_core::SchemaEditor;
use wireway_oil::{Runner, RunnerOptions};

use super::read_text;
use crate::config::WireConfig;
use crate::preview::{PreviewApp, PreviewMsg};

pub struct PreviewArgs {
    pub file: PathBuf,
    pub screen: Option<String>,
    pub width: Option<usize>,
    pub no_watch: bool,
}

pub fn execute(config: &WireConfig, args: PreviewArgs) -> Result<()> {
    let text = read_text(&args.file)?;
    let editor = SchemaEditor::from_text(text)
        .with_context(|| format!("Invalid schema: {}", args.file.display()))?;

    let save_path = config.save_path_for(&args.file);
    let app = PreviewApp::new(
        args.file.clone(),
        save_path,
        editor,
        args.screen,
        config.preview.keep_screen_on_reload,
    );
    let options = RunnerOptions {
        alternate_screen: config.preview.alternate_screen,
        width: args.width.unwrap_or(config.preview.width),
        tick_rate: Duration::from_millis(config.preview.tick_ms),
    };
    let (runner, tx) = Runner::new(app, options)
        .context("Failed to open terminal")?
        .with_message_channel();

    // Dropping the debouncer stops the watch, so it lives until the runner returns.
    let _debouncer = if config.editor.watch && !args.no_watch {
        let debounce = Duration::from_millis(config.editor.debounce_ms);
        Some(watch(&args.file, debounce, tx)?)
    } else {
        None
    };

    info!(file = %args.file.display(), "preview started");
    runner.run().context("Preview terminal error")?;
    Ok(())
}

/// Watch the file's directory so editors that save via rename still
/// trigger a reload.
fn watch(
    file: &Path,
    debounce: Duration,
    tx: Sender<PreviewMsg>,
) -> Result<Debouncer<RecommendedWatcher, RecommendedCache>> {
    let file = file
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", file.display()))?;
    let dir = file
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let target = file.clone();

    let mut debouncer = new_debouncer(debounce, None, move |result: DebounceEventResult| {
        let msg = match result {
            Ok(events) => {
                let touched = events.iter().any(|event| {
                    matches!(event.event.kind, EventKind::Create(_) | EventKind::Modify(_))
                        && event.event.paths.iter().any(|p| p == &target)
                });
                if !touched {
                    return;
                }
                match std::fs::read_to_string(&target) {
                    Ok(text) => PreviewMsg::Reloaded(text),
                    Err(err) => PreviewMsg::WatchError(format!("read {}: {err}", target.display())),
                }
            }
            Err(errors) => PreviewMsg::WatchError(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
        };
        if tx.send(msg).is_err() {
            debug!("preview closed, dropping watch event");
        }
    })
    .context("Failed to create file watcher")?;

    debouncer
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", dir.display()))?;
    debug!(dir = %dir.display(), "watching");
    Ok(debouncer)
}
