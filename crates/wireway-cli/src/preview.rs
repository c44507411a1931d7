//! Interactive preview application.
//!
//! Wraps a [`Session`] in an oil [`App`]. File reloads arrive as messages;
//! a reload that fails to parse keeps the last good schema on screen and
//! shows the error in the status line until the next good reload.

use std::path::PathBuf;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};
use wireway_core::{lint, SchemaEditor};
use wireway_oil::{
    col, row, rule, spacer, styled, Action, App, Event, Gap, InputAction, Node, ViewContext,
};
use wireway_render::{Session, ThemeTokens};

const HINT: &str = "Tab focus · Enter activate · Ctrl+S save · q quit";

#[derive(Debug)]
pub enum PreviewMsg {
    /// New file contents from the watcher or a manual reload.
    Reloaded(String),
    /// The watcher or the file read failed.
    WatchError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Status {
    Hint,
    Info(String),
    Error(String),
}

pub struct PreviewApp {
    path: PathBuf,
    save_path: PathBuf,
    editor: SchemaEditor,
    session: Session,
    keep_screen: bool,
    status: Status,
}

impl PreviewApp {
    pub fn new(
        path: PathBuf,
        save_path: PathBuf,
        editor: SchemaEditor,
        initial_screen: Option<String>,
        keep_screen: bool,
    ) -> Self {
        let session = Session::new(Arc::clone(editor.schema()), initial_screen);
        let lint_count = lint(editor.schema()).len();
        let status = if lint_count == 0 {
            Status::Hint
        } else {
            Status::Info(format!("{lint_count} lint finding(s); run `wire validate`"))
        };
        Self {
            path,
            save_path,
            editor,
            session,
            keep_screen,
            status,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn editor(&self) -> &SchemaEditor {
        &self.editor
    }

    fn reload(&mut self, text: String) {
        if text == self.editor.text() {
            return;
        }
        if self.editor.set_text(text) {
            let schema = Arc::clone(self.editor.schema());
            self.session.replace_schema(schema, self.keep_screen);
            info!(path = %self.path.display(), revision = self.editor.revision(), "reloaded");
            self.status = Status::Info(format!("reloaded {}", self.path.display()));
        } else if let Some(err) = self.editor.error() {
            self.status = Status::Error(err.to_string());
        }
    }

    fn reload_from_disk(&mut self) {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => self.reload(text),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "reload failed");
                self.status = Status::Error(format!("read {}: {err}", self.path.display()));
            }
        }
    }

    fn save(&mut self) {
        let result = self
            .editor
            .export_pretty()
            .map_err(|err| err.to_string())
            .and_then(|text| {
                std::fs::write(&self.save_path, text).map_err(|err| err.to_string())
            });
        self.status = match result {
            Ok(()) => {
                info!(path = %self.save_path.display(), "saved schema");
                Status::Info(format!("saved to {}", self.save_path.display()))
            }
            Err(err) => {
                warn!(path = %self.save_path.display(), %err, "save failed");
                Status::Error(format!("save failed: {err}"))
            }
        };
    }

    fn on_key(&mut self, key: KeyEvent) -> Action<PreviewMsg> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Action::Quit,
                KeyCode::Char('s') => {
                    self.save();
                    return Action::Continue;
                }
                _ => {}
            }
        }

        if self.session.is_editing() {
            self.session.edit(InputAction::from(key));
            return Action::Continue;
        }

        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('r') => {
                self.reload_from_disk();
                Action::Continue
            }
            _ => Action::Continue,
        }
    }

    fn status_line(&self, theme: &ThemeTokens) -> Node {
        let message = match &self.status {
            Status::Hint => styled(HINT, theme.muted()),
            Status::Info(message) => styled(message.as_str(), theme.accent()),
            Status::Error(message) => styled(
                format!("✗ {message} (showing last valid schema)"),
                theme.warning(),
            ),
        };
        let mode = if self.session.is_editing() {
            "EDIT"
        } else {
            self.session.current_screen_id()
        };
        row([message, spacer(), styled(mode, theme.muted())]).gap(Gap::column(1))
    }
}

impl App for PreviewApp {
    type Msg = PreviewMsg;

    fn view(&self, ctx: &ViewContext<'_>) -> Node {
        let theme = self.session.theme();
        let frame = self.session.frame(ctx.focus);
        col([
            frame.tree,
            rule().with_style(theme.border()),
            self.status_line(theme),
        ])
    }

    fn update(&mut self, event: Event) -> Action<PreviewMsg> {
        match event {
            Event::Key(key) => self.on_key(key),
            Event::Activate(id) => {
                if self.session.is_editing() {
                    self.session.edit(InputAction::Submit);
                } else {
                    self.session.activate(id.as_str());
                    if matches!(self.status, Status::Info(_)) {
                        self.status = Status::Hint;
                    }
                }
                Action::Continue
            }
            Event::FocusChanged(_) => {
                self.session.stop_editing();
                Action::Continue
            }
            Event::Quit => Action::Quit,
            Event::Resize { .. } | Event::Tick => Action::Continue,
        }
    }

    fn on_message(&mut self, msg: PreviewMsg) -> Action<PreviewMsg> {
        match msg {
            PreviewMsg::Reloaded(text) => self.reload(text),
            PreviewMsg::WatchError(err) => self.status = Status::Error(err),
        }
        Action::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wireway_oil::AppHarness;

    const TODO_APP: &str = include_str!("../../wireway-core/tests/fixtures/todo_app.json");

    fn app(save_path: PathBuf) -> PreviewApp {
        let editor = SchemaEditor::from_text(TODO_APP).unwrap();
        PreviewApp::new("todo.json".into(), save_path, editor, None, true)
    }

    fn harness() -> AppHarness<PreviewApp> {
        AppHarness::new(app("todo.export.json".into()), 50, 30)
    }

    #[test]
    fn activating_add_button_navigates() {
        let mut h = harness();
        h.activate("homeHeader/add");
        assert_eq!(h.app().session().current_screen_id(), "addTask");
        assert!(h.viewport().contains("Title *"));
    }

    #[test]
    fn tab_moves_through_wired_keys() {
        let mut h = harness();
        h.send_tab();
        assert_eq!(h.focused_id(), Some("homeHeader/add"));
        h.send_tab();
        assert_eq!(h.focused_id(), Some("searchBar"));
    }

    #[test]
    fn bad_reload_keeps_last_good_schema() {
        let mut h = harness();
        h.send_message(PreviewMsg::Reloaded("{\"screens\": [".into()));
        assert!(h.viewport().contains("My Tasks"));
        assert!(h.viewport().contains("invalid JSON"));
        assert_eq!(h.app().editor().revision(), 0);
    }

    #[test]
    fn good_reload_keeps_screen_when_it_still_exists() {
        let mut h = harness();
        h.activate("navBar/2");
        assert_eq!(h.app().session().current_screen_id(), "settings");

        let edited = TODO_APP.replace("Dark Mode", "Night Mode");
        h.send_message(PreviewMsg::Reloaded(edited));
        assert_eq!(h.app().session().current_screen_id(), "settings");
        assert!(h.viewport().contains("Night Mode"));
    }

    #[test]
    fn search_edit_mode_captures_keys() {
        let mut h = harness();
        h.activate("searchBar");
        h.send_text("qr");
        assert!(h.app().session().is_editing());
        assert!(!h.has_quit());
        assert!(h.viewport().contains("qr"));

        h.send_enter();
        assert!(!h.app().session().is_editing());
        h.send_text("q");
        assert!(h.has_quit());
    }

    #[test]
    fn ctrl_s_writes_the_last_good_schema() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("saved.json");
        let mut h = AppHarness::new(app(out.clone()), 50, 30);
        h.send_message(PreviewMsg::Reloaded("not json".into()));
        h.send_ctrl('s');

        let saved = std::fs::read_to_string(&out).unwrap();
        let reparsed = wireway_core::parse_schema(&saved).unwrap();
        assert_eq!(&reparsed, h.app().editor().export());
        assert!(h.viewport().contains("saved to"));
    }

    #[test]
    fn tabbing_away_ends_the_edit() {
        let mut h = harness();
        h.activate("searchBar");
        h.send_text("ab");
        assert!(h.app().session().is_editing());

        h.send_tab();
        assert!(!h.app().session().is_editing());
        h.send_key(KeyCode::Char('x'));
        let search = h.app().session().widgets().search_text("searchBar");
        assert_eq!(search.map(|b| b.content()), Some("ab"));
    }

    #[test]
    fn ctrl_c_quits_even_while_editing() {
        let mut h = harness();
        h.activate("searchBar");
        h.send_ctrl('c');
        assert!(h.has_quit());
    }
}
