use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use crossterm::event::{Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{process_action, App, ViewContext};
use crate::event::Event;
use crate::focus::FocusContext;
use crate::node::Node;
use crate::terminal::Terminal;

#[derive(Debug, Clone, Copy)]
pub struct RunnerOptions {
    pub alternate_screen: bool,
    /// Render width; 0 uses the full terminal width.
    pub width: usize,
    pub tick_rate: Duration,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            width: 0,
            tick_rate: Duration::from_millis(100),
        }
    }
}

pub struct Runner<A: App> {
    app: A,
    terminal: Terminal,
    options: RunnerOptions,
    msg_rx: Option<Receiver<A::Msg>>,
    focus: FocusContext,
}

impl<A: App> Runner<A> {
    pub fn new(app: A, options: RunnerOptions) -> io::Result<Self> {
        let terminal = Terminal::new()?.with_alternate_screen(options.alternate_screen);
        let tick_rate = app.tick_rate().unwrap_or(options.tick_rate);
        Ok(Self {
            app,
            terminal,
            options: RunnerOptions {
                tick_rate,
                ..options
            },
            msg_rx: None,
            focus: FocusContext::new(),
        })
    }

    pub fn with_message_channel(mut self) -> (Self, Sender<A::Msg>) {
        let (tx, rx) = mpsc::channel();
        self.msg_rx = Some(rx);
        (self, tx)
    }

    pub fn run(mut self) -> io::Result<A> {
        self.terminal.enter()?;

        loop {
            let tree = self.view();
            let width = if self.options.width == 0 {
                self.terminal.size().0 as usize
            } else {
                self.options.width
            };
            self.terminal.render(&tree, width)?;

            if let Some(rx) = &self.msg_rx {
                let pending: Vec<_> = rx.try_iter().collect();
                let mut quit = false;
                for msg in pending {
                    let action = self.app.on_message(msg);
                    quit |= process_action(&mut self.app, action);
                }
                if quit {
                    break;
                }
            }

            let Some(event) = self.poll_event()? else {
                continue;
            };
            let event = match event {
                Event::Key(key) => match route_key(&mut self.focus, key) {
                    Some(event) => event,
                    None => continue,
                },
                other => other,
            };
            let action = self.app.update(event);
            if process_action(&mut self.app, action) {
                break;
            }
        }

        self.terminal.exit()?;
        Ok(self.app)
    }

    fn view(&mut self) -> Node {
        let size = self.terminal.size();
        let tree = {
            let ctx = ViewContext::with_terminal_size(&self.focus, size);
            self.app.view(&ctx)
        };
        if sync_focus(&mut self.focus, &tree) {
            let ctx = ViewContext::with_terminal_size(&self.focus, size);
            return self.app.view(&ctx);
        }
        tree
    }

    fn poll_event(&mut self) -> io::Result<Option<Event>> {
        let Some(ct_event) = self.terminal.poll_event(self.options.tick_rate)? else {
            return Ok(Some(Event::Tick));
        };
        let event = match ct_event {
            CtEvent::Key(key) if key.kind == KeyEventKind::Release => return Ok(None),
            CtEvent::Key(key) => Event::Key(key),
            CtEvent::Resize(width, height) => {
                self.terminal.handle_resize()?;
                Event::Resize { width, height }
            }
            _ => return Ok(None),
        };
        Ok(Some(event))
    }
}

/// Rebuild the focus ring from `tree`. Returns true when the active id
/// changed, meaning the tree was rendered with stale focus.
pub(crate) fn sync_focus(focus: &mut FocusContext, tree: &Node) -> bool {
    let before = focus.active_id().cloned();
    focus.set_order(tree.focus_ids(), tree.auto_focus_id());
    focus.active_id() != before.as_ref()
}

/// Focus keys are handled here: Tab and Shift-Tab move focus and reach the
/// app only as [`Event::FocusChanged`], Enter on a focused node becomes
/// [`Event::Activate`]. Everything else reaches the app as a key.
pub(crate) fn route_key(focus: &mut FocusContext, key: KeyEvent) -> Option<Event> {
    match key.code {
        KeyCode::Tab => {
            focus.focus_next();
            Some(Event::FocusChanged(focus.active_id().cloned()))
        }
        KeyCode::BackTab => {
            focus.focus_prev();
            Some(Event::FocusChanged(focus.active_id().cloned()))
        }
        KeyCode::Enter if key.modifiers == KeyModifiers::NONE => match focus.active_id() {
            Some(id) => Some(Event::Activate(id.clone())),
            None => Some(Event::Key(key)),
        },
        _ => Some(Event::Key(key)),
    }
}

/// Run `app` until it quits, without a message channel.
pub fn run_sync<A: App>(app: A, options: RunnerOptions) -> io::Result<A> {
    Runner::new(app, options)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{col, focusable, text};

    fn ring() -> FocusContext {
        let mut focus = FocusContext::new();
        let tree = col([focusable("a", text("A")), focusable("b", text("B"))]);
        sync_focus(&mut focus, &tree);
        focus
    }

    fn focus_change(event: Option<Event>) -> Option<String> {
        match event {
            Some(Event::FocusChanged(id)) => id.map(|id| id.0),
            other => panic!("Expected focus change, got {other:?}"),
        }
    }

    #[test]
    fn tab_moves_focus_and_reports_it_instead_of_the_key() {
        let mut focus = ring();
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(focus_change(route_key(&mut focus, tab)).as_deref(), Some("a"));
        assert!(focus.is_focused("a"));

        let back = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(focus_change(route_key(&mut focus, back)).as_deref(), Some("b"));
        assert!(focus.is_focused("b"));
    }

    #[test]
    fn tab_on_an_empty_ring_reports_no_focus() {
        let mut focus = FocusContext::new();
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(focus_change(route_key(&mut focus, tab)), None);
    }

    #[test]
    fn enter_activates_focused_node() {
        let mut focus = ring();
        focus.focus("b");
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        match route_key(&mut focus, enter) {
            Some(Event::Activate(id)) => assert_eq!(id.as_str(), "b"),
            other => panic!("Expected activate, got {other:?}"),
        }
    }

    #[test]
    fn enter_without_focus_is_a_plain_key() {
        let mut focus = FocusContext::new();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert!(matches!(route_key(&mut focus, enter), Some(Event::Key(_))));
    }

    #[test]
    fn sync_focus_reports_lost_focus() {
        let mut focus = ring();
        focus.focus("a");
        assert!(sync_focus(&mut focus, &col([focusable("z", text("Z"))])));
        assert!(focus.active_id().is_none());
    }
}
