//! Headless driver for [`App`]s: routes keys exactly like the runner and
//! keeps the last frame as plain text for assertions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{process_action, App, ViewContext};
use crate::event::Event;
use crate::focus::FocusContext;
use crate::node::Node;
use crate::render::{render_plain, render_to_string};
use crate::runner::{route_key, sync_focus};

pub struct AppHarness<A: App> {
    app: A,
    focus: FocusContext,
    width: u16,
    height: u16,
    viewport: String,
    quit: bool,
}

impl<A: App> AppHarness<A> {
    pub fn new(app: A, width: u16, height: u16) -> Self {
        let mut harness = Self {
            app,
            focus: FocusContext::new(),
            width,
            height,
            viewport: String::new(),
            quit: false,
        };
        harness.render();
        harness
    }

    pub fn send_key(&mut self, code: KeyCode) -> &mut Self {
        self.send_key_with_modifiers(code, KeyModifiers::NONE)
    }

    pub fn send_key_with_modifiers(&mut self, code: KeyCode, modifiers: KeyModifiers) -> &mut Self {
        if let Some(event) = route_key(&mut self.focus, KeyEvent::new(code, modifiers)) {
            self.dispatch(event);
        }
        self.render()
    }

    pub fn send_text(&mut self, text: &str) -> &mut Self {
        for c in text.chars() {
            self.send_key(KeyCode::Char(c));
        }
        self
    }

    pub fn send_enter(&mut self) -> &mut Self {
        self.send_key(KeyCode::Enter)
    }

    pub fn send_escape(&mut self) -> &mut Self {
        self.send_key(KeyCode::Esc)
    }

    pub fn send_tab(&mut self) -> &mut Self {
        self.send_key(KeyCode::Tab)
    }

    pub fn send_shift_tab(&mut self) -> &mut Self {
        self.send_key_with_modifiers(KeyCode::BackTab, KeyModifiers::SHIFT)
    }

    pub fn send_ctrl(&mut self, c: char) -> &mut Self {
        self.send_key_with_modifiers(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub fn tick(&mut self) -> &mut Self {
        self.dispatch(Event::Tick);
        self.render()
    }

    pub fn send_message(&mut self, msg: A::Msg) -> &mut Self {
        let action = self.app.on_message(msg);
        self.quit |= process_action(&mut self.app, action);
        self.render()
    }

    /// Move focus straight to `id`, then activate it as Enter would.
    pub fn activate(&mut self, id: &str) -> &mut Self {
        assert!(self.focus.focus(id), "no focusable `{id}` in the current frame");
        self.send_enter()
    }

    pub fn focus(&mut self, id: &str) -> bool {
        let found = self.focus.focus(id);
        self.render();
        found
    }

    pub fn render(&mut self) -> &mut Self {
        let tree = self.tree();
        if sync_focus(&mut self.focus, &tree) {
            let tree = self.tree();
            self.viewport = render_plain(&tree, self.width as usize);
        } else {
            self.viewport = render_plain(&tree, self.width as usize);
        }
        self
    }

    pub fn tree(&self) -> Node {
        let ctx = ViewContext::with_terminal_size(&self.focus, (self.width, self.height));
        self.app.view(&ctx)
    }

    /// Last frame without styling.
    pub fn viewport(&self) -> &str {
        &self.viewport
    }

    pub fn styled_viewport(&self) -> String {
        render_to_string(&self.tree(), self.width as usize)
    }

    pub fn has_quit(&self) -> bool {
        self.quit
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focus.is_focused(id)
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focus.active_id().map(|id| id.as_str())
    }

    pub fn focus_ids(&self) -> Vec<String> {
        self.tree()
            .focus_ids()
            .into_iter()
            .map(|id| id.0)
            .collect()
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }

    fn dispatch(&mut self, event: Event) {
        let action = self.app.update(event);
        self.quit |= process_action(&mut self.app, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Action;
    use crate::node::{col, focusable, text};

    #[derive(Default)]
    struct Counter {
        count: u32,
        activated: Vec<String>,
    }

    impl App for Counter {
        type Msg = u32;

        fn view(&self, ctx: &ViewContext<'_>) -> Node {
            let marker = if ctx.is_focused("inc") { ">" } else { " " };
            col([
                text(format!("count {}", self.count)),
                focusable("inc", text(format!("{marker} +1"))),
            ])
        }

        fn update(&mut self, event: Event) -> Action<u32> {
            match event {
                Event::Activate(id) => {
                    self.activated.push(id.0);
                    Action::Send(1)
                }
                Event::Key(key) if key.code == KeyCode::Char('q') => Action::Quit,
                _ => Action::Continue,
            }
        }

        fn on_message(&mut self, msg: u32) -> Action<u32> {
            self.count += msg;
            Action::Continue
        }
    }

    #[test]
    fn tab_then_enter_activates() {
        let mut harness = AppHarness::new(Counter::default(), 20, 5);
        harness.send_tab().send_enter();
        assert_eq!(harness.app().count, 1);
        assert_eq!(harness.app().activated, vec!["inc"]);
        assert!(harness.viewport().contains("> +1"));
    }

    #[test]
    fn quit_is_recorded() {
        let mut harness = AppHarness::new(Counter::default(), 20, 5);
        harness.send_key(KeyCode::Char('q'));
        assert!(harness.has_quit());
    }

    #[test]
    fn messages_update_state() {
        let mut harness = AppHarness::new(Counter::default(), 20, 5);
        harness.send_message(4);
        assert!(harness.viewport().starts_with("count 4"));
    }
}
