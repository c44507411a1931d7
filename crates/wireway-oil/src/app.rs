use std::time::Duration;

use crate::event::Event;
use crate::focus::FocusContext;
use crate::node::Node;

pub struct ViewContext<'a> {
    pub focus: &'a FocusContext,
    pub terminal_size: (u16, u16),
}

impl<'a> ViewContext<'a> {
    pub fn new(focus: &'a FocusContext) -> Self {
        Self {
            focus,
            terminal_size: (80, 24),
        }
    }

    pub fn with_terminal_size(focus: &'a FocusContext, terminal_size: (u16, u16)) -> Self {
        Self {
            focus,
            terminal_size,
        }
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focus.is_focused(id)
    }
}

/// An Elm-style application: state renders to a [`Node`] tree, events and
/// messages update the state.
pub trait App {
    type Msg: Send + 'static;

    fn view(&self, ctx: &ViewContext<'_>) -> Node;

    fn update(&mut self, event: Event) -> Action<Self::Msg>;

    fn on_message(&mut self, _msg: Self::Msg) -> Action<Self::Msg> {
        Action::Continue
    }

    fn tick_rate(&self) -> Option<Duration> {
        None
    }
}

#[derive(Debug, Default)]
pub enum Action<M> {
    #[default]
    Continue,
    Quit,
    Send(M),
    Batch(Vec<Action<M>>),
}

impl<M> Action<M> {
    pub fn is_quit(&self) -> bool {
        matches!(self, Action::Quit)
    }
}

/// Drive `action` to completion against `app`. Returns true on quit.
pub fn process_action<A: App>(app: &mut A, action: Action<A::Msg>) -> bool {
    match action {
        Action::Quit => true,
        Action::Continue => false,
        Action::Send(msg) => {
            let next = app.on_message(msg);
            process_action(app, next)
        }
        Action::Batch(actions) => {
            for action in actions {
                if process_action(app, action) {
                    return true;
                }
            }
            false
        }
    }
}
