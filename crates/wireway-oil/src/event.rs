use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::focus::FocusId;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    /// Enter pressed while a focusable node held focus.
    Activate(FocusId),
    /// Tab or Shift-Tab moved focus; carries the newly focused id.
    FocusChanged(Option<FocusId>),
    Resize { width: u16, height: u16 },
    Tick,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Insert(char),
    Backspace,
    Delete,
    DeleteWord,
    Left,
    Right,
    Home,
    End,
    Submit,
    Cancel,
    Clear,
    None,
}

impl From<KeyEvent> for InputAction {
    fn from(key: KeyEvent) -> Self {
        match (key.code, key.modifiers) {
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => InputAction::DeleteWord,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => InputAction::Clear,
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => InputAction::Home,
            (KeyCode::Char('e'), KeyModifiers::CONTROL) => InputAction::End,
            (KeyCode::Char('b'), KeyModifiers::CONTROL) => InputAction::Left,
            (KeyCode::Char('f'), KeyModifiers::CONTROL) => InputAction::Right,
            (KeyCode::Char(_), KeyModifiers::CONTROL) => InputAction::None,
            (KeyCode::Char(c), _) => InputAction::Insert(c),
            (KeyCode::Backspace, _) => InputAction::Backspace,
            (KeyCode::Delete, _) => InputAction::Delete,
            (KeyCode::Left, _) => InputAction::Left,
            (KeyCode::Right, _) => InputAction::Right,
            (KeyCode::Home, _) => InputAction::Home,
            (KeyCode::End, _) => InputAction::End,
            (KeyCode::Enter, _) => InputAction::Submit,
            (KeyCode::Esc, _) => InputAction::Cancel,
            _ => InputAction::None,
        }
    }
}

/// Single-line edit buffer. `cursor` is a byte offset on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    content: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        let mut buffer = Self::new();
        buffer.set_content(content);
        buffer
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Apply an edit. Returns the content on `Submit`.
    pub fn handle(&mut self, action: InputAction) -> Option<String> {
        match action {
            InputAction::Insert(c) => {
                self.content.insert(self.cursor, c);
                self.cursor += c.len_utf8();
            }
            InputAction::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_boundary();
                    self.content.remove(prev);
                    self.cursor = prev;
                }
            }
            InputAction::Delete => {
                if self.cursor < self.content.len() {
                    self.content.remove(self.cursor);
                }
            }
            InputAction::DeleteWord => {
                if self.cursor > 0 {
                    let before = &self.content[..self.cursor];
                    let word_start = before
                        .trim_end()
                        .rfind(char::is_whitespace)
                        .map(|i| i + 1)
                        .unwrap_or(0);
                    self.content.replace_range(word_start..self.cursor, "");
                    self.cursor = word_start;
                }
            }
            InputAction::Left => {
                if self.cursor > 0 {
                    self.cursor = self.prev_boundary();
                }
            }
            InputAction::Right => {
                if let Some(c) = self.content[self.cursor..].chars().next() {
                    self.cursor += c.len_utf8();
                }
            }
            InputAction::Home => self.cursor = 0,
            InputAction::End => self.cursor = self.content.len(),
            InputAction::Clear => {
                self.content.clear();
                self.cursor = 0;
            }
            InputAction::Submit => return Some(self.content.clone()),
            InputAction::Cancel | InputAction::None => {}
        }
        None
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.content.len();
    }

    fn prev_boundary(&self) -> usize {
        self.content[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}
