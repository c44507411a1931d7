//! Ephemeral widget state: checkboxes, field text, select choices and search
//! text. Lives beside the navigation state, keyed by element and item ids,
//! and is never written back into the schema.

use std::collections::{HashMap, HashSet};

use tracing::debug;
use wireway_oil::{InputAction, InputBuffer};

type Key = (String, String);

/// The widget currently receiving keystrokes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    Field { form_id: String, field_id: String },
    Search { element_id: String },
}

/// Result of feeding one key to the widget being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Changed,
    /// Enter or Esc: editing ended, the text stays.
    Finished,
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    toggled: HashSet<Key>,
    fields: HashMap<Key, InputBuffer>,
    options: HashMap<Key, usize>,
    search: HashMap<String, InputBuffer>,
    editing: Option<EditTarget>,
}

fn key(a: &str, b: &str) -> Key {
    (a.to_owned(), b.to_owned())
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checkbox state: the schema's `checked`, flipped once per toggle.
    pub fn is_checked(&self, list_id: &str, item_id: &str, declared: bool) -> bool {
        declared ^ self.toggled.contains(&key(list_id, item_id))
    }

    pub fn toggle_checkbox(&mut self, list_id: &str, item_id: &str) {
        let k = key(list_id, item_id);
        if !self.toggled.remove(&k) {
            self.toggled.insert(k);
        }
        debug!(list_id, item_id, "checkbox toggled");
    }

    /// Text typed into a field, if it has been edited.
    pub fn field_text(&self, form_id: &str, field_id: &str) -> Option<&InputBuffer> {
        self.fields.get(&key(form_id, field_id))
    }

    pub fn search_text(&self, element_id: &str) -> Option<&InputBuffer> {
        self.search.get(element_id)
    }

    /// Chosen option for a select, if one has been picked.
    pub fn option_index(&self, form_id: &str, field_id: &str) -> Option<usize> {
        self.options.get(&key(form_id, field_id)).copied()
    }

    /// Advance a select to its next option, wrapping. `initial` is the
    /// index implied by the field's default value.
    pub fn cycle_option(&mut self, form_id: &str, field_id: &str, initial: Option<usize>, count: usize) {
        if count == 0 {
            return;
        }
        let k = key(form_id, field_id);
        let next = match self.options.get(&k) {
            Some(current) => (current + 1) % count,
            None => initial.map_or(0, |i| (i + 1) % count),
        };
        self.options.insert(k, next);
        debug!(form_id, field_id, index = next, "select cycled");
    }

    /// Start routing keys to `target`; `seed` fills a buffer touched for
    /// the first time.
    pub fn begin_edit(&mut self, target: EditTarget, seed: Option<String>) {
        let buffer = match &target {
            EditTarget::Field { form_id, field_id } => {
                self.fields.entry(key(form_id, field_id)).or_default()
            }
            EditTarget::Search { element_id } => self.search.entry(element_id.clone()).or_default(),
        };
        if buffer.is_empty() {
            if let Some(seed) = seed {
                buffer.set_content(seed);
            }
        }
        debug!(?target, "editing");
        self.editing = Some(target);
    }

    pub fn editing(&self) -> Option<&EditTarget> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, target: &EditTarget) -> bool {
        self.editing.as_ref() == Some(target)
    }

    pub fn stop_editing(&mut self) {
        self.editing = None;
    }

    pub fn edit(&mut self, action: InputAction) -> EditOutcome {
        if self.editing.is_none() {
            return EditOutcome::Ignored;
        }
        if matches!(action, InputAction::Submit | InputAction::Cancel) {
            self.editing = None;
            return EditOutcome::Finished;
        }
        if action == InputAction::None {
            return EditOutcome::Ignored;
        }
        let buffer = match &self.editing {
            Some(EditTarget::Field { form_id, field_id }) => {
                self.fields.entry(key(form_id, field_id)).or_default()
            }
            Some(EditTarget::Search { element_id }) => {
                self.search.entry(element_id.clone()).or_default()
            }
            None => return EditOutcome::Ignored,
        };
        buffer.handle(action);
        EditOutcome::Changed
    }
}
