//! Interactive preview session.
//!
//! Owns the schema snapshot, navigation state and widget state, and turns
//! activated interaction keys into state transitions. The schema is shared
//! read-only; a new schema value replaces the snapshot and resets state.

use std::sync::Arc;

use tracing::{debug, info};
use wireway_core::schema::{Element, Form, FormField};
use wireway_core::{NavigationState, WireframeSchema};
use wireway_oil::{FocusContext, InputAction};

use crate::elements::key_part;
use crate::engine::{Frame, RenderEngine};
use crate::interaction::Interaction;
use crate::theme::ThemeTokens;
use crate::widgets::{EditOutcome, EditTarget, WidgetState};

#[derive(Debug)]
pub struct Session {
    schema: Arc<WireframeSchema>,
    initial_screen_id: Option<String>,
    nav: NavigationState,
    widgets: WidgetState,
    engine: RenderEngine<'static>,
}

impl Session {
    pub fn new(schema: Arc<WireframeSchema>, initial_screen_id: Option<String>) -> Self {
        let nav = NavigationState::for_schema(&schema, initial_screen_id.as_deref());
        Self {
            schema,
            initial_screen_id,
            nav,
            widgets: WidgetState::new(),
            engine: RenderEngine::new(),
        }
    }

    pub fn schema(&self) -> &Arc<WireframeSchema> {
        &self.schema
    }

    /// The schema as given; runtime state is never written back into it.
    pub fn export(&self) -> &WireframeSchema {
        &self.schema
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn widgets(&self) -> &WidgetState {
        &self.widgets
    }

    pub fn theme(&self) -> &'static ThemeTokens {
        self.engine.theme()
    }

    pub fn current_screen_id(&self) -> &str {
        self.nav.current_screen_id()
    }

    pub fn navigate(&mut self, screen_id: impl Into<String>) {
        self.widgets.stop_editing();
        self.nav.navigate(screen_id);
    }

    pub fn set_active_tab(&mut self, tabs_element_id: impl Into<String>, index: usize) {
        self.nav.set_active_tab(tabs_element_id, index);
    }

    pub fn frame(&self, focus: &FocusContext) -> Frame {
        self.engine
            .render_screen(&self.schema, &self.nav, &self.widgets, focus)
    }

    /// Activate the node wired under `key` on the current screen. Returns
    /// the interaction that was applied, `None` for an unwired key.
    pub fn activate(&mut self, key: &str) -> Option<Interaction> {
        let frame = self.frame(&FocusContext::new());
        let Some(interaction) = frame.wiring.get(key).cloned() else {
            debug!(key, "activated key is not wired");
            return None;
        };
        self.apply(interaction.clone());
        Some(interaction)
    }

    pub fn apply(&mut self, interaction: Interaction) {
        debug!(?interaction, "apply");
        match interaction {
            Interaction::Navigate(target) => self.navigate(target),
            Interaction::SelectTab { element_id, index } => self.set_active_tab(element_id, index),
            Interaction::ToggleCheckbox { list_id, item_id } => {
                self.widgets.toggle_checkbox(&list_id, &item_id)
            }
            Interaction::EditField { form_id, field_id } => {
                let seed = self
                    .field(&form_id, &field_id)
                    .and_then(FormField::spec)
                    .and_then(|spec| spec.default_value.as_ref())
                    .map(|value| value.as_text());
                self.widgets
                    .begin_edit(EditTarget::Field { form_id, field_id }, seed);
            }
            Interaction::CycleOption { form_id, field_id } => {
                let (initial, count) = match self.field(&form_id, &field_id) {
                    Some(FormField::Select(select)) => (select.default_index(), select.options.len()),
                    _ => (None, 0),
                };
                self.widgets
                    .cycle_option(&form_id, &field_id, initial, count);
            }
            Interaction::EditSearch { element_id } => {
                self.widgets
                    .begin_edit(EditTarget::Search { element_id }, None);
            }
        }
    }

    /// Feed a key to the widget being edited.
    pub fn edit(&mut self, action: InputAction) -> EditOutcome {
        self.widgets.edit(action)
    }

    /// Leave edit mode, keeping whatever was typed.
    pub fn stop_editing(&mut self) {
        self.widgets.stop_editing();
    }

    pub fn is_editing(&self) -> bool {
        self.widgets.editing().is_some()
    }

    /// Swap in a new schema. Navigation and widget state reset; with
    /// `keep_screen` the current screen survives if the new schema still
    /// has it. Returns false when `schema` is the snapshot already held.
    pub fn replace_schema(&mut self, schema: Arc<WireframeSchema>, keep_screen: bool) -> bool {
        if Arc::ptr_eq(&self.schema, &schema) {
            return false;
        }
        let current = self.nav.current_screen_id().to_owned();
        self.schema = schema;
        self.nav
            .reset(&self.schema, self.initial_screen_id.as_deref());
        self.widgets = WidgetState::new();

        if keep_screen && self.schema.contains_screen(&current) {
            self.nav.navigate(current);
        }
        info!(
            screens = self.schema.screens.len(),
            screen = self.nav.current_screen_id(),
            "schema replaced"
        );
        true
    }

    /// Form field addressed by interaction keys on the current screen.
    fn field(&self, form_id: &str, field_id: &str) -> Option<&FormField> {
        let screen = self.schema.screen(self.nav.current_screen_id())?;
        let form = screen
            .elements
            .iter()
            .enumerate()
            .find_map(|(i, element)| match element {
                Element::Form(form) if key_part(&form.id, i) == form_id => Some(form),
                _ => None,
            })?;
        find_field(form, field_id)
    }
}

fn find_field<'a>(form: &'a Form, field_id: &str) -> Option<&'a FormField> {
    form.fields
        .iter()
        .enumerate()
        .find(|(i, field)| key_part(field.id(), *i) == field_id)
        .map(|(_, field)| field)
}
