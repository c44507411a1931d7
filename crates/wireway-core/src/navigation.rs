//! Navigation state machine.
//!
//! Tracks which screen is current and which tab is active for each tabs
//! element. Transitions are never rejected: navigating to an id the schema
//! does not contain is allowed, and the renderer shows a placeholder for it.

use std::collections::HashMap;

use tracing::debug;

use crate::schema::WireframeSchema;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_screen_id: String,
    active_tabs: HashMap<String, usize>,
}

impl NavigationState {
    pub fn new(initial_screen_id: impl Into<String>) -> Self {
        Self {
            current_screen_id: initial_screen_id.into(),
            active_tabs: HashMap::new(),
        }
    }

    /// Initial state for a schema: the explicit initial screen if given,
    /// otherwise the first screen in declaration order.
    pub fn for_schema(schema: &WireframeSchema, initial_screen_id: Option<&str>) -> Self {
        let initial = initial_screen_id
            .or_else(|| schema.first_screen().map(|screen| screen.id.as_str()))
            .unwrap_or_default();
        Self::new(initial)
    }

    pub fn current_screen_id(&self) -> &str {
        &self.current_screen_id
    }

    pub fn navigate(&mut self, screen_id: impl Into<String>) {
        let screen_id = screen_id.into();
        debug!(from = %self.current_screen_id, to = %screen_id, "navigate");
        self.current_screen_id = screen_id;
    }

    pub fn set_active_tab(&mut self, tabs_element_id: impl Into<String>, index: usize) {
        let tabs_element_id = tabs_element_id.into();
        debug!(element = %tabs_element_id, index, "set active tab");
        self.active_tabs.insert(tabs_element_id, index);
    }

    /// Active index for a tabs element, falling back to its declared
    /// default and then to 0 until the user picks a tab.
    pub fn active_tab(&self, tabs_element_id: &str, default_active_tab: Option<usize>) -> usize {
        self.active_tabs
            .get(tabs_element_id)
            .copied()
            .or(default_active_tab)
            .unwrap_or(0)
    }

    /// Back to the initial state for `schema`.
    pub fn reset(&mut self, schema: &WireframeSchema, initial_screen_id: Option<&str>) {
        *self = Self::for_schema(schema, initial_screen_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Screen;

    fn two_screens() -> WireframeSchema {
        WireframeSchema::new(vec![
            Screen::new("home", "Home", vec![]),
            Screen::new("addTask", "Add Task", vec![]),
        ])
    }

    #[test]
    fn starts_on_first_screen_with_empty_tab_map() {
        let nav = NavigationState::for_schema(&two_screens(), None);
        assert_eq!(nav.current_screen_id(), "home");
        assert_eq!(nav.active_tab("tabs", Some(2)), 2);
    }

    #[test]
    fn explicit_initial_screen_wins() {
        let nav = NavigationState::for_schema(&two_screens(), Some("addTask"));
        assert_eq!(nav.current_screen_id(), "addTask");
    }

    #[test]
    fn navigate_accepts_unknown_ids() {
        let mut nav = NavigationState::for_schema(&two_screens(), None);
        nav.navigate("ghost");
        assert_eq!(nav.current_screen_id(), "ghost");
    }

    #[test]
    fn tab_default_then_selection() {
        let mut nav = NavigationState::new("home");
        assert_eq!(nav.active_tab("filters", None), 0);
        assert_eq!(nav.active_tab("filters", Some(1)), 1);

        nav.set_active_tab("filters", 0);
        assert_eq!(nav.active_tab("filters", Some(1)), 0);
        assert_eq!(nav.current_screen_id(), "home");
    }

    #[test]
    fn tab_selection_is_per_element() {
        let mut nav = NavigationState::new("home");
        nav.set_active_tab("a", 2);
        assert_eq!(nav.active_tab("a", None), 2);
        assert_eq!(nav.active_tab("b", Some(1)), 1);
    }

    #[test]
    fn reset_clears_tabs_and_screen() {
        let schema = two_screens();
        let mut nav = NavigationState::for_schema(&schema, None);
        nav.navigate("addTask");
        nav.set_active_tab("a", 3);
        nav.reset(&schema, None);
        assert_eq!(nav, NavigationState::new("home"));
    }
}
