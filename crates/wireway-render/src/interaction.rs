//! Interaction table.
//!
//! Rendering never mutates state. Each clickable node is registered here
//! under its focus key together with the [`Interaction`] it stands for; the
//! session applies that value when the key is activated.

use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    Navigate(String),
    SelectTab { element_id: String, index: usize },
    ToggleCheckbox { list_id: String, item_id: String },
    EditField { form_id: String, field_id: String },
    CycleOption { form_id: String, field_id: String },
    EditSearch { element_id: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wiring {
    entries: Vec<(String, Interaction)>,
}

impl Wiring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key`. A key that is already wired keeps its first
    /// interaction; returns false in that case.
    pub fn insert(&mut self, key: impl Into<String>, interaction: Interaction) -> bool {
        let key = key.into();
        if self.get(&key).is_some() {
            warn!(%key, "interaction key already wired, keeping the first");
            return false;
        }
        self.entries.push((key, interaction));
        true
    }

    pub fn get(&self, key: &str) -> Option<&Interaction> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, interaction)| interaction)
    }

    /// Keys in render order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Interaction)> {
        self.entries.iter().map(|(k, i)| (k.as_str(), i))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_registration_wins() {
        let mut wiring = Wiring::new();
        assert!(wiring.insert("nav/0", Interaction::Navigate("home".into())));
        assert!(!wiring.insert("nav/0", Interaction::Navigate("settings".into())));
        assert_eq!(wiring.get("nav/0"), Some(&Interaction::Navigate("home".into())));
        assert_eq!(wiring.len(), 1);
    }

    #[test]
    fn keys_keep_render_order() {
        let mut wiring = Wiring::new();
        wiring.insert("b", Interaction::EditSearch { element_id: "b".into() });
        wiring.insert("a", Interaction::EditSearch { element_id: "a".into() });
        assert_eq!(wiring.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    }
}
