//! Wireframe schema model
//!
//! The schema is immutable input: hosts build it (usually through
//! [`crate::validate`]) and the engine only ever reads it.
//!
//! ```text
//! WireframeSchema
//!   └─ Screen (id, name, layout?, transitions?)
//!        └─ Element (tagged by `type`)
//!             └─ FormField (tagged by `type`, inside `form`)
//! ```

mod element;
mod form;

pub use element::*;
pub use form::*;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root value: an ordered list of screens. The first screen is the entry point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WireframeSchema {
    pub screens: Vec<Screen>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Screen {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub elements: Vec<Element>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<ScreenLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transitions: Option<ScreenTransitions>,
    /// Keys the model does not name, kept so export is lossless.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Presentation hints carried through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenTransitions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WireframeSchema {
    pub fn new(screens: Vec<Screen>) -> Self {
        Self {
            screens,
            extra: Map::new(),
        }
    }

    /// Resolve a screen id. Total: a dangling id yields `None`, never an error.
    /// With duplicate ids the first screen wins.
    pub fn screen(&self, id: &str) -> Option<&Screen> {
        self.screens.iter().find(|screen| screen.id == id)
    }

    pub fn first_screen(&self) -> Option<&Screen> {
        self.screens.first()
    }

    pub fn contains_screen(&self, id: &str) -> bool {
        self.screen(id).is_some()
    }

    pub fn screen_ids(&self) -> impl Iterator<Item = &str> {
        self.screens.iter().map(|screen| screen.id.as_str())
    }
}

impl Screen {
    pub fn new(id: impl Into<String>, name: impl Into<String>, elements: Vec<Element>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            elements,
            layout: None,
            transitions: None,
            extra: Map::new(),
        }
    }
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

/// Split the `type` discriminant off an object so variant structs decode
/// without it landing in their `extra` keys.
pub(crate) fn tag_stripped(mut value: Value) -> (Value, Option<Value>) {
    let tag = value.as_object_mut().and_then(|map| map.remove("type"));
    (value, tag)
}

/// Undo [`tag_stripped`] for values kept raw.
pub(crate) fn restore_tag(mut value: Value, tag: Option<Value>) -> Value {
    if let (Value::Object(map), Some(tag)) = (&mut value, tag) {
        map.insert("type".to_owned(), tag);
    }
    value
}

/// Serialize `body` and stamp the `type` discriminant onto the resulting object.
pub(crate) fn tagged_value<T: Serialize>(tag: &str, body: &T) -> Result<Value, serde_json::Error> {
    let mut value = serde_json::to_value(body)?;
    if let Value::Object(map) = &mut value {
        map.insert("type".to_owned(), Value::String(tag.to_owned()));
    }
    Ok(value)
}
