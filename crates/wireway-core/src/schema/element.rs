//! Element variants.
//!
//! [`Element`] is a closed enum keyed by the JSON `type` field. Anything the
//! decoder does not understand (missing tag, unknown tag, or a known tag with
//! fields of the wrong shape) becomes [`Element::Unrecognized`], which keeps
//! the raw value so the schema still validates, renders the rest of the
//! screen, and serializes back out unchanged.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::form::FormField;
use super::{is_false, restore_tag, tag_stripped, tagged_value};

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Header(Header),
    SearchBar(SearchBar),
    Tabs(Tabs),
    List(List),
    Form(Form),
    NavBar(NavBar),
    TextBlock(TextBlock),
    Button(Button),
    Card(Card),
    Image(Image),
    Divider(Divider),
    Unrecognized(RawElement),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub has_back_button: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub has_add_button: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_button_target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_button_target: Option<String>,
    #[serde(default, with = "button_list", skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Button>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub fixed: bool,
    /// Keys the model does not name, kept so export is lossless.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchBar {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Tab strip. The active index is navigation state, not part of the element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tabs {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub tabs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_active_tab: Option<usize>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct List {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub items: Vec<ListItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub has_checkbox: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Badge {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub fields: Vec<FormField>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub submit_button_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_target: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavBar {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub buttons: Vec<NavButton>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavButton {
    #[serde(default)]
    pub label: String,
    pub target: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextVariant {
    H1,
    Title,
    Subtitle,
    #[default]
    Body,
    Caption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<TextVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outlined,
    Text,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Button {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ButtonVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardDirection {
    Horizontal,
    #[default]
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, with = "button_list", skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Button>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<CardDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    Cover,
    Contain,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit: Option<ImageFit>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub clickable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Divider {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An element the decoder could not map to a known variant.
#[derive(Debug, Clone, PartialEq)]
pub struct RawElement {
    /// The `type` tag, if the value had a string one.
    pub kind: Option<String>,
    pub value: Value,
    /// Decode failure for known tags with malformed fields.
    pub error: Option<String>,
}

/// A screen reference held by an element, with the field it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetRef<'a> {
    pub field: &'static str,
    pub screen_id: &'a str,
}

impl Element {
    pub fn from_value(value: Value) -> Self {
        let kind = value.get("type").and_then(Value::as_str).map(str::to_owned);
        let (value, tag) = tag_stripped(value);
        let decoded = match kind.as_deref() {
            Some("header") => Header::deserialize(&value).map(Self::Header),
            Some("searchBar") => SearchBar::deserialize(&value).map(Self::SearchBar),
            Some("tabs") => Tabs::deserialize(&value).map(Self::Tabs),
            Some("list") => List::deserialize(&value).map(Self::List),
            Some("form") => Form::deserialize(&value).map(Self::Form),
            Some("navBar") => NavBar::deserialize(&value).map(Self::NavBar),
            Some("textBlock") => TextBlock::deserialize(&value).map(Self::TextBlock),
            Some("button") => Button::deserialize(&value).map(Self::Button),
            Some("card") => Card::deserialize(&value).map(Self::Card),
            Some("image") => Image::deserialize(&value).map(Self::Image),
            Some("divider") => Divider::deserialize(&value).map(Self::Divider),
            _ => {
                return Self::Unrecognized(RawElement {
                    kind,
                    value: restore_tag(value, tag),
                    error: None,
                })
            }
        };
        decoded.unwrap_or_else(|err| {
            Self::Unrecognized(RawElement {
                kind,
                value: restore_tag(value, tag),
                error: Some(err.to_string()),
            })
        })
    }

    /// The discriminant as it appears on the wire.
    pub fn kind(&self) -> &str {
        match self {
            Self::Header(_) => "header",
            Self::SearchBar(_) => "searchBar",
            Self::Tabs(_) => "tabs",
            Self::List(_) => "list",
            Self::Form(_) => "form",
            Self::NavBar(_) => "navBar",
            Self::TextBlock(_) => "textBlock",
            Self::Button(_) => "button",
            Self::Card(_) => "card",
            Self::Image(_) => "image",
            Self::Divider(_) => "divider",
            Self::Unrecognized(raw) => raw.kind.as_deref().unwrap_or(""),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Header(e) => &e.id,
            Self::SearchBar(e) => &e.id,
            Self::Tabs(e) => &e.id,
            Self::List(e) => &e.id,
            Self::Form(e) => &e.id,
            Self::NavBar(e) => &e.id,
            Self::TextBlock(e) => &e.id,
            Self::Button(e) => &e.id,
            Self::Card(e) => &e.id,
            Self::Image(e) => &e.id,
            Self::Divider(e) => &e.id,
            Self::Unrecognized(raw) => raw.value.get("id").and_then(Value::as_str).unwrap_or(""),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Every screen id this element can navigate to, in render order.
    pub fn targets(&self) -> Vec<TargetRef<'_>> {
        let mut out = Vec::new();
        match self {
            Self::Header(h) => {
                push_target(&mut out, "backButtonTarget", h.back_button_target.as_ref());
                push_target(&mut out, "addButtonTarget", h.add_button_target.as_ref());
                for action in &h.actions {
                    push_target(&mut out, "actions.target", action.target.as_ref());
                }
            }
            Self::List(l) => {
                for item in &l.items {
                    push_target(&mut out, "items.target", item.target.as_ref());
                }
            }
            Self::Form(f) => push_target(&mut out, "submitTarget", f.submit_target.as_ref()),
            Self::NavBar(n) => {
                for button in &n.buttons {
                    push_target(&mut out, "buttons.target", Some(&button.target));
                }
            }
            Self::Button(b) => push_target(&mut out, "target", b.target.as_ref()),
            Self::Card(c) => {
                push_target(&mut out, "target", c.target.as_ref());
                for action in &c.actions {
                    push_target(&mut out, "actions.target", action.target.as_ref());
                }
            }
            Self::Image(i) => push_target(&mut out, "target", i.target.as_ref()),
            Self::SearchBar(_)
            | Self::Tabs(_)
            | Self::TextBlock(_)
            | Self::Divider(_)
            | Self::Unrecognized(_) => {}
        }
        out
    }

    fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::Header(e) => tagged_value("header", e),
            Self::SearchBar(e) => tagged_value("searchBar", e),
            Self::Tabs(e) => tagged_value("tabs", e),
            Self::List(e) => tagged_value("list", e),
            Self::Form(e) => tagged_value("form", e),
            Self::NavBar(e) => tagged_value("navBar", e),
            Self::TextBlock(e) => tagged_value("textBlock", e),
            Self::Button(e) => tagged_value("button", e),
            Self::Card(e) => tagged_value("card", e),
            Self::Image(e) => tagged_value("image", e),
            Self::Divider(e) => tagged_value("divider", e),
            Self::Unrecognized(raw) => Ok(raw.value.clone()),
        }
    }
}

fn push_target<'a>(out: &mut Vec<TargetRef<'a>>, field: &'static str, target: Option<&'a String>) {
    if let Some(screen_id) = target {
        out.push(TargetRef { field, screen_id });
    }
}

/// Action buttons nested in headers and cards keep `"type": "button"` on
/// the wire like top-level elements do.
mod button_list {
    use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    use super::{tag_stripped, tagged_value, Button};

    pub fn serialize<S: Serializer>(buttons: &[Button], serializer: S) -> Result<S::Ok, S::Error> {
        buttons
            .iter()
            .map(|button| tagged_value("button", button))
            .collect::<Result<Vec<_>, _>>()
            .map_err(<S::Error as ser::Error>::custom)?
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Button>, D::Error> {
        Vec::<Value>::deserialize(deserializer)?
            .into_iter()
            .map(|value| {
                let (value, _) = tag_stripped(value);
                Button::deserialize(value).map_err(<D::Error as de::Error>::custom)
            })
            .collect()
    }
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn header_decodes_camel_case_fields() {
        let element = Element::from_value(json!({
            "type": "header",
            "id": "homeHeader",
            "title": "My Tasks",
            "hasAddButton": true,
            "addButtonTarget": "addTask"
        }));
        match element {
            Element::Header(h) => {
                assert_eq!(h.title, "My Tasks");
                assert!(h.has_add_button);
                assert!(!h.has_back_button);
                assert_eq!(h.add_button_target.as_deref(), Some("addTask"));
            }
            other => panic!("Expected header, got {other:?}"),
        }
    }

    #[test]
    fn unknown_type_is_unrecognized_not_an_error() {
        let element = Element::from_value(json!({"type": "carousel", "id": "c1"}));
        assert!(!element.is_recognized());
        assert_eq!(element.kind(), "carousel");
        assert_eq!(element.id(), "c1");
    }

    #[test]
    fn missing_type_is_unrecognized() {
        let element = Element::from_value(json!({"id": "orphan"}));
        assert_eq!(element.kind(), "");
        assert!(!element.is_recognized());
    }

    #[test]
    fn malformed_known_type_keeps_decode_error() {
        let element = Element::from_value(json!({"type": "tabs", "id": "t", "tabs": "All"}));
        match element {
            Element::Unrecognized(raw) => {
                assert_eq!(raw.kind.as_deref(), Some("tabs"));
                assert!(raw.error.is_some());
            }
            other => panic!("Expected unrecognized element, got {other:?}"),
        }
    }

    #[test]
    fn nav_button_requires_target() {
        let element = Element::from_value(json!({
            "type": "navBar", "id": "nav", "buttons": [{"label": "Home"}]
        }));
        assert!(!element.is_recognized());
    }

    #[test]
    fn targets_lists_every_reference() {
        let element = Element::from_value(json!({
            "type": "header",
            "id": "h",
            "hasBackButton": true,
            "backButtonTarget": "home",
            "actions": [{"type": "button", "id": "share", "text": "Share", "target": "share"}]
        }));
        let targets: Vec<_> = element.targets().iter().map(|t| t.screen_id).collect();
        assert_eq!(targets, vec!["home", "share"]);
    }

    #[test]
    fn unrecognized_serializes_verbatim() {
        let raw = json!({"type": "map", "id": "m", "zoom": 4});
        let element = Element::from_value(raw.clone());
        assert_eq!(serde_json::to_value(&element).unwrap(), raw);
    }

    #[test]
    fn known_element_serializes_with_tag() {
        let element = Element::Button(Button {
            id: "go".into(),
            text: "Go".into(),
            target: Some("next".into()),
            ..Default::default()
        });
        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value, json!({"type": "button", "id": "go", "text": "Go", "target": "next"}));
    }
}
