use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::{is_false, restore_tag, tag_stripped, tagged_value};

/// One field inside a form element, tagged by its own `type`.
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    TextInput(FieldSpec),
    TextArea(FieldSpec),
    Select(SelectField),
    DateInput(FieldSpec),
    /// Field whose `type` is missing, unknown, or whose body failed to decode.
    Unrecognized(RawField),
}

/// Properties every field kind shares.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
    /// Keys the model does not name, kept so export is lossless.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectField {
    #[serde(flatten)]
    pub spec: FieldSpec,
    #[serde(default)]
    pub options: Vec<String>,
}

/// Declarative validation hints. Displayed, never enforced.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl DefaultValue {
    /// Initial text shown in the field.
    pub fn as_text(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl SelectField {
    /// Position of the default value among the options, if it is one.
    pub fn default_index(&self) -> Option<usize> {
        let default = self.spec.default_value.as_ref()?.as_text();
        self.options.iter().position(|option| *option == default)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawField {
    pub kind: Option<String>,
    pub value: Value,
    pub error: Option<String>,
}

impl FormField {
    pub fn from_value(value: Value) -> Self {
        let kind = value.get("type").and_then(Value::as_str).map(str::to_owned);
        let (value, tag) = tag_stripped(value);
        let decoded = match kind.as_deref() {
            Some("textInput") => FieldSpec::deserialize(&value).map(Self::TextInput),
            Some("textArea") => FieldSpec::deserialize(&value).map(Self::TextArea),
            Some("select") => SelectField::deserialize(&value).map(Self::Select),
            Some("dateInput") => FieldSpec::deserialize(&value).map(Self::DateInput),
            _ => {
                return Self::Unrecognized(RawField {
                    kind,
                    value: restore_tag(value, tag),
                    error: None,
                })
            }
        };
        decoded.unwrap_or_else(|err| {
            Self::Unrecognized(RawField {
                kind,
                value: restore_tag(value, tag),
                error: Some(err.to_string()),
            })
        })
    }

    pub fn kind(&self) -> &str {
        match self {
            Self::TextInput(_) => "textInput",
            Self::TextArea(_) => "textArea",
            Self::Select(_) => "select",
            Self::DateInput(_) => "dateInput",
            Self::Unrecognized(raw) => raw.kind.as_deref().unwrap_or(""),
        }
    }

    /// Shared properties, absent for unrecognized fields.
    pub fn spec(&self) -> Option<&FieldSpec> {
        match self {
            Self::TextInput(spec) | Self::TextArea(spec) | Self::DateInput(spec) => Some(spec),
            Self::Select(select) => Some(&select.spec),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Unrecognized(raw) => raw.value.get("id").and_then(Value::as_str).unwrap_or(""),
            other => other.spec().map(|spec| spec.id.as_str()).unwrap_or(""),
        }
    }

    fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::TextInput(spec) => tagged_value("textInput", spec),
            Self::TextArea(spec) => tagged_value("textArea", spec),
            Self::Select(select) => tagged_value("select", select),
            Self::DateInput(spec) => tagged_value("dateInput", spec),
            Self::Unrecognized(raw) => Ok(raw.value.clone()),
        }
    }
}

impl<'de> Deserialize<'de> for FormField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

impl Serialize for FormField {
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
    fn select_default_index_matches_option_text() {
        let field = FormField::from_value(json!({
            "type": "select", "id": "c", "label": "C",
            "options": ["Low", "High"], "defaultValue": "High"
        }));
        match field {
            FormField::Select(select) => assert_eq!(select.default_index(), Some(1)),
            other => panic!("Expected select, got {other:?}"),
        }
    }

    #[test]
    fn select_keeps_options_in_order() {
        let field = FormField::from_value(json!({
            "type": "select",
            "id": "category",
            "label": "Category",
            "options": ["Work", "Personal", "Shopping"]
        }));
        match field {
            FormField::Select(select) => {
                assert_eq!(select.spec.id, "category");
                assert_eq!(select.options, vec!["Work", "Personal", "Shopping"]);
            }
            other => panic!("Expected select field, got {other:?}"),
        }
    }

    #[test]
    fn unknown_field_type_is_kept_raw() {
        let raw = json!({"type": "slider", "id": "volume"});
        let field = FormField::from_value(raw.clone());
        assert_eq!(field.kind(), "slider");
        assert_eq!(field.id(), "volume");
        assert_eq!(serde_json::to_value(&field).unwrap(), raw);
    }

    #[test]
    fn default_value_accepts_scalars() {
        let field = FormField::from_value(json!({
            "type": "textInput", "id": "qty", "label": "Qty", "defaultValue": 3
        }));
        let spec = field.spec().unwrap();
        assert_eq!(spec.default_value.as_ref().unwrap().as_text(), "3");
    }

    #[test]
    fn serialization_restores_type_tag() {
        let field = FormField::DateInput(FieldSpec {
            id: "due".into(),
            label: "Due".into(),
            ..Default::default()
        });
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["type"], "dateInput");
        assert_eq!(FormField::from_value(value), field);
    }
}
