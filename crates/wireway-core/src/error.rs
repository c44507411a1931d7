//! Schema error types

use thiserror::Error;

/// Reasons a raw value cannot be used as a wireframe schema.
///
/// Each shape rule has its own variant so hosts can show a message that
/// names exactly which rule failed.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Input text is not valid JSON
    #[error("invalid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// Root value has no `screens` array
    #[error("schema must have a `screens` array")]
    MissingScreens,

    /// `screens` is present but empty
    #[error("schema must contain at least one screen (empty `screens`)")]
    EmptyScreens,

    /// A screen has no `id`
    #[error("screen at index {index} is missing an `id`")]
    ScreenMissingId {
        /// Position of the offending screen
        index: usize,
    },

    /// A screen has no `elements` array
    #[error("screen at index {index} is missing an `elements` array")]
    ScreenMissingElements {
        /// Position of the offending screen
        index: usize,
    },

    /// Passed the shape rules but a screen-level field has the wrong type
    #[error("schema could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),

    /// Schema could not be written back out
    #[error("schema could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Specialized Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

impl SchemaError {
    /// Short machine-readable name of the violated rule.
    pub fn rule(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse",
            Self::MissingScreens => "missing-screens",
            Self::EmptyScreens => "empty-screens",
            Self::ScreenMissingId { .. } => "screen-missing-id",
            Self::ScreenMissingElements { .. } => "screen-missing-elements",
            Self::Decode(_) => "decode",
            Self::Serialize(_) => "serialize",
        }
    }

    /// True for failures of the raw text itself rather than its shape.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_errors_name_their_rule() {
        assert_eq!(SchemaError::EmptyScreens.rule(), "empty-screens");
        assert_eq!(
            SchemaError::ScreenMissingId { index: 2 }.to_string(),
            "screen at index 2 is missing an `id`"
        );
    }

    #[test]
    fn parse_error_carries_parser_message() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SchemaError::Parse(err);
        assert!(err.is_parse_error());
        assert!(err.to_string().starts_with("invalid JSON: "));
        assert!(err.to_string().contains("EOF"));
    }
}
