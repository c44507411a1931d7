//! Text-to-schema boundary with a last-good-state policy.
//!
//! Every edit is parsed and validated. A failing edit records its error but
//! keeps the previous schema, so a renderer fed from [`SchemaEditor::schema`]
//! never sees a torn value. A passing edit swaps in a new `Arc`, which is the
//! identity change renderers use as their re-render trigger.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{SchemaError, SchemaResult};
use crate::schema::WireframeSchema;
use crate::validate::parse_schema;

#[derive(Debug)]
pub struct SchemaEditor {
    text: String,
    schema: Arc<WireframeSchema>,
    error: Option<SchemaError>,
    revision: u64,
}

impl SchemaEditor {
    /// Start from text that must already be a valid schema.
    pub fn from_text(text: impl Into<String>) -> SchemaResult<Self> {
        let text = text.into();
        let schema = parse_schema(&text)?;
        Ok(Self {
            text,
            schema: Arc::new(schema),
            error: None,
            revision: 0,
        })
    }

    /// Start from a schema value; the text buffer is its pretty JSON form.
    pub fn from_schema(schema: WireframeSchema) -> SchemaResult<Self> {
        let text = serde_json::to_string_pretty(&schema).map_err(SchemaError::Serialize)?;
        Ok(Self {
            text,
            schema: Arc::new(schema),
            error: None,
            revision: 0,
        })
    }

    /// Replace the text buffer. Returns `true` when the schema changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        self.text = text.into();
        match parse_schema(&self.text) {
            Ok(schema) => {
                self.schema = Arc::new(schema);
                self.error = None;
                self.revision += 1;
                debug!(revision = self.revision, "schema replaced");
                true
            }
            Err(err) => {
                warn!(rule = err.rule(), %err, "edit rejected, keeping last good schema");
                self.error = Some(err);
                false
            }
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Last schema that passed validation.
    pub fn schema(&self) -> &Arc<WireframeSchema> {
        &self.schema
    }

    /// Error from the most recent edit, cleared by the next good one.
    pub fn error(&self) -> Option<&SchemaError> {
        self.error.as_ref()
    }

    /// Bumped once per accepted edit.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Value handed to a save collaborator.
    pub fn export(&self) -> &WireframeSchema {
        &self.schema
    }

    pub fn export_pretty(&self) -> SchemaResult<String> {
        serde_json::to_string_pretty(self.schema.as_ref()).map_err(SchemaError::Serialize)
    }
}
