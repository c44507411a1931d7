//! Advisory checks that never block rendering.
//!
//! Schemas are edited incrementally, so dangling targets and duplicate ids
//! are expected to show up transiently. Hosts can surface these findings
//! next to the preview; the engine itself ignores them.

use std::collections::HashSet;
use std::fmt;

use crate::schema::{Element, WireframeSchema};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintFinding {
    DuplicateScreenId {
        screen_id: String,
    },
    DuplicateElementId {
        screen_id: String,
        element_id: String,
    },
    DanglingTarget {
        screen_id: String,
        element_id: String,
        field: &'static str,
        target: String,
    },
    UnrecognizedElement {
        screen_id: String,
        element_id: String,
        kind: String,
        error: Option<String>,
    },
}

impl fmt::Display for LintFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateScreenId { screen_id } => {
                write!(f, "duplicate screen id `{screen_id}` (first one wins)")
            }
            Self::DuplicateElementId {
                screen_id,
                element_id,
            } => write!(f, "{screen_id}: duplicate element id `{element_id}`"),
            Self::DanglingTarget {
                screen_id,
                element_id,
                field,
                target,
            } => write!(
                f,
                "{screen_id}/{element_id}: {field} points at unknown screen `{target}`"
            ),
            Self::UnrecognizedElement {
                screen_id,
                element_id,
                kind,
                error,
            } => {
                let kind = if kind.is_empty() { "<missing>" } else { kind };
                write!(f, "{screen_id}/{element_id}: unrecognized element type `{kind}`")?;
                if let Some(error) = error {
                    write!(f, " ({error})")?;
                }
                Ok(())
            }
        }
    }
}

/// Collect every finding for `schema`, in screen and element order.
pub fn lint(schema: &WireframeSchema) -> Vec<LintFinding> {
    let mut findings = Vec::new();
    let mut seen_screens = HashSet::new();

    for screen in &schema.screens {
        if !seen_screens.insert(screen.id.as_str()) {
            findings.push(LintFinding::DuplicateScreenId {
                screen_id: screen.id.clone(),
            });
        }

        let mut seen_elements = HashSet::new();
        for element in &screen.elements {
            let element_id = element.id();
            if !element_id.is_empty() && !seen_elements.insert(element_id) {
                findings.push(LintFinding::DuplicateElementId {
                    screen_id: screen.id.clone(),
                    element_id: element_id.to_owned(),
                });
            }

            if let Element::Unrecognized(raw) = element {
                findings.push(LintFinding::UnrecognizedElement {
                    screen_id: screen.id.clone(),
                    element_id: element_id.to_owned(),
                    kind: raw.kind.clone().unwrap_or_default(),
                    error: raw.error.clone(),
                });
            }

            for target in element.targets() {
                if !schema.contains_screen(target.screen_id) {
                    findings.push(LintFinding::DanglingTarget {
                        screen_id: screen.id.clone(),
                        element_id: element_id.to_owned(),
                        field: target.field,
                        target: target.screen_id.to_owned(),
                    });
                }
            }
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::parse_schema;

    #[test]
    fn clean_schema_has_no_findings() {
        let schema = parse_schema(
            r#"{"screens": [
                {"id": "a", "elements": [{"type": "button", "id": "b", "text": "B", "target": "b"}]},
                {"id": "b", "elements": []}
            ]}"#,
        )
        .unwrap();
        assert!(lint(&schema).is_empty());
    }

    #[test]
    fn reports_dangling_target_with_field() {
        let schema = parse_schema(
            r#"{"screens": [{"id": "home", "elements": [
                {"type": "header", "id": "h", "hasAddButton": true, "addButtonTarget": "addTask"}
            ]}]}"#,
        )
        .unwrap();
        let findings = lint(&schema);
        assert_eq!(
            findings,
            vec![LintFinding::DanglingTarget {
                screen_id: "home".into(),
                element_id: "h".into(),
                field: "addButtonTarget",
                target: "addTask".into(),
            }]
        );
        assert_eq!(
            findings[0].to_string(),
            "home/h: addButtonTarget points at unknown screen `addTask`"
        );
    }

    #[test]
    fn reports_duplicates_and_unknown_types() {
        let schema = parse_schema(
            r#"{"screens": [
                {"id": "a", "elements": [
                    {"type": "divider", "id": "d"},
                    {"type": "divider", "id": "d"},
                    {"type": "sparkline", "id": "s"}
                ]},
                {"id": "a", "elements": []}
            ]}"#,
        )
        .unwrap();
        let findings = lint(&schema);
        assert!(findings.contains(&LintFinding::DuplicateScreenId {
            screen_id: "a".into()
        }));
        assert!(findings.contains(&LintFinding::DuplicateElementId {
            screen_id: "a".into(),
            element_id: "d".into()
        }));
        assert!(findings
            .iter()
            .any(|f| matches!(f, LintFinding::UnrecognizedElement { kind, .. } if kind == "sparkline")));
    }
}
