use wireway_core::schema::*;
use wireway_core::{lint, parse_schema, LintFinding, SchemaEditor};

const TODO_APP: &str = include_str!("fixtures/todo_app.json");
const NEWS_APP: &str = include_str!("fixtures/news_app.json");

fn element<'a>(schema: &'a WireframeSchema, screen: &str, id: &str) -> Option<&'a Element> {
    schema
        .screen(screen)?
        .elements
        .iter()
        .find(|element| element.id() == id)
}

#[test]
fn todo_app_decodes_every_variant() {
    let schema = parse_schema(TODO_APP).expect("fixture is valid");
    let ids: Vec<_> = schema.screen_ids().collect();
    assert_eq!(ids, vec!["home", "addTask", "categories", "settings"]);

    let form = match element(&schema, "addTask", "addTaskForm") {
        Some(Element::Form(form)) => form,
        other => panic!("Expected form, got {other:?}"),
    };
    let kinds: Vec<_> = form.fields.iter().map(FormField::kind).collect();
    assert_eq!(kinds, vec!["textInput", "textArea", "dateInput", "select"]);
    assert_eq!(form.submit_target.as_deref(), Some("home"));
}

#[test]
fn todo_app_round_trips_to_an_equal_schema() {
    let schema = parse_schema(TODO_APP).unwrap();
    let text = serde_json::to_string(&schema).unwrap();
    let reparsed = parse_schema(&text).unwrap();
    assert_eq!(reparsed, schema);

    // false flags are omitted on the way out; everything else keeps its wire name
    let emitted: serde_json::Value = serde_json::from_str(&text).unwrap();
    let form = &emitted["screens"][1]["elements"][1];
    assert_eq!(form["type"], "form");
    assert_eq!(form["submitTarget"], "home");
    assert_eq!(form["fields"][3]["options"][2], "Shopping");
    assert!(emitted["screens"][0]["elements"][3]["items"][0].get("checked").is_none());
}

#[test]
fn news_app_round_trips_including_unknown_elements() {
    let schema = parse_schema(NEWS_APP).unwrap();
    let news = schema.screen("news").unwrap();
    assert!(matches!(news.elements.last(), Some(Element::Unrecognized(_))));

    let pretty = serde_json::to_string_pretty(&schema).unwrap();
    assert_eq!(parse_schema(&pretty).unwrap(), schema);

    let original: serde_json::Value = serde_json::from_str(NEWS_APP).unwrap();
    let emitted: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    let original_ticker = &original["screens"][0]["elements"][6];
    assert_eq!(&emitted["screens"][0]["elements"][6], original_ticker);
}

#[test]
fn export_emits_the_input_document_unchanged() {
    let editor = SchemaEditor::from_text(NEWS_APP).unwrap();
    let emitted: serde_json::Value =
        serde_json::from_str(&editor.export_pretty().unwrap()).unwrap();
    let original: serde_json::Value = serde_json::from_str(NEWS_APP).unwrap();

    let header = &emitted["screens"][0]["elements"][0];
    assert_eq!(header["actions"][0]["type"], "button");
    assert_eq!(header["actions"][0]["tooltip"], "Reload");
    let card = &emitted["screens"][0]["elements"][2];
    assert_eq!(card["elevation"], 2);
    assert_eq!(card["actions"][0]["type"], "button");
    assert_eq!(emitted["version"], 2);

    assert_eq!(emitted, original);
}

#[test]
fn unmodelled_keys_stay_out_of_the_tag_and_fields() {
    let schema = parse_schema(NEWS_APP).unwrap();
    let card = match element(&schema, "news", "featuredNews") {
        Some(Element::Card(card)) => card,
        other => panic!("Expected card, got {other:?}"),
    };
    let extra: Vec<_> = card.extra.keys().map(String::as_str).collect();
    assert_eq!(extra, vec!["elevation"]);
    assert!(card.actions[0].extra.is_empty());
}

#[test]
fn todo_app_lint_flags_only_the_missing_detail_screen() {
    let schema = parse_schema(TODO_APP).unwrap();
    let findings = lint(&schema);
    assert_eq!(findings.len(), 1);
    assert!(matches!(
        &findings[0],
        LintFinding::DanglingTarget { target, element_id, .. }
            if target == "taskDetail" && element_id == "todoList"
    ));
}

#[test]
fn editor_export_matches_fixture_structure() {
    let editor = SchemaEditor::from_text(TODO_APP).unwrap();
    let exported = editor.export_pretty().unwrap();
    assert_eq!(parse_schema(&exported).unwrap(), **editor.schema());
}
