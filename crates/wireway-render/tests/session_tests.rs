use std::sync::Arc;

use wireway_core::{parse_schema, WireframeSchema};
use wireway_oil::{render_plain, FocusContext, InputAction};
use wireway_render::{EditOutcome, Interaction, Session};

const TODO_APP: &str = include_str!("../../wireway-core/tests/fixtures/todo_app.json");

fn todo_app() -> Arc<WireframeSchema> {
    Arc::new(parse_schema(TODO_APP).unwrap())
}

fn plain(session: &Session) -> String {
    render_plain(&session.frame(&FocusContext::new()).tree, 40)
}

#[test]
fn starts_on_first_screen_or_explicit_initial() {
    assert_eq!(Session::new(todo_app(), None).current_screen_id(), "home");
    assert_eq!(
        Session::new(todo_app(), Some("settings".into())).current_screen_id(),
        "settings"
    );
}

#[test]
fn activating_add_button_navigates() {
    let mut session = Session::new(todo_app(), None);
    let applied = session.activate("homeHeader/add");
    assert_eq!(applied, Some(Interaction::Navigate("addTask".into())));
    assert_eq!(session.current_screen_id(), "addTask");
}

#[test]
fn unwired_key_changes_nothing() {
    let mut session = Session::new(todo_app(), None);
    assert_eq!(session.activate("todoList/task2"), None);
    assert_eq!(session.current_screen_id(), "home");
}

#[test]
fn tab_selection_survives_navigation() {
    let mut session = Session::new(todo_app(), None);
    session.activate("filterTabs/tab/2");
    session.activate("navBar/2");
    session.activate("navBar/0");
    assert_eq!(session.navigation().active_tab("filterTabs", Some(0)), 2);
    assert!(plain(&session).contains("[Upcoming]"));
}

#[test]
fn checkbox_toggles_without_navigating() {
    let mut session = Session::new(todo_app(), None);
    session.activate("todoList/task1/check");
    assert_eq!(session.current_screen_id(), "home");
    assert!(session.widgets().is_checked("todoList", "task1", false));
    assert!(plain(&session).contains("[x]"));

    session.activate("todoList/task1/check");
    assert!(!session.widgets().is_checked("todoList", "task1", false));
}

#[test]
fn activating_item_navigates_without_toggling() {
    let mut session = Session::new(todo_app(), None);
    session.activate("todoList/task1");
    assert_eq!(session.current_screen_id(), "taskDetail");
    assert!(!session.widgets().is_checked("todoList", "task1", false));
    assert!(plain(&session).contains("Screen not found"));
}

#[test]
fn typing_into_a_field_updates_only_widget_state() {
    let mut session = Session::new(todo_app(), Some("addTask".into()));
    session.activate("addTaskForm/field/taskTitle");
    assert!(session.is_editing());

    for c in "Milk".chars() {
        assert_eq!(session.edit(InputAction::Insert(c)), EditOutcome::Changed);
    }
    assert_eq!(session.edit(InputAction::Submit), EditOutcome::Finished);
    assert!(!session.is_editing());

    assert_eq!(
        session
            .widgets()
            .field_text("addTaskForm", "taskTitle")
            .map(|b| b.content()),
        Some("Milk")
    );
    assert!(plain(&session).contains("Milk"));
    assert_eq!(session.export(), &parse_schema(TODO_APP).unwrap());
}

#[test]
fn select_cycles_through_options() {
    let mut session = Session::new(todo_app(), Some("addTask".into()));
    session.activate("addTaskForm/field/category");
    assert!(plain(&session).contains("Work"));
    session.activate("addTaskForm/field/category");
    assert!(plain(&session).contains("Personal"));
    for _ in 0..3 {
        session.activate("addTaskForm/field/category");
    }
    assert_eq!(
        session.widgets().option_index("addTaskForm", "category"),
        Some(0)
    );
}

#[test]
fn select_starts_after_its_default_value() {
    let schema = parse_schema(
        r#"{"screens": [{"id": "f", "elements": [{"type": "form", "id": "prefs", "fields": [
            {"type": "select", "id": "size", "label": "Size", "options": ["S", "M", "L"], "defaultValue": "M"}
        ]}]}]}"#,
    )
    .unwrap();
    let mut session = Session::new(Arc::new(schema), None);
    assert!(plain(&session).contains('M'));
    session.activate("prefs/field/size");
    assert_eq!(session.widgets().option_index("prefs", "size"), Some(2));
}

#[test]
fn field_edit_is_seeded_from_default_value() {
    let schema = parse_schema(
        r#"{"screens": [{"id": "f", "elements": [{"type": "form", "id": "profile", "fields": [
            {"type": "textInput", "id": "name", "label": "Name", "defaultValue": "Ada"}
        ]}]}]}"#,
    )
    .unwrap();
    let mut session = Session::new(Arc::new(schema), None);
    session.activate("profile/field/name");
    session.edit(InputAction::Insert('!'));
    assert_eq!(
        session
            .widgets()
            .field_text("profile", "name")
            .map(|b| b.content()),
        Some("Ada!")
    );
}

#[test]
fn navigating_away_stops_editing() {
    let mut session = Session::new(todo_app(), None);
    session.activate("searchBar");
    assert!(session.is_editing());
    session.navigate("settings");
    assert!(!session.is_editing());
    assert_eq!(session.edit(InputAction::Insert('x')), EditOutcome::Ignored);
}

#[test]
fn replacing_schema_resets_state() {
    let mut session = Session::new(todo_app(), None);
    session.activate("filterTabs/tab/1");
    session.activate("navBar/1");

    assert!(session.replace_schema(todo_app(), false));
    assert_eq!(session.current_screen_id(), "home");
    assert_eq!(session.navigation().active_tab("filterTabs", Some(0)), 0);
}

#[test]
fn replacing_schema_can_keep_the_current_screen() {
    let mut session = Session::new(todo_app(), None);
    session.activate("navBar/2");
    assert!(session.replace_schema(todo_app(), true));
    assert_eq!(session.current_screen_id(), "settings");

    let only_home = Arc::new(
        parse_schema(r#"{"screens": [{"id": "home", "elements": []}]}"#).unwrap(),
    );
    assert!(session.replace_schema(only_home, true));
    assert_eq!(session.current_screen_id(), "home");
}

#[test]
fn replacing_with_the_same_snapshot_is_a_no_op() {
    let schema = todo_app();
    let mut session = Session::new(Arc::clone(&schema), None);
    session.navigate("settings");
    assert!(!session.replace_schema(schema, false));
    assert_eq!(session.current_screen_id(), "settings");
}

#[test]
fn clicking_a_tab_sets_only_that_tabs_index() {
    let schema = parse_schema(
        r#"{"screens": [{"id": "home", "elements": [
            {"type": "tabs", "id": "filters", "tabs": ["All", "Today"], "defaultActiveTab": 1},
            {"type": "tabs", "id": "sort", "tabs": ["New", "Old"]}
        ]}]}"#,
    )
    .unwrap();
    let mut session = Session::new(Arc::new(schema), None);
    assert!(plain(&session).contains("[Today]"));

    assert_eq!(
        session.activate("filters/tab/0"),
        Some(Interaction::SelectTab {
            element_id: "filters".into(),
            index: 0,
        })
    );
    assert_eq!(session.navigation().active_tab("filters", Some(1)), 0);
    assert_eq!(session.navigation().active_tab("sort", Some(1)), 1);
    assert!(plain(&session).contains("[All]"));
    assert!(plain(&session).contains("[New]"));
}

#[test]
fn field_named_submit_leaves_submit_button_wired() {
    let schema = parse_schema(
        r#"{"screens": [
            {"id": "f", "elements": [{"type": "form", "id": "signup", "submitTarget": "done", "fields": [
                {"type": "textInput", "id": "submit", "label": "Submit as"}
            ]}]},
            {"id": "done", "elements": []}
        ]}"#,
    )
    .unwrap();
    let mut session = Session::new(Arc::new(schema), None);

    session.activate("signup/field/submit");
    assert!(session.is_editing());
    assert_eq!(session.current_screen_id(), "f");

    assert_eq!(
        session.activate("signup/submit"),
        Some(Interaction::Navigate("done".into()))
    );
    assert_eq!(session.current_screen_id(), "done");
}
