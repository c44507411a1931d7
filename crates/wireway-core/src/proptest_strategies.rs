//! Proptest strategies for schema property tests
//!
//! Generates small, well-formed schemas with a controllable set of screen
//! ids, plus navigation scripts drawn from those ids.

use proptest::prelude::*;

use crate::schema::*;

/// Screen ids: short, unique, ASCII.
pub fn arb_screen_ids() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z]{1,8}", 1..6).prop_map(|ids| {
        let mut ids: Vec<String> = ids.into_iter().collect();
        ids.sort();
        ids
    })
}

pub fn arb_label() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,11}"
}

/// Tabs element with 1..5 labels and an optional default inside range.
pub fn arb_tabs(id: String) -> impl Strategy<Value = Tabs> {
    prop::collection::vec(arb_label(), 1..5).prop_flat_map(move |tabs| {
        let len = tabs.len();
        let id = id.clone();
        prop::option::of(0..len).prop_map(move |default_active_tab| Tabs {
            id: id.clone(),
            tabs: tabs.clone(),
            default_active_tab,
            ..Default::default()
        })
    })
}

/// Button optionally targeting one of `screen_ids`.
pub fn arb_button(id: String, screen_ids: Vec<String>) -> impl Strategy<Value = Button> {
    (arb_label(), prop::option::of(prop::sample::select(screen_ids))).prop_map(
        move |(text, target)| Button {
            id: id.clone(),
            text,
            target,
            ..Default::default()
        },
    )
}

/// A schema whose screens are `screen_ids`, each with a header, a tabs
/// element and a button; every target references an existing screen.
pub fn arb_schema() -> impl Strategy<Value = WireframeSchema> {
    arb_screen_ids().prop_flat_map(|ids| {
        let screens: Vec<_> = ids
            .iter()
            .map(|id| {
                let id = id.clone();
                (
                    arb_label(),
                    arb_tabs(format!("{id}-tabs")),
                    arb_button(format!("{id}-go"), ids.clone()),
                )
                    .prop_map(move |(title, tabs, button)| {
                        Screen::new(
                            id.clone(),
                            title.clone(),
                            vec![
                                Element::Header(Header {
                                    id: format!("{id}-header"),
                                    title,
                                    ..Default::default()
                                }),
                                Element::Tabs(tabs),
                                Element::Button(button),
                            ],
                        )
                    })
            })
            .collect();
        screens.prop_map(WireframeSchema::new)
    })
}

/// A schema plus a sequence of navigation targets drawn from its screen ids.
pub fn arb_schema_with_route() -> impl Strategy<Value = (WireframeSchema, Vec<String>)> {
    arb_schema().prop_flat_map(|schema| {
        let ids: Vec<String> = schema.screen_ids().map(str::to_owned).collect();
        let route = prop::collection::vec(prop::sample::select(ids), 0..12);
        (Just(schema), route)
    })
}
