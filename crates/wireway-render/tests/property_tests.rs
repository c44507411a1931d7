//! Property tests over generated schemas.

use proptest::prelude::*;
use wireway_core::proptest_strategies::{arb_schema, arb_schema_with_route};
use wireway_core::NavigationState;
use wireway_oil::{render_plain, FocusContext};
use wireway_render::{render, Interaction, RenderEngine, WidgetState};

proptest! {
    #[test]
    fn prop_render_is_total(
        (schema, route) in arb_schema_with_route(),
        ghost in "[A-Z]{1,6}",
    ) {
        let engine = RenderEngine::new();
        let widgets = WidgetState::new();
        let focus = FocusContext::new();
        let mut nav = NavigationState::for_schema(&schema, None);
        for target in route {
            nav.navigate(target);
            let frame = engine.render_screen(&schema, &nav, &widgets, &focus);
            prop_assert!(!frame.is_not_found());
        }
        // Generated ids are lowercase, so this never matches.
        nav.navigate(ghost);
        let frame = engine.render_screen(&schema, &nav, &widgets, &focus);
        prop_assert!(frame.is_not_found());
    }

    #[test]
    fn prop_tabs_default_shows_bracketed(schema in arb_schema()) {
        for screen in &schema.screens {
            let frame = render(&schema, Some(screen.id.as_str()));
            let plain = render_plain(&frame.tree, 0);
            for element in &screen.elements {
                if let wireway_core::Element::Tabs(tabs) = element {
                    let active = tabs.default_active_tab.unwrap_or(0);
                    let expected = format!("[{}]", tabs.tabs[active]);
                    prop_assert!(plain.contains(&expected), "{} not in {}", expected, plain);
                }
            }
        }
    }

    #[test]
    fn prop_wired_targets_come_from_schema(schema in arb_schema()) {
        let frame = render(&schema, None);
        for (_, interaction) in frame.wiring.iter() {
            if let Interaction::Navigate(target) = interaction {
                prop_assert!(schema.contains_screen(target));
            }
        }
    }
}
