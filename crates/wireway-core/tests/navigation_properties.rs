use proptest::prelude::*;
use wireway_core::proptest_strategies::*;
use wireway_core::schema::Element;
use wireway_core::NavigationState;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_initial_screen_is_first_declared(schema in arb_schema()) {
        let nav = NavigationState::for_schema(&schema, None);
        prop_assert_eq!(nav.current_screen_id(), schema.screens[0].id.as_str());
    }

    #[test]
    fn prop_current_screen_is_last_navigation((schema, route) in arb_schema_with_route()) {
        let mut nav = NavigationState::for_schema(&schema, None);
        for target in &route {
            nav.navigate(target.clone());
            prop_assert_eq!(nav.current_screen_id(), target.as_str());
            prop_assert!(schema.screen(nav.current_screen_id()).is_some());
        }
    }

    #[test]
    fn prop_tab_default_until_selected(schema in arb_schema(), pick in 0usize..8) {
        let mut nav = NavigationState::for_schema(&schema, None);
        let tabs: Vec<_> = schema
            .screens
            .iter()
            .flat_map(|s| s.elements.iter())
            .filter_map(|e| match e {
                Element::Tabs(t) => Some(t),
                _ => None,
            })
            .collect();

        for t in &tabs {
            prop_assert_eq!(nav.active_tab(&t.id, t.default_active_tab), t.default_active_tab.unwrap_or(0));
        }

        let chosen = &tabs[0];
        nav.set_active_tab(chosen.id.clone(), pick);
        prop_assert_eq!(nav.active_tab(&chosen.id, chosen.default_active_tab), pick);
        for other in tabs.iter().skip(1) {
            prop_assert_eq!(
                nav.active_tab(&other.id, other.default_active_tab),
                other.default_active_tab.unwrap_or(0)
            );
        }
    }
}
