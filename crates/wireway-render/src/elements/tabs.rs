use wireway_core::schema::Tabs;
use wireway_oil::{row, styled, Node};

use super::ElementContext;
use crate::interaction::Interaction;

/// One label per tab; the active one is bracketed. The active index comes
/// from navigation state and falls back to `defaultActiveTab`, then 0.
pub(super) fn render(tabs: &Tabs, ctx: &mut ElementContext<'_>) -> Node {
    let base = ctx.base_key(&tabs.id);
    let active = ctx.nav.active_tab(&base, tabs.default_active_tab);

    let mut labels = Vec::with_capacity(tabs.tabs.len());
    for (index, label) in tabs.tabs.iter().enumerate() {
        let node = if index == active {
            styled(format!("[{label}]"), ctx.theme.active())
        } else {
            styled(format!(" {label} "), ctx.theme.muted())
        };
        labels.push(ctx.clickable(
            format!("{base}/tab/{index}"),
            Interaction::SelectTab {
                element_id: base.clone(),
                index,
            },
            node,
        ));
    }
    row(labels)
}
