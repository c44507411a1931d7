use wireway_core::schema::NavBar;
use wireway_oil::{col, row, rule, styled, JustifyContent, Node};

use super::ElementContext;
use crate::interaction::Interaction;

/// Bottom navigation. Every button is wired; the one targeting the current
/// screen is drawn active.
pub(super) fn render(nav_bar: &NavBar, ctx: &mut ElementContext<'_>) -> Node {
    let base = ctx.base_key(&nav_bar.id);
    let current = ctx.nav.current_screen_id();

    let mut buttons = Vec::with_capacity(nav_bar.buttons.len());
    for (i, button) in nav_bar.buttons.iter().enumerate() {
        let node = if button.target == current {
            styled(format!("[{}]", button.label), ctx.theme.active())
        } else {
            styled(format!(" {} ", button.label), ctx.theme.muted())
        };
        buttons.push(ctx.clickable(
            format!("{base}/{i}"),
            Interaction::Navigate(button.target.clone()),
            node,
        ));
    }

    col([
        rule().with_style(ctx.theme.border()),
        row(buttons).justify(JustifyContent::SpaceBetween),
    ])
}
