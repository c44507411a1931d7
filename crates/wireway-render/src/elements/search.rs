use wireway_core::schema::SearchBar;
use wireway_oil::{row, styled, Border, InputNode, Node};

use super::ElementContext;
use crate::interaction::Interaction;
use crate::widgets::EditTarget;

const DEFAULT_PLACEHOLDER: &str = "Search...";

/// Rounded input box. Typing only changes the local search text; it never
/// filters or navigates.
pub(super) fn render(search: &SearchBar, ctx: &mut ElementContext<'_>) -> Node {
    let key = ctx.base_key(&search.id);
    let editing = ctx.widgets.is_editing(&EditTarget::Search {
        element_id: key.clone(),
    });
    let (value, cursor) = ctx
        .widgets
        .search_text(&key)
        .map(|buffer| (buffer.content().to_owned(), buffer.cursor()))
        .unwrap_or_default();

    let input = Node::Input(InputNode {
        value,
        cursor,
        placeholder: Some(
            search
                .placeholder
                .clone()
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_owned()),
        ),
        style: Default::default(),
        focused: editing,
    });
    let field = row([styled("⌕ ", ctx.theme.muted()), input])
        .with_border(Border::Rounded)
        .with_style(ctx.theme.border());

    ctx.clickable(
        key.clone(),
        Interaction::EditSearch { element_id: key },
        field,
    )
}
