use wireway_core::schema::{List, ListItem};
use wireway_oil::{col, flex, row, spacer, styled, Gap, Node};

use super::{icon_glyph, key_part, ElementContext};
use crate::interaction::Interaction;

pub(super) fn render(list: &List, ctx: &mut ElementContext<'_>) -> Node {
    let base = ctx.base_key(&list.id);
    let items: Vec<Node> = list
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| render_item(&base, item, i, ctx))
        .collect();
    col(items)
}

/// `[ ] icon text/subtitle ... right badge ›`
///
/// The checkbox and the row body are separate focus targets: toggling the
/// box never navigates, and activating the row never toggles.
fn render_item(base: &str, item: &ListItem, index: usize, ctx: &mut ElementContext<'_>) -> Node {
    let part = key_part(&item.id, index);
    let item_key = format!("{base}/{part}");
    let checked = ctx.widgets.is_checked(base, &part, item.checked);

    let mut cells = Vec::new();
    if item.has_checkbox {
        let glyph = if checked { "[x]" } else { "[ ]" };
        let node = styled(glyph, ctx.theme.accent());
        cells.push(ctx.clickable(
            format!("{item_key}/check"),
            Interaction::ToggleCheckbox {
                list_id: base.to_owned(),
                item_id: part.clone(),
            },
            node,
        ));
    }

    let mut body = Vec::new();
    if let Some(glyph) = leading_glyph(item) {
        body.push(styled(glyph, ctx.theme.muted()));
    }

    let text_style = if checked {
        ctx.theme.dim()
    } else {
        Default::default()
    };
    let mut lines = vec![styled(item.text.as_str(), text_style)];
    if let Some(subtitle) = &item.subtitle {
        lines.push(styled(subtitle.as_str(), ctx.theme.muted()));
    }
    body.push(col(lines));
    body.push(spacer());

    if let Some(right) = &item.right_text {
        body.push(styled(right.as_str(), ctx.theme.muted()));
    }
    if let Some(badge) = &item.badge {
        body.push(styled(
            format!("({})", badge.text),
            ctx.theme.badge(badge.color.as_deref()),
        ));
    }
    if item.target.is_some() {
        body.push(styled("›", ctx.theme.muted()));
    }

    let body = row(body).gap(Gap::column(1));
    cells.push(flex(
        1,
        ctx.navigate_to(item_key, item.target.as_deref(), body),
    ));

    row(cells).gap(Gap::column(1))
}

/// Icon glyph when known, else an image marker.
fn leading_glyph(item: &ListItem) -> Option<&'static str> {
    item.icon
        .as_deref()
        .and_then(icon_glyph)
        .or_else(|| item.image.as_ref().map(|_| "▧"))
}
