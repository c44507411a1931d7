//! Leaf-ish content elements: text, buttons, cards, images and dividers.

use wireway_core::schema::{
    Alignment, Button, ButtonVariant, Card, CardDirection, Divider, Image, Orientation, TextBlock,
    TextVariant,
};
use wireway_oil::{
    col, labeled_rule, row, rule, styled, Border, Gap, Node, Padding, Style, TextAlign,
};

use super::{icon_glyph, key_part, ElementContext};
use crate::interaction::Interaction;

const IMAGE_ROWS: u16 = 3;
const MAX_IMAGE_ROWS: u16 = 6;

pub(super) fn text_block(block: &TextBlock, ctx: &mut ElementContext<'_>) -> Node {
    let style = match block.variant.unwrap_or_default() {
        TextVariant::H1 => ctx.theme.title().underline(),
        TextVariant::Title => ctx.theme.title(),
        TextVariant::Subtitle => ctx.theme.accent(),
        TextVariant::Body => Style::new(),
        TextVariant::Caption => ctx.theme.muted(),
    };
    let align = match block.alignment.unwrap_or_default() {
        Alignment::Left => TextAlign::Left,
        Alignment::Center => TextAlign::Center,
        Alignment::Right => TextAlign::Right,
    };
    styled(block.content.as_str(), style).aligned(align)
}

/// Standalone button, or one nested in a header or card under `key`.
pub(super) fn button(button: &Button, key: String, ctx: &mut ElementContext<'_>) -> Node {
    let label = match button.icon.as_deref().and_then(icon_glyph) {
        Some(glyph) => format!("{glyph} {}", button.text),
        None => button.text.clone(),
    };
    let (label, style) = match button.variant.unwrap_or_default() {
        ButtonVariant::Primary => (format!("[ {label} ]"), ctx.theme.accent().bold()),
        ButtonVariant::Secondary => (format!("[ {label} ]"), Style::new()),
        ButtonVariant::Outlined => (format!("( {label} )"), ctx.theme.accent()),
        ButtonVariant::Text => (label, ctx.theme.accent().underline()),
    };

    if button.disabled {
        return styled(label, style.patch(ctx.theme.disabled()));
    }
    let node = styled(label, style);
    ctx.navigate_to(key, button.target.as_deref(), node)
}

/// Bordered card. The whole card is one target; its action buttons are
/// separate targets nested under the card key.
pub(super) fn card(card: &Card, ctx: &mut ElementContext<'_>) -> Node {
    let base = ctx.base_key(&card.id);
    // Claim the card key first so an action cannot shadow it.
    let card_key = card
        .target
        .as_ref()
        .and_then(|target| ctx.wire(base.clone(), Interaction::Navigate(target.clone())));

    let mut text = Vec::new();
    if let Some(title) = &card.title {
        text.push(styled(title.as_str(), ctx.theme.title()));
    }
    if let Some(subtitle) = &card.subtitle {
        text.push(styled(subtitle.as_str(), ctx.theme.muted()));
    }
    if let Some(content) = &card.content {
        text.push(styled(content.as_str(), Style::new()));
    }

    let actions: Vec<Node> = card
        .actions
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let key = format!("{base}/action/{}", key_part(&action.id, i));
            button(action, key, ctx)
        })
        .collect();
    if !actions.is_empty() {
        text.push(row(actions).gap(Gap::column(1)));
    }

    let image = card
        .image
        .as_ref()
        .map(|_| styled("▧ image", ctx.theme.muted()));
    let body = match (image, card.direction.unwrap_or_default()) {
        (Some(image), CardDirection::Horizontal) => {
            row([image, col(text)]).gap(Gap::column(2))
        }
        (Some(image), CardDirection::Vertical) => {
            text.insert(0, image);
            col(text)
        }
        (None, _) => col(text),
    };

    let node = body
        .with_border(Border::Rounded)
        .with_padding(Padding::xy(1, 0))
        .with_style(ctx.theme.border());
    match card_key {
        Some(key) => ctx.wrap(key, node),
        None => node,
    }
}

/// Placeholder box sized by `aspectRatio` ("16:9", "1:1").
pub(super) fn image(image: &Image, ctx: &mut ElementContext<'_>) -> Node {
    let base = ctx.base_key(&image.id);
    let label = image.alt.as_deref().unwrap_or(image.src.as_str());
    let rows = image
        .aspect_ratio
        .as_deref()
        .and_then(image_rows)
        .unwrap_or(IMAGE_ROWS);
    let pad = rows.saturating_sub(1);
    let node = col([styled(format!("▧ {label}"), ctx.theme.muted()).aligned(TextAlign::Center)])
        .with_padding(Padding {
            top: pad / 2,
            bottom: pad - pad / 2,
            ..Default::default()
        })
        .with_border(Border::Single)
        .with_style(ctx.theme.border());
    ctx.navigate_to(base, image.target.as_deref(), node)
}

/// Rows for a `w:h` ratio against an eight-row-wide reference.
fn image_rows(ratio: &str) -> Option<u16> {
    let (w, h) = ratio.split_once(':')?;
    let w: f32 = w.trim().parse().ok()?;
    let h: f32 = h.trim().parse().ok()?;
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let rows = (8.0 * h / w).round() as u16;
    Some(rows.clamp(1, MAX_IMAGE_ROWS))
}

pub(super) fn divider(divider: &Divider, ctx: &mut ElementContext<'_>) -> Node {
    let style = ctx.theme.border();
    if divider.orientation == Some(Orientation::Vertical) {
        return styled("│", style);
    }
    match &divider.text {
        Some(text) => labeled_rule(text.as_str()).with_style(style),
        None => rule().with_style(style),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("16:9", Some(5))]
    #[test_case("1:1", Some(6))]
    #[test_case("4:1", Some(2))]
    #[test_case("100:1", Some(1))]
    #[test_case("0:1", None)]
    #[test_case("wide", None)]
    fn image_rows_from_ratio(ratio: &str, expected: Option<u16>) {
        assert_eq!(image_rows(ratio), expected);
    }
}
