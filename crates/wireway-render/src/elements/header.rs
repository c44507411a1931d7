use wireway_core::schema::Header;
use wireway_oil::{col, row, rule, spacer, styled, Gap, Node};

use super::{content, key_part, ElementContext};

/// Back button, title block, actions, add button, then a rule.
///
/// Each button shows iff its flag is set and is wired only when its target
/// is present; an unwired button is drawn dimmed.
pub(super) fn render(header: &Header, ctx: &mut ElementContext<'_>) -> Node {
    let base = ctx.base_key(&header.id);
    let mut bar = Vec::new();

    if header.has_back_button {
        let target = header.back_button_target.as_deref();
        let label = styled("‹ Back", nav_style(ctx, target));
        bar.push(ctx.navigate_to(format!("{base}/back"), target, label));
    }

    let mut title = vec![styled(header.title.as_str(), ctx.theme.title())];
    if let Some(subtitle) = &header.subtitle {
        title.push(styled(subtitle.as_str(), ctx.theme.muted()));
    }
    bar.push(col(title));
    bar.push(spacer());

    for (i, action) in header.actions.iter().enumerate() {
        let key = format!("{base}/action/{}", key_part(&action.id, i));
        bar.push(content::button(action, key, ctx));
    }

    if header.has_add_button {
        let target = header.add_button_target.as_deref();
        let label = styled("[+]", nav_style(ctx, target));
        bar.push(ctx.navigate_to(format!("{base}/add"), target, label));
    }

    col([
        row(bar).gap(Gap::column(1)),
        rule().with_style(ctx.theme.border()),
    ])
}

fn nav_style(ctx: &ElementContext<'_>, target: Option<&str>) -> wireway_oil::Style {
    match target {
        Some(_) => ctx.theme.accent(),
        None => ctx.theme.disabled(),
    }
}
