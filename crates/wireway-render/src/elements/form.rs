use tracing::debug;
use wireway_core::schema::{FieldSpec, FieldValidation, Form, FormField, SelectField};
use wireway_oil::{col, row, spacer, styled, Border, Gap, InputNode, Node, Padding};

use super::{key_part, ElementContext};
use crate::interaction::Interaction;
use crate::widgets::EditTarget;

const SELECT_PLACEHOLDER: &str = "Select...";
const DATE_PLACEHOLDER: &str = "YYYY-MM-DD";

/// Labeled fields, then the submit button. Validation rules are shown as a
/// hint line and never enforced.
pub(super) fn render(form: &Form, ctx: &mut ElementContext<'_>) -> Node {
    let base = ctx.base_key(&form.id);
    let mut rows = Vec::with_capacity(form.fields.len() + 1);

    for (i, field) in form.fields.iter().enumerate() {
        let field_id = key_part(field.id(), i);
        let node = match field {
            FormField::TextInput(spec) => text_field(&base, &field_id, spec, TextKind::Line, ctx),
            FormField::TextArea(spec) => text_field(&base, &field_id, spec, TextKind::Area, ctx),
            FormField::DateInput(spec) => text_field(&base, &field_id, spec, TextKind::Date, ctx),
            FormField::Select(select) => select_field(&base, &field_id, select, ctx),
            FormField::Unrecognized(raw) => {
                debug!(
                    form = %base,
                    kind = raw.kind.as_deref().unwrap_or("<missing>"),
                    "skipping unrecognized form field"
                );
                continue;
            }
        };
        rows.push(node);
    }

    let label = if form.submit_button_text.is_empty() {
        "Submit"
    } else {
        form.submit_button_text.as_str()
    };
    let submit = styled(format!("[ {label} ]"), ctx.theme.accent().bold());
    rows.push(ctx.navigate_to(
        format!("{base}/submit"),
        form.submit_target.as_deref(),
        submit,
    ));

    col(rows).gap(Gap::row(1))
}

/// Fields live under `field/` so an id like `submit` cannot shadow the
/// submit button.
fn field_key(form_id: &str, field_id: &str) -> String {
    format!("{form_id}/field/{field_id}")
}

#[derive(Clone, Copy)]
enum TextKind {
    Line,
    Area,
    Date,
}

fn text_field(
    form_id: &str,
    field_id: &str,
    spec: &FieldSpec,
    kind: TextKind,
    ctx: &mut ElementContext<'_>,
) -> Node {
    let target = EditTarget::Field {
        form_id: form_id.to_owned(),
        field_id: field_id.to_owned(),
    };
    let editing = ctx.widgets.is_editing(&target);
    let (value, cursor) = match ctx.widgets.field_text(form_id, field_id) {
        Some(buffer) => (buffer.content().to_owned(), buffer.cursor()),
        None => {
            let value = spec
                .default_value
                .as_ref()
                .map(|v| v.as_text())
                .unwrap_or_default();
            let cursor = value.len();
            (value, cursor)
        }
    };
    let placeholder = match kind {
        TextKind::Date => Some(
            spec.placeholder
                .clone()
                .unwrap_or_else(|| DATE_PLACEHOLDER.to_owned()),
        ),
        _ => spec.placeholder.clone(),
    };

    let input = Node::Input(InputNode {
        value,
        cursor,
        placeholder,
        style: Default::default(),
        focused: editing,
    });
    let control = match kind {
        TextKind::Line => input,
        TextKind::Area => col([input]).with_padding(Padding {
            bottom: 2,
            ..Default::default()
        }),
        TextKind::Date => row([input, spacer(), styled("▦", ctx.theme.muted())]),
    };
    let control = control
        .with_border(Border::Single)
        .with_style(ctx.theme.border());

    let control = if spec.disabled {
        control.patch_style(ctx.theme.disabled())
    } else {
        ctx.clickable(
            field_key(form_id, field_id),
            Interaction::EditField {
                form_id: form_id.to_owned(),
                field_id: field_id.to_owned(),
            },
            control,
        )
    };

    labeled(spec, control, ctx)
}

fn select_field(
    form_id: &str,
    field_id: &str,
    select: &SelectField,
    ctx: &mut ElementContext<'_>,
) -> Node {
    let chosen = ctx
        .widgets
        .option_index(form_id, field_id)
        .or_else(|| select.default_index())
        .and_then(|i| select.options.get(i));

    let value = match chosen {
        Some(option) => styled(option.as_str(), Default::default()),
        None => styled(
            select
                .spec
                .placeholder
                .clone()
                .unwrap_or_else(|| SELECT_PLACEHOLDER.to_owned()),
            ctx.theme.muted(),
        ),
    };
    let control = row([value, spacer(), styled("▾", ctx.theme.muted())])
        .with_border(Border::Single)
        .with_style(ctx.theme.border());

    let control = if select.spec.disabled {
        control.patch_style(ctx.theme.disabled())
    } else {
        ctx.clickable(
            field_key(form_id, field_id),
            Interaction::CycleOption {
                form_id: form_id.to_owned(),
                field_id: field_id.to_owned(),
            },
            control,
        )
    };

    labeled(&select.spec, control, ctx)
}

fn labeled(spec: &FieldSpec, control: Node, ctx: &ElementContext<'_>) -> Node {
    let required = spec.required
        || spec
            .validation
            .as_ref()
            .and_then(|v| v.required)
            .unwrap_or(false);
    let label = if required {
        format!("{} *", spec.label)
    } else {
        spec.label.clone()
    };

    let mut lines = vec![styled(label, ctx.theme.title()), control];
    if let Some(hint) = spec.validation.as_ref().and_then(validation_hint) {
        lines.push(styled(hint, ctx.theme.muted()));
    }
    col(lines)
}

/// `min 3 · max 40 · pattern ^\w+$ · custom message`, or nothing.
fn validation_hint(validation: &FieldValidation) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(min) = validation.min_length {
        parts.push(format!("min {min}"));
    }
    if let Some(max) = validation.max_length {
        parts.push(format!("max {max}"));
    }
    if let Some(pattern) = &validation.pattern {
        parts.push(format!("pattern {pattern}"));
    }
    if let Some(message) = &validation.custom_error {
        parts.push(message.clone());
    }
    (!parts.is_empty()).then(|| parts.join(" · "))
}
