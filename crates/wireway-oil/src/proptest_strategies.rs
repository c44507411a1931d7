//! Proptest strategies for renderer property tests

use proptest::prelude::*;

use crate::ansi::visible_width;
use crate::node::*;
use crate::style::*;

/// Render width: narrow (1-20) or normal (21-120). Zero means unbounded
/// and is covered by dedicated tests.
pub fn arb_width() -> impl Strategy<Value = usize> {
    prop_oneof![
        3 => 1usize..=20,
        7 => 21usize..=120,
    ]
}

/// ASCII words with single spaces.
pub fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9]{0,12}", 0..12).prop_map(|words| words.join(" "))
}

pub fn arb_padding() -> impl Strategy<Value = Padding> {
    (0u16..3, 0u16..3, 0u16..3, 0u16..3).prop_map(|(top, right, bottom, left)| Padding {
        top,
        right,
        bottom,
        left,
    })
}

pub fn arb_border() -> impl Strategy<Value = Option<Border>> {
    prop_oneof![
        4 => Just(None),
        1 => Just(Some(Border::Single)),
        1 => Just(Some(Border::Double)),
        1 => Just(Some(Border::Rounded)),
        1 => Just(Some(Border::Heavy)),
    ]
}

pub fn arb_justify() -> impl Strategy<Value = JustifyContent> {
    prop_oneof![
        Just(JustifyContent::Start),
        Just(JustifyContent::End),
        Just(JustifyContent::Center),
        Just(JustifyContent::SpaceBetween),
    ]
}

pub fn arb_style() -> impl Strategy<Value = Style> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(bold, dim, reverse)| {
        let mut s = Style::new();
        if bold {
            s = s.bold();
        }
        if dim {
            s = s.dim();
        }
        if reverse {
            s = s.reverse();
        }
        s
    })
}

pub fn arb_leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        1 => Just(Node::Empty),
        5 => (arb_text(), arb_style()).prop_map(|(s, style)| styled(s, style)),
        2 => (arb_text(), any::<bool>(), prop::option::of("[a-z ]{1,12}")).prop_map(
            |(value, focused, placeholder)| {
                Node::Input(InputNode {
                    cursor: value.len() / 2,
                    value,
                    placeholder,
                    style: Style::default(),
                    focused,
                })
            }
        ),
        1 => prop::option::of("[a-z]{1,10}").prop_map(|label| match label {
            Some(label) => labeled_rule(label),
            None => rule(),
        }),
        1 => Just(spacer()),
    ]
}

/// Recursive node generator with bounded depth.
pub fn arb_node() -> impl Strategy<Value = Node> {
    arb_leaf().prop_recursive(3, 32, 5, |inner| {
        prop_oneof![
            3 => prop::collection::vec(inner.clone(), 0..4).prop_map(col),
            3 => (prop::collection::vec(inner.clone(), 0..4), arb_justify())
                .prop_map(|(children, justify)| row(children).justify(justify)),
            1 => (1u16..4, inner.clone()).prop_map(|(w, child)| flex(w, child)),
            1 => (
                prop::collection::vec(inner.clone(), 0..3),
                arb_border(),
                arb_padding(),
            )
                .prop_map(|(children, border, padding)| {
                    Node::Box(BoxNode {
                        children,
                        padding,
                        border,
                        ..Default::default()
                    })
                }),
            1 => ("[a-z]{1,6}", inner).prop_map(|(id, child)| focusable(id, child)),
        ]
    })
}

/// Every rendered line fits in `width` columns.
pub fn assert_render_fits_width(output: &str, width: usize) -> Result<(), TestCaseError> {
    for (i, line) in output.split('\n').enumerate() {
        let line_width = visible_width(line);
        prop_assert!(
            line_width <= width,
            "Line {} exceeds width {}: got {} (content: {:?})",
            i,
            width,
            line_width,
            line
        );
    }
    Ok(())
}
