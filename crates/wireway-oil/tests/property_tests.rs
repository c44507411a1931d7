use proptest::prelude::*;
use wireway_oil::ansi::visible_width;
use wireway_oil::proptest_strategies::*;
use wireway_oil::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn render_fits_width(node in arb_node(), width in arb_width()) {
        let output = render_to_string(&node, width);
        assert_render_fits_width(&output, width)?;
    }

    #[test]
    fn plain_render_has_no_escapes(node in arb_node(), width in arb_width()) {
        let plain = render_plain(&node, width);
        prop_assert!(!plain.contains('\x1b'));
    }

    #[test]
    fn plain_and_styled_agree_on_layout(node in arb_node(), width in arb_width()) {
        let styled = render_to_string(&node, width);
        let plain = render_plain(&node, width);
        let styled_widths: Vec<_> = styled.split('\n').map(visible_width).collect();
        let plain_widths: Vec<_> = plain.split('\n').map(visible_width).collect();
        prop_assert_eq!(styled_widths, plain_widths);
    }

    #[test]
    fn wrapped_text_keeps_every_word(s in arb_text(), width in 12usize..60) {
        let output = render_plain(&text(s.clone()), width);
        let words: Vec<_> = s.split_whitespace().collect();
        let rendered: Vec<_> = output.split_whitespace().collect();
        prop_assert_eq!(words, rendered);
    }
}
