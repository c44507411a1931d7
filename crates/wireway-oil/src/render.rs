//! Line renderer.
//!
//! Every node renders to a list of lines no wider than the width it is
//! given. A width of 0 means unbounded: text never wraps and boxes shrink
//! to their content. Box styles apply to the border glyphs only.

use crossterm::style::StyledContent;
use textwrap::{wrap, Options, WordSplitter};

use crate::ansi::{pad_to, strip_ansi, truncate_plain, visible_width};
use crate::node::{BoxNode, Direction, InputNode, Node, RuleNode, Size, TextNode};
use crate::style::{JustifyContent, Style, TextAlign};

pub fn render_to_string(node: &Node, width: usize) -> String {
    render_lines(node, width).join("\n")
}

/// Same layout as [`render_to_string`] with all styling removed.
pub fn render_plain(node: &Node, width: usize) -> String {
    strip_ansi(&render_to_string(node, width))
}

pub fn render_lines(node: &Node, width: usize) -> Vec<String> {
    match node {
        Node::Empty => Vec::new(),
        Node::Text(text) => render_text(text, width),
        Node::Box(boxnode) => render_box(boxnode, width),
        Node::Input(input) => vec![render_input(input, width)],
        Node::Rule(rule) => vec![render_rule(rule, width)],
        Node::Fragment(children) => render_row(children, width, JustifyContent::Start, 0),
        Node::Focusable(focusable) => render_lines(&focusable.child, width),
    }
}

fn render_text(text: &TextNode, width: usize) -> Vec<String> {
    if text.content.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.content.split('\n') {
        if width == 0 || visible_width(paragraph) <= width {
            lines.push(paragraph.to_string());
        } else {
            let options = Options::new(width).word_splitter(WordSplitter::NoHyphenation);
            lines.extend(wrap(paragraph, options).into_iter().map(|line| line.into_owned()));
        }
    }

    lines
        .iter()
        .map(|line| align_line(&apply_style(line, &text.style), width, text.align))
        .collect()
}

fn align_line(line: &str, width: usize, align: TextAlign) -> String {
    if width == 0 || align == TextAlign::Left {
        return line.to_string();
    }
    let extra = width.saturating_sub(visible_width(line));
    let left = match align {
        TextAlign::Center => extra / 2,
        TextAlign::Right => extra,
        TextAlign::Left => 0,
    };
    format!("{}{line}{}", " ".repeat(left), " ".repeat(extra - left))
}

fn render_input(input: &InputNode, width: usize) -> String {
    let limit = if width == 0 {
        usize::MAX
    } else {
        width.saturating_sub(usize::from(input.focused))
    };
    let cursor_style = input.style.patch(Style::new().reverse());

    if input.value.is_empty() {
        let placeholder = input.placeholder.as_deref().unwrap_or_default();
        let shown = truncate_plain(placeholder, limit);
        let mut out = String::new();
        if input.focused {
            out.push_str(&apply_style(" ", &cursor_style));
        }
        out.push_str(&apply_style(&shown, &input.style.patch(Style::new().dim())));
        return out;
    }

    let shown = truncate_plain(&input.value, limit);
    if !input.focused {
        return apply_style(&shown, &input.style);
    }

    let mut cursor = input.cursor.min(shown.len());
    while !shown.is_char_boundary(cursor) {
        cursor -= 1;
    }
    let (before, rest) = shown.split_at(cursor);
    let mut after = rest.chars();
    let at = after.next().map(String::from).unwrap_or_else(|| " ".to_string());

    format!(
        "{}{}{}",
        apply_style(before, &input.style),
        apply_style(&at, &cursor_style),
        apply_style(after.as_str(), &input.style)
    )
}

fn render_rule(rule: &RuleNode, width: usize) -> String {
    let width = if width == 0 { 3 } else { width };
    let label = rule
        .label
        .as_deref()
        .map(|label| truncate_plain(label, width.saturating_sub(4)))
        .unwrap_or_default();

    let line = if label.is_empty() {
        "─".repeat(width)
    } else {
        let used = visible_width(&label) + 2;
        let left = (width - used) / 2;
        let right = width - used - left;
        format!("{} {label} {}", "─".repeat(left), "─".repeat(right))
    };
    apply_style(&line, &rule.style)
}

fn render_box(boxnode: &BoxNode, width: usize) -> Vec<String> {
    let border = if boxnode.border.is_some() { 2 } else { 0 };
    let chrome = boxnode.padding.horizontal() as usize + border;
    if chrome == 0 || (width > 0 && chrome >= width) {
        return render_children(boxnode, width);
    }
    let inner_width = if width == 0 { 0 } else { width - chrome };
    let lines = render_children(boxnode, inner_width);
    if lines.is_empty() && boxnode.border.is_none() {
        return lines;
    }

    let padding = boxnode.padding;
    let pad_left = " ".repeat(padding.left as usize);
    let Some(border) = boxnode.border else {
        let mut out = vec![String::new(); padding.top as usize];
        out.extend(lines.iter().map(|line| format!("{pad_left}{line}")));
        out.extend(std::iter::repeat(String::new()).take(padding.bottom as usize));
        return out;
    };

    let content_width = if width == 0 {
        lines.iter().map(|l| visible_width(l)).max().unwrap_or(0)
    } else {
        inner_width
    };
    let pad_right = " ".repeat(padding.right as usize);
    let blank = format!("{pad_left}{}{pad_right}", " ".repeat(content_width));

    let chars = border.chars();
    let edge = |s: String| apply_style(&s, &boxnode.style);
    let horizontal = chars
        .horizontal
        .to_string()
        .repeat(content_width + padding.horizontal() as usize);
    let vertical = edge(chars.vertical.to_string());

    let mut out = Vec::with_capacity(lines.len() + padding.vertical() as usize + 2);
    out.push(edge(format!("{}{horizontal}{}", chars.top_left, chars.top_right)));
    for _ in 0..padding.top {
        out.push(format!("{vertical}{blank}{vertical}"));
    }
    for line in &lines {
        out.push(format!(
            "{vertical}{pad_left}{}{pad_right}{vertical}",
            pad_to(line, content_width)
        ));
    }
    for _ in 0..padding.bottom {
        out.push(format!("{vertical}{blank}{vertical}"));
    }
    out.push(edge(format!("{}{horizontal}{}", chars.bottom_left, chars.bottom_right)));
    out
}

fn render_children(boxnode: &BoxNode, width: usize) -> Vec<String> {
    match boxnode.direction {
        Direction::Column => render_column(&boxnode.children, width, boxnode.gap.row),
        Direction::Row => render_row(
            &boxnode.children,
            width,
            boxnode.justify,
            boxnode.gap.column as usize,
        ),
    }
}

fn render_column(children: &[Node], width: usize, gap: u16) -> Vec<String> {
    let mut out = Vec::new();
    for child in children {
        let lines = render_lines(child, width);
        if lines.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.extend(std::iter::repeat(String::new()).take(gap as usize));
        }
        out.extend(lines);
    }
    out
}

enum Slot {
    Fixed(usize),
    Flex(usize),
    Content,
}

fn slot_of(node: &Node) -> Slot {
    match node {
        Node::Box(b) => match b.size {
            Size::Fixed(n) => Slot::Fixed(n as usize),
            Size::Flex(weight) => Slot::Flex(weight.max(1) as usize),
            Size::Content => Slot::Content,
        },
        _ => Slot::Content,
    }
}

fn render_row(children: &[Node], width: usize, justify: JustifyContent, gap: usize) -> Vec<String> {
    if children.is_empty() {
        return Vec::new();
    }

    let slots: Vec<Slot> = children.iter().map(slot_of).collect();
    let fixed_total: usize = slots
        .iter()
        .map(|slot| match slot {
            Slot::Fixed(n) => *n,
            _ => 0,
        })
        .sum();
    let gaps_total = gap * (children.len() - 1);
    let mut remaining = width.saturating_sub(fixed_total + gaps_total);

    let mut columns: Vec<Option<(Vec<String>, usize)>> = vec![None; children.len()];

    for (i, (child, slot)) in children.iter().zip(&slots).enumerate() {
        match slot {
            Slot::Fixed(n) => columns[i] = Some((render_lines(child, *n), *n)),
            Slot::Content if width > 0 && remaining == 0 => columns[i] = Some((Vec::new(), 0)),
            Slot::Content => {
                let lines = render_lines(child, remaining);
                let natural = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
                let taken = if width == 0 {
                    natural
                } else {
                    natural.min(remaining)
                };
                remaining -= taken.min(remaining);
                columns[i] = Some((lines, taken));
            }
            Slot::Flex(_) => {}
        }
    }

    let total_weight: usize = slots
        .iter()
        .map(|slot| match slot {
            Slot::Flex(w) => *w,
            _ => 0,
        })
        .sum();
    if total_weight > 0 {
        let space = remaining;
        let mut given = 0;
        let mut seen = 0;
        for (i, (child, slot)) in children.iter().zip(&slots).enumerate() {
            if let Slot::Flex(weight) = slot {
                seen += weight;
                let share = space * seen / total_weight - given;
                given += share;
                let lines = if share == 0 {
                    Vec::new()
                } else {
                    render_lines(child, share)
                };
                columns[i] = Some((lines, share));
            }
        }
    }

    let columns: Vec<(Vec<String>, usize)> = columns
        .into_iter()
        .flatten()
        .filter(|(lines, w)| !(lines.is_empty() && *w == 0))
        .collect();
    if columns.is_empty() {
        return Vec::new();
    }

    let count = columns.len();
    let used: usize = columns.iter().map(|(_, w)| w).sum::<usize>() + gap * (count - 1);
    let leftover = if width == 0 {
        0
    } else {
        width.saturating_sub(used)
    };

    let (lead, gaps): (usize, Vec<usize>) = match justify {
        JustifyContent::Start => (0, vec![gap; count - 1]),
        JustifyContent::End => (leftover, vec![gap; count - 1]),
        JustifyContent::Center => (leftover / 2, vec![gap; count - 1]),
        JustifyContent::SpaceBetween if count > 1 => {
            let slots = count - 1;
            let extra = leftover / slots;
            let rem = leftover % slots;
            (
                0,
                (0..slots).map(|i| gap + extra + usize::from(i < rem)).collect(),
            )
        }
        JustifyContent::SpaceBetween => (0, Vec::new()),
    };

    let height = columns.iter().map(|(lines, _)| lines.len()).max().unwrap_or(0);
    let mut out = Vec::with_capacity(height);
    for r in 0..height {
        let mut line = " ".repeat(lead);
        for (c, (lines, w)) in columns.iter().enumerate() {
            if c > 0 {
                line.push_str(&" ".repeat(gaps[c - 1]));
            }
            let cell = lines.get(r).map(String::as_str).unwrap_or_default();
            if c + 1 == count {
                line.push_str(cell);
            } else {
                line.push_str(&pad_to(cell, *w));
            }
        }
        out.push(line);
    }
    out
}

fn apply_style(content: &str, style: &Style) -> String {
    if content.is_empty() || style.is_plain() {
        return content.to_string();
    }
    format!("{}", StyledContent::new(style.to_crossterm(), content))
}
