use crate::focus::FocusId;
use crate::style::{Border, Gap, JustifyContent, Padding, Style, TextAlign};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    #[default]
    Empty,
    Text(TextNode),
    Box(BoxNode),
    Input(InputNode),
    Rule(RuleNode),
    Fragment(Vec<Node>),
    Focusable(FocusableNode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub content: String,
    pub style: Style,
    pub align: TextAlign,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxNode {
    pub children: Vec<Node>,
    pub direction: Direction,
    pub size: Size,
    pub padding: Padding,
    pub border: Option<Border>,
    pub style: Style,
    pub justify: JustifyContent,
    pub gap: Gap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputNode {
    pub value: String,
    pub cursor: usize,
    pub placeholder: Option<String>,
    pub style: Style,
    pub focused: bool,
}

/// Horizontal divider filling the available width, with an optional label.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleNode {
    pub label: Option<String>,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FocusableNode {
    pub id: FocusId,
    pub child: Box<Node>,
    pub auto_focus: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Column,
    Row,
}

/// Main-axis sizing for a box inside a row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Size {
    Fixed(u16),
    Flex(u16),
    #[default]
    Content,
}

pub fn text(content: impl Into<String>) -> Node {
    Node::Text(TextNode {
        content: content.into(),
        style: Style::default(),
        align: TextAlign::Left,
    })
}

pub fn styled(content: impl Into<String>, style: Style) -> Node {
    Node::Text(TextNode {
        content: content.into(),
        style,
        align: TextAlign::Left,
    })
}

pub fn col(children: impl IntoIterator<Item = Node>) -> Node {
    Node::Box(BoxNode {
        children: children.into_iter().collect(),
        direction: Direction::Column,
        ..Default::default()
    })
}

pub fn row(children: impl IntoIterator<Item = Node>) -> Node {
    Node::Box(BoxNode {
        children: children.into_iter().collect(),
        direction: Direction::Row,
        ..Default::default()
    })
}

pub fn fragment(children: impl IntoIterator<Item = Node>) -> Node {
    Node::Fragment(children.into_iter().collect())
}

pub fn text_input(value: impl Into<String>, cursor: usize) -> Node {
    Node::Input(InputNode {
        value: value.into(),
        cursor,
        placeholder: None,
        style: Style::default(),
        focused: false,
    })
}

pub fn rule() -> Node {
    Node::Rule(RuleNode {
        label: None,
        style: Style::default(),
    })
}

pub fn labeled_rule(label: impl Into<String>) -> Node {
    Node::Rule(RuleNode {
        label: Some(label.into()),
        style: Style::default(),
    })
}

pub fn focusable(id: impl Into<String>, child: Node) -> Node {
    Node::Focusable(FocusableNode {
        id: FocusId::new(id),
        child: Box::new(child),
        auto_focus: false,
    })
}

pub fn focusable_auto(id: impl Into<String>, child: Node) -> Node {
    Node::Focusable(FocusableNode {
        id: FocusId::new(id),
        child: Box::new(child),
        auto_focus: true,
    })
}

pub fn spacer() -> Node {
    Node::Box(BoxNode {
        size: Size::Flex(1),
        ..Default::default()
    })
}

pub fn flex(weight: u16, child: Node) -> Node {
    Node::Box(BoxNode {
        children: vec![child],
        size: Size::Flex(weight),
        ..Default::default()
    })
}

pub fn fixed(width: u16, child: Node) -> Node {
    Node::Box(BoxNode {
        children: vec![child],
        size: Size::Fixed(width),
        ..Default::default()
    })
}

impl Node {
    pub fn with_style(self, style: Style) -> Self {
        match self {
            Node::Text(mut t) => {
                t.style = style;
                Node::Text(t)
            }
            Node::Input(mut i) => {
                i.style = style;
                Node::Input(i)
            }
            Node::Rule(mut r) => {
                r.style = style;
                Node::Rule(r)
            }
            Node::Box(mut b) => {
                b.style = style;
                Node::Box(b)
            }
            other => other,
        }
    }

    pub fn with_padding(self, padding: Padding) -> Self {
        match self {
            Node::Box(mut b) => {
                b.padding = padding;
                Node::Box(b)
            }
            other => Node::Box(BoxNode {
                children: vec![other],
                padding,
                ..Default::default()
            }),
        }
    }

    pub fn with_border(self, border: Border) -> Self {
        match self {
            Node::Box(mut b) => {
                b.border = Some(border);
                Node::Box(b)
            }
            other => Node::Box(BoxNode {
                children: vec![other],
                border: Some(border),
                ..Default::default()
            }),
        }
    }

    pub fn justify(self, justify: JustifyContent) -> Self {
        match self {
            Node::Box(mut b) => {
                b.justify = justify;
                Node::Box(b)
            }
            other => Node::Box(BoxNode {
                children: vec![other],
                justify,
                ..Default::default()
            }),
        }
    }

    pub fn gap(self, gap: Gap) -> Self {
        match self {
            Node::Box(mut b) => {
                b.gap = gap;
                Node::Box(b)
            }
            other => Node::Box(BoxNode {
                children: vec![other],
                gap,
                ..Default::default()
            }),
        }
    }

    /// Text alignment inside the available width. No-op on non-text nodes.
    pub fn aligned(self, align: TextAlign) -> Self {
        match self {
            Node::Text(mut t) => {
                t.align = align;
                Node::Text(t)
            }
            other => other,
        }
    }

    /// Layer `style` over every text, input and rule below this node, and
    /// over box borders.
    pub fn patch_style(self, style: Style) -> Self {
        match self {
            Node::Text(mut t) => {
                t.style = t.style.patch(style);
                Node::Text(t)
            }
            Node::Input(mut i) => {
                i.style = i.style.patch(style);
                Node::Input(i)
            }
            Node::Rule(mut r) => {
                r.style = r.style.patch(style);
                Node::Rule(r)
            }
            Node::Box(mut b) => {
                b.style = b.style.patch(style);
                b.children = b.children.into_iter().map(|c| c.patch_style(style)).collect();
                Node::Box(b)
            }
            Node::Fragment(children) => {
                Node::Fragment(children.into_iter().map(|c| c.patch_style(style)).collect())
            }
            Node::Focusable(mut f) => {
                f.child = Box::new(f.child.patch_style(style));
                Node::Focusable(f)
            }
            Node::Empty => Node::Empty,
        }
    }

    /// Focusable ids in render order.
    pub fn focus_ids(&self) -> Vec<FocusId> {
        let mut out = Vec::new();
        collect_focus(self, &mut out, &mut None);
        out
    }

    /// First focusable marked `auto_focus`, if any.
    pub fn auto_focus_id(&self) -> Option<FocusId> {
        let mut auto = None;
        collect_focus(self, &mut Vec::new(), &mut auto);
        auto
    }
}

fn collect_focus(node: &Node, out: &mut Vec<FocusId>, auto: &mut Option<FocusId>) {
    match node {
        Node::Focusable(f) => {
            out.push(f.id.clone());
            if f.auto_focus && auto.is_none() {
                *auto = Some(f.id.clone());
            }
            collect_focus(&f.child, out, auto);
        }
        Node::Box(b) => {
            for child in &b.children {
                collect_focus(child, out, auto);
            }
        }
        Node::Fragment(children) => {
            for child in children {
                collect_focus(child, out, auto);
            }
        }
        Node::Empty | Node::Text(_) | Node::Input(_) | Node::Rule(_) => {}
    }
}
