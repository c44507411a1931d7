use crossterm::style::{Attribute, Color as CtColor, ContentStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    DarkGray,
    Rgb(u8, u8, u8),
}

impl Color {
    pub fn to_crossterm(self) -> CtColor {
        match self {
            Color::Reset => CtColor::Reset,
            Color::Black => CtColor::Black,
            Color::Red => CtColor::Red,
            Color::Green => CtColor::Green,
            Color::Yellow => CtColor::Yellow,
            Color::Blue => CtColor::Blue,
            Color::Magenta => CtColor::Magenta,
            Color::Cyan => CtColor::Cyan,
            Color::White => CtColor::White,
            Color::Gray => CtColor::Grey,
            Color::DarkGray => CtColor::DarkGrey,
            Color::Rgb(r, g, b) => CtColor::Rgb { r, g, b },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            dim: false,
            italic: false,
            underline: false,
            reverse: false,
        }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Layer `other` on top: its colors win when set, attributes accumulate.
    pub fn patch(self, other: Style) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            bold: self.bold || other.bold,
            dim: self.dim || other.dim,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            reverse: self.reverse || other.reverse,
        }
    }

    pub fn to_crossterm(&self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = self.fg.map(Color::to_crossterm);
        style.background_color = self.bg.map(Color::to_crossterm);
        if self.bold {
            style.attributes.set(Attribute::Bold);
        }
        if self.dim {
            style.attributes.set(Attribute::Dim);
        }
        if self.italic {
            style.attributes.set(Attribute::Italic);
        }
        if self.underline {
            style.attributes.set(Attribute::Underlined);
        }
        if self.reverse {
            style.attributes.set(Attribute::Reverse);
        }
        style
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Padding {
    pub const fn all(n: u16) -> Self {
        Self {
            top: n,
            right: n,
            bottom: n,
            left: n,
        }
    }

    pub const fn xy(x: u16, y: u16) -> Self {
        Self {
            top: y,
            right: x,
            bottom: y,
            left: x,
        }
    }

    pub fn horizontal(&self) -> u16 {
        self.left + self.right
    }

    pub fn vertical(&self) -> u16 {
        self.top + self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    Single,
    Double,
    Rounded,
    Heavy,
}

/// Glyphs for one border style: corners, then horizontal and vertical edges.
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl Border {
    pub fn chars(&self) -> BorderChars {
        let (top_left, top_right, bottom_left, bottom_right, horizontal, vertical) = match self {
            Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
            Border::Double => ('╔', '╗', '╚', '╝', '═', '║'),
            Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
            Border::Heavy => ('┏', '┓', '┗', '┛', '━', '┃'),
        };
        BorderChars {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            horizontal,
            vertical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gap {
    pub row: u16,
    pub column: u16,
}

impl Gap {
    pub const fn row(n: u16) -> Self {
        Self { row: n, column: 0 }
    }

    pub const fn column(n: u16) -> Self {
        Self { row: 0, column: n }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JustifyContent {
    #[default]
    Start,
    End,
    Center,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_prefers_overlay_colors() {
        let base = Style::new().fg(Color::White).bold();
        let patched = base.patch(Style::new().fg(Color::Cyan).dim());
        assert_eq!(patched.fg, Some(Color::Cyan));
        assert!(patched.bold);
        assert!(patched.dim);
    }

    #[test]
    fn default_style_is_plain() {
        assert!(Style::new().is_plain());
        assert!(!Style::new().reverse().is_plain());
    }

    #[test]
    fn padding_sums() {
        let p = Padding::xy(2, 1);
        assert_eq!(p.horizontal(), 4);
        assert_eq!(p.vertical(), 2);
    }
}
