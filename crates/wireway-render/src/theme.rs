//! Semantic style tokens for rendered wireframes.
//!
//! Wireframes are deliberately low-fidelity: the palette only separates
//! interactive, active, muted and disabled states. Anything that must survive
//! `--plain` output is also encoded in the text itself (`[x]`, `[Today]`, `*`).

use wireway_oil::{Color, Style};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeTokens {
    /// Primary text
    pub text: Color,
    /// Secondary text: subtitles, right text, placeholders
    pub muted: Color,
    /// Interactive and active accents
    pub accent: Color,
    /// Dangling-target and not-found placeholder
    pub warning: Color,
    /// Badge fallback when the schema gives no color
    pub badge: Color,
    /// Borders around inputs, cards and images
    pub border: Color,
}

impl ThemeTokens {
    pub const fn default_tokens() -> Self {
        Self {
            text: Color::Reset,
            muted: Color::Gray,
            accent: Color::Cyan,
            warning: Color::Yellow,
            badge: Color::Magenta,
            border: Color::DarkGray,
        }
    }

    /// Get a `&'static` reference to the default tokens.
    pub fn default_ref() -> &'static ThemeTokens {
        static DEFAULT: ThemeTokens = ThemeTokens::default_tokens();
        &DEFAULT
    }

    pub fn title(&self) -> Style {
        Style::new().fg(self.text).bold()
    }

    pub fn muted(&self) -> Style {
        Style::new().fg(self.muted)
    }

    pub fn dim(&self) -> Style {
        Style::new().dim()
    }

    pub fn accent(&self) -> Style {
        Style::new().fg(self.accent)
    }

    pub fn active(&self) -> Style {
        Style::new().fg(self.accent).bold().underline()
    }

    pub fn focused(&self) -> Style {
        Style::new().reverse()
    }

    pub fn disabled(&self) -> Style {
        Style::new().dim()
    }

    pub fn warning(&self) -> Style {
        Style::new().fg(self.warning).bold()
    }

    pub fn border(&self) -> Style {
        Style::new().fg(self.border)
    }

    /// Badge style; known CSS-ish color names map to terminal colors.
    pub fn badge(&self, color: Option<&str>) -> Style {
        let color = match color.map(str::to_ascii_lowercase).as_deref() {
            Some("red") | Some("error") | Some("danger") => Color::Red,
            Some("green") | Some("success") => Color::Green,
            Some("yellow") | Some("orange") | Some("warning") => Color::Yellow,
            Some("blue") | Some("primary") | Some("info") => Color::Blue,
            _ => self.badge,
        };
        Style::new().fg(color).bold()
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self::default_tokens()
    }
}
