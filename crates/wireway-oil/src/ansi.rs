//! Width and escape-sequence helpers for already-styled lines.

use unicode_width::UnicodeWidthStr;

/// Drop CSI (`ESC [ ... final`) and OSC (`ESC ] ... BEL`) sequences.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('[') => {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            Some(']') => {
                while let Some(c) = chars.next() {
                    if c == '\x07' {
                        break;
                    }
                    if c == '\x1b' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => {}
        }
    }

    out
}

/// Display columns taken by `s` once escape sequences are removed.
pub fn visible_width(s: &str) -> usize {
    if !s.contains('\x1b') {
        return s.width();
    }
    strip_ansi(s).width()
}

/// Right-pad `line` with spaces up to `width` display columns.
pub fn pad_to(line: &str, width: usize) -> String {
    let current = visible_width(line);
    if current >= width {
        return line.to_string();
    }
    format!("{line}{}", " ".repeat(width - current))
}

/// Cut plain text to at most `width` columns.
pub fn truncate_plain(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("plain", "plain" ; "no escapes")]
    #[test_case("\x1b[1mbold\x1b[0m", "bold" ; "sgr")]
    #[test_case("\x1b[38;2;1;2;3mrgb\x1b[39m", "rgb" ; "truecolor")]
    #[test_case("a\x1b]8;;http://x\x07link\x1b]8;;\x07b", "alinkb" ; "osc hyperlink")]
    fn strips(input: &str, expected: &str) {
        assert_eq!(strip_ansi(input), expected);
    }

    #[test]
    fn visible_width_ignores_styling_and_counts_wide_chars() {
        assert_eq!(visible_width("\x1b[7m[x]\x1b[0m"), 3);
        assert_eq!(visible_width("日本"), 4);
    }

    #[test]
    fn pad_to_respects_escapes() {
        let padded = pad_to("\x1b[1mab\x1b[0m", 4);
        assert_eq!(visible_width(&padded), 4);
        assert!(padded.ends_with("  "));
    }

    #[test]
    fn truncate_plain_stops_before_overflow() {
        assert_eq!(truncate_plain("abcdef", 3), "abc");
        assert_eq!(truncate_plain("日本語", 5), "日本");
    }
}
