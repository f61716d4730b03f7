//! ANSI escape sequence generation.
//!
//! Terminal counterpart of the CSS output: one SGR sequence per styled
//! category, truecolor foregrounds, `1`/`3` for bold/italic.

use std::fmt::Write;

use crate::style::Style;
use crate::theme::Theme;
use crate::token::{self, TokenCategory};

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

/// The SGR sequence for a style. Empty styles produce an empty string, so
/// un-styled text is written bare rather than wrapped in no-op escapes.
pub fn style_sequence(style: &Style) -> String {
    if style.is_empty() {
        return String::new();
    }
    let mut params = Vec::new();
    if style.bold {
        params.push("1".to_string());
    }
    if style.italic {
        params.push("3".to_string());
    }
    if let Some(fg) = style.fg {
        params.push(format!("38;2;{};{};{}", fg.r, fg.g, fg.b));
    }
    format!("\x1b[{}m", params.join(";"))
}

/// The SGR sequence the terminal renderer uses for a category, after
/// hierarchical fallback through the theme.
pub fn category_sequence(theme: &Theme, category: TokenCategory) -> String {
    style_sequence(&theme.resolve(category))
}

/// Render a preview table: one line per styled category, the category name
/// printed in its own style. Used by the CLI's `swatch` subcommand.
pub fn swatch(theme: &Theme) -> String {
    let mut out = String::new();
    for &category in token::ALL {
        let Some(style) = theme.style(category) else {
            continue;
        };
        if style.is_empty() {
            continue;
        }
        let seq = style_sequence(&style);
        let _ = writeln!(out, "{seq}{:<22}{RESET}  {style}", category.name());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use crate::style::Color;

    #[test]
    fn test_empty_style_has_no_sequence() {
        assert_eq!(style_sequence(&Style::new()), "");
    }

    #[test]
    fn test_truecolor_sequence() {
        let style = Style::new().fg(Color::new(0xc6, 0x7a, 0xda));
        assert_eq!(style_sequence(&style), "\x1b[38;2;198;122;218m");
    }

    #[test]
    fn test_modifiers_precede_color() {
        let style = Style::new().fg(Color::new(0xdc, 0xdc, 0xdc)).bold();
        assert_eq!(style_sequence(&style), "\x1b[1;38;2;220;220;220m");

        let style = Style::new().italic();
        assert_eq!(style_sequence(&style), "\x1b[3m");
    }

    #[test]
    fn test_category_sequence_uses_fallback() {
        let theme = builtin::dark();
        // String.Double inherits the String color.
        assert_eq!(
            category_sequence(&theme, TokenCategory::StringDouble),
            category_sequence(&theme, TokenCategory::String)
        );
        // Unstyled categories produce no escape at all.
        assert_eq!(category_sequence(&theme, TokenCategory::Whitespace), "");
    }

    #[test]
    fn test_swatch_lists_each_styled_category_once() {
        let theme = builtin::dark();
        let swatch = swatch(&theme);
        assert_eq!(swatch.lines().count(), theme.effective().len());
        assert_eq!(swatch.matches("Name.Class").count(), 1);
        assert!(swatch.contains(RESET));
    }
}
