//! Built-in themes.

use crate::style::{Color, Style};
use crate::theme::Theme;
use crate::token::TokenCategory;

/// The dark theme used for code snippets in generated documentation.
///
/// No background override (the page supplies its own), `#34424d` as the
/// selected-line highlight, and an empty default style.
///
/// The assignment order reproduces the original table, including the
/// repeated `Name.Builtin` and `Name.Class` entries; the table is
/// last-write-wins, so `Name.Class` ends up `bold #dcdcdc`.
pub fn dark() -> Theme {
    let mut theme = Theme::new("dark", Color::new(0x34, 0x42, 0x4d));

    // C-family code
    theme.set(TokenCategory::Comment, Style::new().fg(Color::new(0x68, 0x6e, 0x78)));
    theme.set(TokenCategory::CommentPreproc, Style::new().fg(Color::new(0xc6, 0x7a, 0xda)));
    theme.set(TokenCategory::CommentPreprocFile, Style::new().fg(Color::new(0x83, 0xa7, 0x6e)));
    theme.set(TokenCategory::Keyword, Style::new().fg(Color::new(0xc6, 0x7a, 0xda)));
    theme.set(TokenCategory::Name, Style::new().fg(Color::new(0x9d, 0xaa, 0xaa)));
    theme.set(TokenCategory::NameClass, Style::new().fg(Color::new(0xdb, 0xba, 0x75)));
    theme.set(TokenCategory::NameBuiltin, Style::new().fg(Color::new(0xdb, 0xba, 0x75)));
    theme.set(TokenCategory::NameFunction, Style::new().fg(Color::new(0x61, 0xaf, 0xef)));
    theme.set(TokenCategory::NameNamespace, Style::new().fg(Color::new(0x00, 0x99, 0x7b)));
    theme.set(TokenCategory::String, Style::new().fg(Color::new(0x83, 0xa7, 0x6e)));
    theme.set(TokenCategory::StringChar, Style::new().fg(Color::new(0x83, 0xa7, 0x6e)));
    theme.set(TokenCategory::StringEscape, Style::new().fg(Color::new(0x83, 0xa7, 0x6e)));
    theme.set(TokenCategory::StringInterpol, Style::new().fg(Color::new(0x83, 0xa7, 0x6e)));
    theme.set(TokenCategory::Number, Style::new().fg(Color::new(0xd2, 0x97, 0x67)));
    theme.set(TokenCategory::Operator, Style::new().fg(Color::new(0x9d, 0xaa, 0xaa)));
    theme.set(TokenCategory::Punctuation, Style::new().fg(Color::new(0x9d, 0xaa, 0xaa)));

    // Build scripts
    theme.set(TokenCategory::NameBuiltin, Style::new().fg(Color::new(0xdb, 0xba, 0x75)));
    theme.set(TokenCategory::NameVariable, Style::new().fg(Color::new(0x9d, 0xaa, 0xaa)));

    // Markup
    theme.set(TokenCategory::NameTag, Style::new().fg(Color::new(0xdc, 0xdc, 0xdc)).bold());
    theme.set(TokenCategory::NameAttribute, Style::new().fg(Color::new(0xdc, 0xdc, 0xdc)).bold());
    theme.set(TokenCategory::NameClass, Style::new().fg(Color::new(0xdc, 0xdc, 0xdc)).bold());
    theme.set(TokenCategory::OperatorWord, Style::new().fg(Color::new(0xdc, 0xdc, 0xdc)).bold());
    theme.set(TokenCategory::GenericHeading, Style::new().fg(Color::new(0xff, 0xff, 0xff)).bold());
    theme.set(TokenCategory::GenericEmph, Style::new().fg(Color::new(0xe6, 0xe6, 0xe6)).italic());
    theme.set(TokenCategory::GenericStrong, Style::new().fg(Color::new(0xe6, 0xe6, 0xe6)).bold());

    // Diffs
    theme.set(TokenCategory::GenericSubheading, Style::new().fg(Color::new(0x5b, 0x9d, 0xd9)));
    theme.set(TokenCategory::GenericInserted, Style::new().fg(Color::new(0x3b, 0xd2, 0x67)));
    theme.set(TokenCategory::GenericDeleted, Style::new().fg(Color::new(0xcd, 0x34, 0x31)));

    theme
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    #[test]
    fn test_dark_scalar_settings() {
        let theme = dark();
        assert_eq!(theme.name, "dark");
        assert_eq!(theme.background, None);
        assert_eq!(theme.highlight, Color::new(0x34, 0x42, 0x4d));
        assert!(theme.default_style.is_empty());
    }

    #[test]
    fn test_dark_doubled_keys_resolve_to_last_value() {
        let theme = dark();
        assert_eq!(
            theme.style(TokenCategory::NameBuiltin),
            Some(Style::new().fg(Color::new(0xdb, 0xba, 0x75)))
        );
        assert_eq!(
            theme.style(TokenCategory::NameClass),
            Some(Style::new().fg(Color::new(0xdc, 0xdc, 0xdc)).bold())
        );
    }

    #[test]
    fn test_dark_effective_table() {
        let theme = dark();
        let expect = [
            (TokenCategory::Comment, "#686e78"),
            (TokenCategory::CommentPreproc, "#c67ada"),
            (TokenCategory::CommentPreprocFile, "#83a76e"),
            (TokenCategory::Keyword, "#c67ada"),
            (TokenCategory::Name, "#9daaaa"),
            (TokenCategory::NameAttribute, "bold #dcdcdc"),
            (TokenCategory::NameBuiltin, "#dbba75"),
            (TokenCategory::NameClass, "bold #dcdcdc"),
            (TokenCategory::NameFunction, "#61afef"),
            (TokenCategory::NameNamespace, "#00997b"),
            (TokenCategory::NameTag, "bold #dcdcdc"),
            (TokenCategory::NameVariable, "#9daaaa"),
            (TokenCategory::String, "#83a76e"),
            (TokenCategory::StringChar, "#83a76e"),
            (TokenCategory::StringEscape, "#83a76e"),
            (TokenCategory::StringInterpol, "#83a76e"),
            (TokenCategory::Number, "#d29767"),
            (TokenCategory::Operator, "#9daaaa"),
            (TokenCategory::OperatorWord, "bold #dcdcdc"),
            (TokenCategory::Punctuation, "#9daaaa"),
            (TokenCategory::GenericDeleted, "#cd3431"),
            (TokenCategory::GenericEmph, "italic #e6e6e6"),
            (TokenCategory::GenericHeading, "bold #ffffff"),
            (TokenCategory::GenericInserted, "#3bd267"),
            (TokenCategory::GenericStrong, "bold #e6e6e6"),
            (TokenCategory::GenericSubheading, "#5b9dd9"),
        ];

        let effective = theme.effective();
        assert_eq!(effective.len(), expect.len());
        for (cat, spec) in expect {
            let style = theme.style(cat).unwrap_or_else(|| panic!("{cat} unset"));
            assert_eq!(style, Style::parse(spec).unwrap(), "wrong style for {cat}");
        }
    }

    #[test]
    fn test_dark_specs_round_trip() {
        // Every assigned style survives Display -> parse unchanged.
        for (cat, style) in dark().assignments() {
            let spec = style.to_string();
            assert_eq!(Style::parse(&spec), Ok(style), "{cat}: {spec:?}");
        }
    }

    #[test]
    fn test_dark_subcategories_inherit() {
        let theme = dark();
        // String.Double has no entry of its own; the engine falls back to
        // the String color.
        assert_eq!(
            theme.resolve(TokenCategory::StringDouble),
            theme.resolve(TokenCategory::String)
        );
        // Unstyled top-level categories fall through to the empty default.
        assert!(theme.resolve(TokenCategory::Whitespace).is_empty());
    }
}
