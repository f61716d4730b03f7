//! Colors and style specs.
//!
//! A style spec is the short string form used in theme tables: zero or more
//! whitespace-separated modifier keywords (`bold`, `italic`) followed by an
//! optional `#RRGGBB` color literal. `"bold #dcdcdc"`, `"italic"`, and
//! `"#686e78"` are all valid; the empty string is the empty style.

use std::fmt;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff0000` or `ff0000`.
    pub fn from_hex(s: &str) -> Result<Self, StyleError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(StyleError::InvalidColor(s.to_string()));
        }
        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| StyleError::InvalidColor(s.to_string()))?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| StyleError::InvalidColor(s.to_string()))?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| StyleError::InvalidColor(s.to_string()))?;
        Ok(Self { r, g, b })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A display style for one token category: optional foreground color plus
/// bold/italic modifiers. Absence of a foreground means "inherit".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Option<Color>,
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bold: false,
            italic: false,
        }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && !self.bold && !self.italic
    }

    /// Parse a style spec string.
    ///
    /// The grammar is `(bold|italic)* ("#" RRGGBB)?`: modifiers first, at
    /// most one color, color last. Repeated modifiers, trailing tokens
    /// after the color, and anything outside the grammar are rejected.
    pub fn parse(spec: &str) -> Result<Self, StyleError> {
        let mut style = Style::new();
        let mut saw_color = false;

        for token in spec.split_whitespace() {
            if saw_color {
                return Err(StyleError::TrailingToken(token.to_string()));
            }
            match token {
                "bold" => {
                    if style.bold {
                        return Err(StyleError::DuplicateModifier("bold"));
                    }
                    style.bold = true;
                }
                "italic" => {
                    if style.italic {
                        return Err(StyleError::DuplicateModifier("italic"));
                    }
                    style.italic = true;
                }
                _ if token.starts_with('#') => {
                    style.fg = Some(Color::from_hex(token)?);
                    saw_color = true;
                }
                _ => return Err(StyleError::UnknownModifier(token.to_string())),
            }
        }

        Ok(style)
    }
}

/// Display emits the canonical spec form: `bold`, then `italic`, then the
/// color. The empty style displays as the empty string.
impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut need_space = false;
        if self.bold {
            f.write_str("bold")?;
            need_space = true;
        }
        if self.italic {
            if need_space {
                f.write_str(" ")?;
            }
            f.write_str("italic")?;
            need_space = true;
        }
        if let Some(fg) = self.fg {
            if need_space {
                f.write_str(" ")?;
            }
            write!(f, "{fg}")?;
        }
        Ok(())
    }
}

/// Error parsing a style spec string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// Not a `#RRGGBB` color literal.
    InvalidColor(String),
    /// A modifier keyword outside the grammar (only `bold` and `italic`
    /// exist).
    UnknownModifier(String),
    /// The same modifier appeared twice.
    DuplicateModifier(&'static str),
    /// A token after the color literal (the color must come last).
    TrailingToken(String),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::InvalidColor(s) => write!(f, "invalid color literal: {s:?}"),
            StyleError::UnknownModifier(s) => write!(f, "unknown style modifier: {s:?}"),
            StyleError::DuplicateModifier(m) => write!(f, "duplicate style modifier: {m}"),
            StyleError::TrailingToken(s) => {
                write!(f, "unexpected token after color: {s:?}")
            }
        }
    }
}

impl std::error::Error for StyleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#34424d"), Ok(Color::new(0x34, 0x42, 0x4d)));
        assert_eq!(Color::from_hex("dbba75"), Ok(Color::new(0xdb, 0xba, 0x75)));
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn test_color_display_round_trip() {
        let c = Color::new(0xdb, 0xba, 0x75);
        assert_eq!(c.to_string(), "#dbba75");
        assert_eq!(Color::from_hex(&c.to_string()), Ok(c));
    }

    #[test]
    fn test_parse_color_only() {
        let s = Style::parse("#686e78").unwrap();
        assert_eq!(s, Style::new().fg(Color::new(0x68, 0x6e, 0x78)));
    }

    #[test]
    fn test_parse_modifiers_and_color() {
        let s = Style::parse("bold #dcdcdc").unwrap();
        assert_eq!(s, Style::new().fg(Color::new(0xdc, 0xdc, 0xdc)).bold());

        let s = Style::parse("italic #e6e6e6").unwrap();
        assert_eq!(s, Style::new().fg(Color::new(0xe6, 0xe6, 0xe6)).italic());

        let s = Style::parse("bold italic #ffffff").unwrap();
        assert!(s.bold && s.italic);
    }

    #[test]
    fn test_parse_bare_modifier() {
        let s = Style::parse("bold").unwrap();
        assert_eq!(s, Style::new().bold());
        assert!(s.fg.is_none());
    }

    #[test]
    fn test_parse_empty_is_empty_style() {
        let s = Style::parse("").unwrap();
        assert!(s.is_empty());
        assert_eq!(s.to_string(), "");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            Style::parse("underline #ffffff"),
            Err(StyleError::UnknownModifier("underline".into()))
        );
        assert_eq!(
            Style::parse("bold bold"),
            Err(StyleError::DuplicateModifier("bold"))
        );
        assert_eq!(
            Style::parse("#ffffff bold"),
            Err(StyleError::TrailingToken("bold".into()))
        );
        assert!(Style::parse("#ffff").is_err());
    }

    #[test]
    fn test_display_canonical_order() {
        // Parse accepts "italic bold", Display re-emits canonically.
        let s = Style::parse("italic bold #e6e6e6").unwrap();
        assert_eq!(s.to_string(), "bold italic #e6e6e6");
    }

    #[test]
    fn test_display_parse_round_trip() {
        for spec in ["", "bold", "italic", "#dbba75", "bold #dcdcdc", "bold italic #ffffff"] {
            let s = Style::parse(spec).unwrap();
            assert_eq!(Style::parse(&s.to_string()), Ok(s), "spec {spec:?}");
        }
    }
}
