//! The style table.
//!
//! A [`Theme`] is an ordered sequence of `(category, style)` assignments
//! plus three scalar settings: an optional background override, the
//! highlight tint used for selected-line emphasis, and a default style the
//! engine falls back to when nothing else matches.
//!
//! The table is evaluated as a sequence of assignments: a later assignment
//! to the same category overrides an earlier one. Themes are built once and
//! read-only afterwards.

use std::fmt;

use crate::style::{Color, Style, StyleError};
use crate::token::{self, TokenCategory};

/// A named style table handed to the highlighting engine at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Display name of the theme.
    pub name: String,
    /// Page/terminal background override. `None` means no override.
    pub background: Option<Color>,
    /// Background tint for emphasized/selected lines.
    pub highlight: Color,
    /// Fallback style for categories with no assignment anywhere in their
    /// parent chain.
    pub default_style: Style,
    assignments: Vec<(TokenCategory, Style)>,
}

impl Theme {
    /// Create an empty theme with no background override and an empty
    /// default style.
    pub fn new(name: impl Into<String>, highlight: Color) -> Self {
        Self {
            name: name.into(),
            background: None,
            highlight,
            default_style: Style::new(),
            assignments: Vec::new(),
        }
    }

    /// Set the background override.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    /// Set the default style.
    pub fn with_default_style(mut self, style: Style) -> Self {
        self.default_style = style;
        self
    }

    /// Append an assignment. Assigning a category that already has a style
    /// is allowed; the later assignment wins.
    pub fn set(&mut self, category: TokenCategory, style: Style) {
        self.assignments.push((category, style));
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, category: TokenCategory, style: Style) -> Self {
        self.set(category, style);
        self
    }

    /// The effective style assigned to this exact category: the last
    /// assignment, or `None` if the category was never assigned.
    pub fn style(&self, category: TokenCategory) -> Option<Style> {
        self.assignments
            .iter()
            .rev()
            .find(|(c, _)| *c == category)
            .map(|(_, s)| *s)
    }

    /// The style the engine will use for this category: the category's own
    /// assignment if present, otherwise the nearest assigned ancestor,
    /// otherwise the default style.
    pub fn resolve(&self, category: TokenCategory) -> Style {
        let mut cursor = Some(category);
        while let Some(cat) = cursor {
            if let Some(style) = self.style(cat) {
                return style;
            }
            cursor = cat.parent();
        }
        self.default_style
    }

    /// The raw assignment sequence, in declaration order, duplicates
    /// included.
    pub fn assignments(&self) -> impl Iterator<Item = (TokenCategory, Style)> + '_ {
        self.assignments.iter().copied()
    }

    /// The deduplicated last-write-wins mapping, in canonical category
    /// order.
    pub fn effective(&self) -> Vec<(TokenCategory, Style)> {
        token::ALL
            .iter()
            .filter_map(|&cat| self.style(cat).map(|style| (cat, style)))
            .collect()
    }
}

/// Error building or loading a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A category name outside the engine's vocabulary.
    UnknownCategory(String),
    /// A malformed style spec for the named category.
    InvalidStyle {
        category: String,
        error: StyleError,
    },
    /// A malformed scalar setting (`background`, `highlight`, `default`).
    InvalidSetting {
        setting: &'static str,
        error: StyleError,
    },
    /// A required field is missing from a serialized theme.
    MissingField(&'static str),
    /// The document could not be parsed at all.
    Malformed(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::UnknownCategory(name) => {
                write!(f, "unknown token category: {name:?}")
            }
            ThemeError::InvalidStyle { category, error } => {
                write!(f, "invalid style for {category}: {error}")
            }
            ThemeError::InvalidSetting { setting, error } => {
                write!(f, "invalid {setting}: {error}")
            }
            ThemeError::MissingField(field) => write!(f, "missing field: {field}"),
            ThemeError::Malformed(msg) => write!(f, "malformed theme: {msg}"),
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ThemeError::InvalidStyle { error, .. } | ThemeError::InvalidSetting { error, .. } => {
                Some(error)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_theme() -> Theme {
        Theme::new("test", Color::new(0x34, 0x42, 0x4d))
            .with(
                TokenCategory::String,
                Style::new().fg(Color::new(0x83, 0xa7, 0x6e)),
            )
            .with(
                TokenCategory::Keyword,
                Style::new().fg(Color::new(0xc6, 0x7a, 0xda)),
            )
    }

    #[test]
    fn test_last_write_wins() {
        let mut theme = test_theme();
        theme.set(
            TokenCategory::NameClass,
            Style::new().fg(Color::new(0xdb, 0xba, 0x75)),
        );
        theme.set(
            TokenCategory::NameClass,
            Style::new().fg(Color::new(0xdc, 0xdc, 0xdc)).bold(),
        );

        let effective = theme.style(TokenCategory::NameClass).unwrap();
        assert_eq!(
            effective,
            Style::new().fg(Color::new(0xdc, 0xdc, 0xdc)).bold()
        );
        // Both assignments remain visible in the raw sequence.
        assert_eq!(
            theme
                .assignments()
                .filter(|(c, _)| *c == TokenCategory::NameClass)
                .count(),
            2
        );
    }

    #[test]
    fn test_resolve_falls_back_to_parent() {
        let theme = test_theme();
        // String.Char has no assignment, String does.
        assert_eq!(theme.style(TokenCategory::StringChar), None);
        assert_eq!(
            theme.resolve(TokenCategory::StringChar),
            theme.resolve(TokenCategory::String)
        );
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let theme = test_theme().with_default_style(Style::new().italic());
        assert_eq!(theme.resolve(TokenCategory::Punctuation), Style::new().italic());
    }

    #[test]
    fn test_effective_deduplicates_in_canonical_order() {
        let mut theme = test_theme();
        theme.set(
            TokenCategory::NameBuiltin,
            Style::new().fg(Color::new(0xdb, 0xba, 0x75)),
        );
        theme.set(
            TokenCategory::NameBuiltin,
            Style::new().fg(Color::new(0xdb, 0xba, 0x75)),
        );

        let effective = theme.effective();
        assert_eq!(
            effective
                .iter()
                .filter(|(c, _)| *c == TokenCategory::NameBuiltin)
                .count(),
            1
        );
        // Canonical order: Keyword before Name.Builtin before String.
        let positions: Vec<usize> = [
            TokenCategory::Keyword,
            TokenCategory::NameBuiltin,
            TokenCategory::String,
        ]
        .iter()
        .map(|cat| effective.iter().position(|(c, _)| c == cat).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_no_background_by_default() {
        assert_eq!(test_theme().background, None);
    }
}
