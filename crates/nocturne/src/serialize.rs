//! TOML (de)serialization for themes.
//!
//! The document form is what ships in a docs project's configuration:
//!
//! ```toml
//! name = "dark"
//! highlight = "#34424d"
//!
//! [styles]
//! "Comment" = "#686e78"
//! "Name.Class" = "bold #dcdcdc"
//! ```
//!
//! `background` and `default` are optional; omitting `background` means
//! "no override". TOML forbids duplicate keys, so a serialized theme
//! carries the effective (last-write-wins) value per category; reloading
//! it yields a theme with the identical effective mapping.

use toml::Value;

use crate::style::{Color, Style};
use crate::theme::{Theme, ThemeError};
use crate::token::TokenCategory;

impl Theme {
    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> String {
        let mut root = toml::Table::new();
        root.insert("name".into(), Value::String(self.name.clone()));
        if let Some(background) = self.background {
            root.insert("background".into(), Value::String(background.to_string()));
        }
        root.insert("highlight".into(), Value::String(self.highlight.to_string()));
        if !self.default_style.is_empty() {
            root.insert(
                "default".into(),
                Value::String(self.default_style.to_string()),
            );
        }

        let mut styles = toml::Table::new();
        for (category, style) in self.effective() {
            styles.insert(category.name().into(), Value::String(style.to_string()));
        }
        root.insert("styles".into(), Value::Table(styles));

        // A Table of strings always serializes.
        toml::to_string(&root).expect("theme serialization cannot fail")
    }

    /// Parse a TOML document into a theme.
    ///
    /// `name` and `highlight` are required. Every `[styles]` key must be a
    /// known token category and every value a valid style spec.
    pub fn from_toml_str(input: &str) -> Result<Self, ThemeError> {
        let value: Value = input
            .parse()
            .map_err(|e: toml::de::Error| ThemeError::Malformed(e.to_string()))?;
        let table = value
            .as_table()
            .ok_or_else(|| ThemeError::Malformed("expected a table".to_string()))?;

        let name = table
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or(ThemeError::MissingField("name"))?;

        let highlight = table
            .get("highlight")
            .and_then(|v| v.as_str())
            .ok_or(ThemeError::MissingField("highlight"))?;
        let highlight = Color::from_hex(highlight).map_err(|error| ThemeError::InvalidSetting {
            setting: "highlight",
            error,
        })?;

        let mut theme = Theme::new(name, highlight);

        if let Some(background) = table.get("background").and_then(|v| v.as_str()) {
            let background =
                Color::from_hex(background).map_err(|error| ThemeError::InvalidSetting {
                    setting: "background",
                    error,
                })?;
            theme = theme.with_background(background);
        }

        if let Some(default) = table.get("default").and_then(|v| v.as_str()) {
            let default = Style::parse(default).map_err(|error| ThemeError::InvalidSetting {
                setting: "default",
                error,
            })?;
            theme = theme.with_default_style(default);
        }

        if let Some(styles) = table.get("styles") {
            let styles = styles
                .as_table()
                .ok_or_else(|| ThemeError::Malformed("styles must be a table".to_string()))?;
            for (key, value) in styles {
                let category = TokenCategory::parse(key)
                    .ok_or_else(|| ThemeError::UnknownCategory(key.clone()))?;
                let spec = value.as_str().ok_or_else(|| {
                    ThemeError::Malformed(format!("style for {key} must be a string"))
                })?;
                let style = Style::parse(spec).map_err(|error| ThemeError::InvalidStyle {
                    category: key.clone(),
                    error,
                })?;
                theme.set(category, style);
            }
        }

        Ok(theme)
    }
}
