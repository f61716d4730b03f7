//! Dark style table for syntax-highlighted code in generated documentation.
//!
//! This crate provides:
//! - The token-category vocabulary the highlighting engine assigns
//! - Style specs (`bold`/`italic` modifiers plus `#RRGGBB` foregrounds)
//! - The [`Theme`] table: ordered assignments with last-write-wins
//!   semantics and hierarchical fallback
//! - The built-in dark theme ([`builtin::dark`])
//! - CSS and ANSI output generation
//! - TOML round-tripping for custom themes (behind the `toml` feature)
//!
//! # Quick start
//!
//! ```
//! use nocturne::{builtin, css, TokenCategory};
//!
//! let theme = builtin::dark();
//! assert!(theme.background.is_none());
//!
//! // The effective style for a category, after last-write-wins:
//! let class = theme.style(TokenCategory::NameClass).unwrap();
//! assert_eq!(class.to_string(), "bold #dcdcdc");
//!
//! // The stylesheet handed to the docs output:
//! let sheet = css::stylesheet(&theme);
//! assert!(sheet.contains(".highlight .nc"));
//! ```

pub mod ansi;
pub mod builtin;
pub mod css;
pub mod style;
pub mod theme;
pub mod token;

#[cfg(feature = "toml")]
mod serialize;

pub use style::{Color, Style, StyleError};
pub use theme::{Theme, ThemeError};
pub use token::{ALL, TokenCategory};
