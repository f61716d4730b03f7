//! Stylesheet emission.
//!
//! Turns a theme's effective mapping into the CSS the documentation
//! output links against: one rule per styled category, keyed by the
//! engine's short classes, plus a `.hll` rule for highlighted lines.

use std::fmt::Write;

use crate::style::Style;
use crate::theme::Theme;

/// Options controlling stylesheet output.
#[derive(Debug, Clone)]
pub struct CssOptions {
    /// Selector the code container carries, prepended to every rule.
    pub prefix: String,
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            prefix: ".highlight".to_string(),
        }
    }
}

/// Emit a stylesheet for the theme with default options.
pub fn stylesheet(theme: &Theme) -> String {
    stylesheet_with_options(theme, &CssOptions::default())
}

/// Emit a stylesheet for the theme.
///
/// Rules appear in a fixed order: the base rule (only when the theme has
/// something to say about the container), the `.hll` highlight rule, then
/// one rule per styled category in canonical category order. Categories
/// whose effective style is empty, and categories without a CSS class,
/// produce no rule.
pub fn stylesheet_with_options(theme: &Theme, options: &CssOptions) -> String {
    let prefix = &options.prefix;
    let mut css = String::new();

    let base = base_declarations(theme);
    if !base.is_empty() {
        let _ = writeln!(css, "{prefix} {{ {base} }}");
    }

    let _ = writeln!(
        css,
        "{prefix} .hll {{ background-color: {} }}",
        theme.highlight
    );

    for (category, style) in theme.effective() {
        if style.is_empty() {
            continue;
        }
        let Some(class) = category.css_class() else {
            continue;
        };
        let _ = writeln!(css, "{prefix} .{class} {{ {} }}", declarations(&style));
    }

    css
}

/// Declarations for the container itself: the background override (when
/// set) and the default style.
fn base_declarations(theme: &Theme) -> String {
    let mut decls = Vec::new();
    if !theme.default_style.is_empty() {
        decls.push(declarations(&theme.default_style));
    }
    if let Some(background) = theme.background {
        decls.push(format!("background-color: {background}"));
    }
    decls.join("; ")
}

fn declarations(style: &Style) -> String {
    let mut decls = Vec::new();
    if let Some(fg) = style.fg {
        decls.push(format!("color: {fg}"));
    }
    if style.bold {
        decls.push("font-weight: bold".to_string());
    }
    if style.italic {
        decls.push("font-style: italic".to_string());
    }
    decls.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use crate::style::Color;

    #[test]
    fn test_dark_stylesheet_rules() {
        let css = stylesheet(&builtin::dark());
        assert!(css.contains(".highlight .hll { background-color: #34424d }"));
        assert!(css.contains(".highlight .c { color: #686e78 }"));
        assert!(css.contains(".highlight .nc { color: #dcdcdc; font-weight: bold }"));
        assert!(css.contains(".highlight .ge { color: #e6e6e6; font-style: italic }"));
    }

    #[test]
    fn test_unset_background_emits_no_base_rule() {
        let css = stylesheet(&builtin::dark());
        // background = None: the page default shows through, so the base
        // selector must not appear as a standalone rule.
        assert!(!css.contains(".highlight {"));
        assert!(css.starts_with(".highlight .hll"));
    }

    #[test]
    fn test_background_emits_base_rule() {
        let theme = Theme::new("t", Color::new(0x34, 0x42, 0x4d))
            .with_background(Color::new(0x20, 0x20, 0x20));
        let css = stylesheet(&theme);
        assert!(css.starts_with(".highlight { background-color: #202020 }"));
    }

    #[test]
    fn test_one_rule_per_styled_category() {
        let theme = builtin::dark();
        let css = stylesheet(&theme);
        let styled = theme
            .effective()
            .iter()
            .filter(|(c, s)| !s.is_empty() && c.css_class().is_some())
            .count();
        // Every styled category produces exactly one rule, plus .hll.
        assert_eq!(css.lines().count(), styled + 1);
        // Doubled source keys still yield a single rule.
        assert_eq!(css.matches(" .nc ").count(), 1);
        assert_eq!(css.matches(" .nb ").count(), 1);
    }

    #[test]
    fn test_custom_prefix() {
        let options = CssOptions {
            prefix: "pre.m-code".to_string(),
        };
        let css = stylesheet_with_options(&builtin::dark(), &options);
        assert!(css.contains("pre.m-code .k { color: #c67ada }"));
    }
}
