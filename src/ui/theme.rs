//! Color palettes for the hero list.
//!
//! A [`Theme`] is a named set of hex colors, one per screen element. Three
//! Catppuccin palettes are compiled in; a user palette can be loaded from a
//! TOML file named by `theme_file` in the configuration.
//!
//! | Name                | Flavor                     |
//! |---------------------|----------------------------|
//! | `catppuccin-mocha`  | dark, the default          |
//! | `catppuccin-latte`  | light                      |
//! | `catppuccin-frappe` | muted dark                 |
//!
//! A custom palette must define every color except `header_bg`:
//!
//! ```toml
//! name = "justice"
//!
//! [colors]
//! header_fg = "#e0e0e0"
//! selection_fg = "#101010"
//! selection_bg = "#ffd54f"
//! text_normal = "#e0e0e0"
//! text_dim = "#757575"
//! border = "#424242"
//! filter_bar_fg = "#ffd54f"
//! match_highlight_fg = "#101010"
//! match_highlight_bg = "#4fc3f7"
//! empty_state_fg = "#4fc3f7"
//! error_fg = "#e57373"
//! info_fg = "#81c784"
//! dialog_border = "#ffb74d"
//! universe_dc = "#64b5f6"
//! universe_marvel = "#e57373"
//! universe_other = "#bdbdbd"
//! ```
//!
//! Colors become 24-bit ANSI escapes through [`Theme::fg`] and [`Theme::bg`]:
//!
//! ```rust
//! use hero_catalog::ui::Theme;
//!
//! let theme = Theme::default();
//! let line = format!("{}BATMAN{}", Theme::fg(&theme.colors.universe_dc), Theme::reset());
//! assert!(line.starts_with("\u{1b}[38;2;"));
//! ```

use crate::domain::error::{CatalogError, Result};
use crate::domain::Universe;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: [&str; 3] = ["catppuccin-mocha", "catppuccin-latte", "catppuccin-frappe"];

const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Compiled-in palette sources, keyed by name.
const BUILTIN_SOURCES: [(&str, &str); 3] = [
    ("catppuccin-mocha", include_str!("../../themes/catppuccin-mocha.toml")),
    ("catppuccin-latte", include_str!("../../themes/catppuccin-latte.toml")),
    ("catppuccin-frappe", include_str!("../../themes/catppuccin-frappe.toml")),
];

/// A named palette.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#rrggbb`) for each element of the list screen.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title bar text.
    pub header_fg: String,
    /// Title bar fill; the terminal background when absent.
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    /// Table cells.
    pub text_normal: String,
    /// Column headings, footer keys, empty-state subtitles.
    pub text_dim: String,
    pub border: String,

    /// The `Name: ... ID: ...` line above the table.
    pub filter_bar_fg: String,
    /// Characters of a name matching the active filter.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,
    pub error_fg: String,
    pub info_fg: String,
    pub dialog_border: String,

    pub universe_dc: String,
    pub universe_marvel: String,
    pub universe_other: String,
}

impl ThemeColors {
    /// Label color for `universe` in the table.
    #[must_use]
    pub fn universe(&self, universe: Universe) -> &str {
        match universe {
            Universe::Dc => &self.universe_dc,
            Universe::Marvel => &self.universe_marvel,
            Universe::Other => &self.universe_other,
        }
    }
}

/// A parsed `#rrggbb` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rgb(u8, u8, u8);

impl Rgb {
    /// Substituted for anything that is not six hex digits.
    const FALLBACK: Self = Self(255, 255, 255);

    fn parse(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
        Some(Self(channel(0)?, channel(2)?, channel(4)?))
    }

    /// SGR sequence selecting this color; `layer` is 38 (text) or 48 (fill).
    fn escape(self, layer: u8) -> String {
        let Self(r, g, b) = self;
        format!("\u{1b}[{layer};2;{r};{g};{b}m")
    }
}

impl Theme {
    /// One of the compiled-in palettes, `None` for an unknown name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let (_, source) = BUILTIN_SOURCES.iter().find(|(builtin, _)| *builtin == name)?;
        match toml::from_str(source) {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::error!(theme = %name, error = %e, "built-in theme does not parse");
                None
            }
        }
    }

    /// Reads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Theme`] when the file is unreadable, is not TOML, or
    /// lacks a required color.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Theme(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&source)
            .map_err(|e| CatalogError::Theme(format!("invalid theme {}: {e}", path.display())))
    }

    /// Picks the palette named by the configuration.
    ///
    /// `file` is tried first, then the built-in `name`; whatever fails is
    /// logged and the default palette is used.
    #[must_use]
    pub fn resolve(name: Option<&str>, file: Option<&Path>) -> Self {
        if let Some(file) = file {
            match Self::from_file(file) {
                Ok(theme) => return theme,
                Err(e) => tracing::warn!(error = %e, "ignoring theme file"),
            }
        }
        if let Some(name) = name {
            if let Some(theme) = Self::from_name(name) {
                return theme;
            }
            tracing::warn!(theme = %name, "unknown built-in theme");
        }
        Self::default()
    }

    /// Text color escape. Malformed colors render white.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        Rgb::parse(hex).unwrap_or(Rgb::FALLBACK).escape(38)
    }

    /// Fill color escape. Malformed colors render white.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        Rgb::parse(hex).unwrap_or(Rgb::FALLBACK).escape(48)
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{1b}[2m"
    }

    /// Ends every active style.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{1b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Only if the compiled-in palette is malformed, which the tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("default theme is compiled in")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn every_builtin_parses() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::fg("#010203"), "\u{1b}[38;2;1;2;3m");
        assert_eq!(Theme::bg(" ff8000 "), "\u{1b}[48;2;255;128;0m");
        assert_eq!(Theme::bg("zzzzzz"), "\u{1b}[48;2;255;255;255m");
        assert_eq!(Rgb::parse("#abc"), None);
    }

    #[test]
    fn custom_file_overrides_builtin_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mocha = include_str!("../../themes/catppuccin-mocha.toml");
        write!(file, "{}", mocha.replace("catppuccin-mocha", "my-theme")).unwrap();

        let theme = Theme::resolve(Some("catppuccin-latte"), Some(file.path()));
        assert_eq!(theme.name, "my-theme");
    }

    #[test]
    fn broken_file_is_a_theme_error_and_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = 3").unwrap();

        assert!(matches!(Theme::from_file(file.path()), Err(CatalogError::Theme(_))));
        let theme = Theme::resolve(Some("catppuccin-latte"), Some(file.path()));
        assert_eq!(theme.name, "catppuccin-latte");
        assert_eq!(Theme::resolve(Some("nope"), None).name, DEFAULT_THEME);
    }

    #[test]
    fn universe_palette() {
        let theme = Theme::default();
        assert_eq!(theme.colors.universe(Universe::Dc), theme.colors.universe_dc);
        assert_eq!(theme.colors.universe(Universe::Marvel), theme.colors.universe_marvel);
    }
}
