//! Colour themes.
//!
//! Maps highlight categories to foreground colours. The built-in theme is
//! embedded at compile time; a user theme file overrides individual entries.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::highlight::Category;

/// A 24-bit RGB colour written as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// ANSI truecolor foreground escape
    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// ANSI truecolor background escape
    pub fn ansi_bg(&self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6 && hex.is_ascii())
            .ok_or_else(|| anyhow!("Invalid colour '{}', expected #RRGGBB", s))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .with_context(|| format!("Invalid colour '{}'", s))
        };

        Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Color {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Theme file structure (matches TOML); every entry is optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ThemeFile {
    pub name: Option<String>,
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub gutter: Option<Color>,
    /// Keyed by category name (`keyword`, `self_ident`, ...)
    #[serde(default)]
    pub categories: HashMap<String, Color>,
}

/// Resolved theme
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub foreground: Color,
    pub gutter: Color,
    categories: HashMap<Category, Color>,
}

impl Theme {
    /// The built-in theme, parsed from the embedded TOML
    pub fn embedded_default() -> Self {
        let embedded_toml = include_str!("../resources/themes/default.toml");

        match toml::from_str::<ThemeFile>(embedded_toml) {
            Ok(file) => Self::fallback().with_overrides(file),
            Err(e) => {
                log::warn!(
                    "Failed to parse embedded theme: {}. Using minimal fallback.",
                    e
                );
                Self::fallback()
            }
        }
    }

    /// Load a theme file on top of the built-in theme
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading theme file {}", path.display()))?;
        let file: ThemeFile = toml::from_str(&content)
            .with_context(|| format!("parsing theme file {}", path.display()))?;
        Ok(Self::embedded_default().with_overrides(file))
    }

    /// Built-in theme, or the given file layered on top
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::embedded_default()),
        }
    }

    /// Minimal theme with the classic keyword, string and comment colours
    fn fallback() -> Self {
        let categories = HashMap::from([
            (Category::Keyword, Color::rgb(0x00, 0xFF, 0xFF)),
            (Category::String, Color::rgb(0x00, 0xFF, 0x00)),
            (Category::Comment, Color::rgb(0xC0, 0xC0, 0xC0)),
        ]);

        Self {
            name: "fallback".to_string(),
            background: Color::rgb(0x2F, 0x4F, 0x4F),
            foreground: Color::rgb(0xFF, 0xFF, 0xFF),
            gutter: Color::rgb(0x80, 0x80, 0x80),
            categories,
        }
    }

    fn with_overrides(mut self, file: ThemeFile) -> Self {
        if let Some(name) = file.name {
            self.name = name;
        }
        self.background = file.background.unwrap_or(self.background);
        self.foreground = file.foreground.unwrap_or(self.foreground);
        self.gutter = file.gutter.unwrap_or(self.gutter);
        for (name, color) in file.categories {
            match Category::from_name(&name) {
                Some(category) => {
                    self.categories.insert(category, color);
                }
                None => log::warn!("Unknown theme category '{}'", name),
            }
        }
        self
    }

    /// Foreground colour for a category; uncoloured categories use the
    /// plain foreground
    pub fn color(&self, category: Category) -> Color {
        self.categories
            .get(&category)
            .copied()
            .unwrap_or(self.foreground)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::embedded_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        let color: Color = "#2F4F4F".parse().unwrap();
        assert_eq!(color, Color::rgb(0x2F, 0x4F, 0x4F));
        assert_eq!(color.to_string(), "#2F4F4F");
    }

    #[test]
    fn test_invalid_colors() {
        assert!("2F4F4F".parse::<Color>().is_err());
        assert!("#2F4F".parse::<Color>().is_err());
        assert!("#GGGGGG".parse::<Color>().is_err());
    }

    #[test]
    fn test_embedded_theme_has_classic_colors() {
        let theme = Theme::embedded_default();
        assert_eq!(theme.name, "slate");
        assert_eq!(theme.color(Category::Keyword), Color::rgb(0x00, 0xFF, 0xFF));
        assert_eq!(theme.color(Category::String), Color::rgb(0x00, 0xFF, 0x00));
        assert_eq!(theme.color(Category::Comment), Color::rgb(0xC0, 0xC0, 0xC0));
        assert_eq!(theme.background, Color::rgb(0x2F, 0x4F, 0x4F));
    }

    #[test]
    fn test_overrides_are_partial() {
        let file: ThemeFile =
            toml::from_str("[categories]\nnumber = \"#010203\"\n").unwrap();
        let theme = Theme::embedded_default().with_overrides(file);
        assert_eq!(theme.color(Category::Number), Color::rgb(1, 2, 3));
        assert_eq!(theme.color(Category::Keyword), Color::rgb(0x00, 0xFF, 0xFF));
        assert_eq!(theme.name, "slate");
    }

    #[test]
    fn test_ansi_escapes() {
        let color = Color::rgb(1, 2, 3);
        assert_eq!(color.ansi_fg(), "\x1b[38;2;1;2;3m");
        assert_eq!(color.ansi_bg(), "\x1b[48;2;1;2;3m");
    }
}
