//! Theme color palette.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// One named theme color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub name: String,
    pub slug: String,
    pub color: String,
}

/// The theme-provided colors offered by the palette pickers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemePalette {
    colors: Vec<PaletteColor>,
}

impl ThemePalette {
    /// Build a palette from its colors.
    pub fn new(colors: Vec<PaletteColor>) -> Self {
        Self { colors }
    }

    /// Parse a JSON array of `{name, slug, color}` objects.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// All colors in palette order.
    pub fn colors(&self) -> &[PaletteColor] {
        &self.colors
    }

    /// Find the palette entry for a color value.
    ///
    /// Values match when they are equal ignoring ASCII case, or when both
    /// parse to the same opaque RGB color (`#FFF` matches `#ffffff`).
    pub fn find_by_color(&self, value: &str) -> Option<&PaletteColor> {
        let value = value.trim();
        let parsed: Option<Color> = value.parse().ok();

        self.colors.iter().find(|entry| {
            if entry.color.trim().eq_ignore_ascii_case(value) {
                return true;
            }
            match (parsed, entry.color.parse::<Color>().ok()) {
                (Some(a), Some(b)) => a.is_opaque() && b.is_opaque() && a.to_hex() == b.to_hex(),
                _ => false,
            }
        })
    }

    /// Find a palette entry by slug.
    pub fn find_by_slug(&self, slug: &str) -> Option<&PaletteColor> {
        self.colors.iter().find(|entry| entry.slug == slug)
    }
}

/// CSS class for a palette color in a given context.
///
/// `color_class_name("background-color", "vivid red")` is
/// `has-vivid-red-background-color`.
pub fn color_class_name(context: &str, slug: &str) -> String {
    format!("has-{}-{context}", kebab_case(slug))
}

/// Lowercase, hyphen-separated words. Word breaks happen at
/// non-alphanumerics, lower-to-upper case changes and letter/digit changes.
pub fn kebab_case(input: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in input.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        if let Some(p) = prev {
            let case_break = p.is_lowercase() && c.is_uppercase();
            let digit_break = p.is_ascii_digit() != c.is_ascii_digit();
            if (case_break || digit_break) && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_lowercase());
        prev = Some(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words.join("-")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn palette() -> ThemePalette {
        ThemePalette::from_json(
            r##"[
                {"name": "Pale pink", "slug": "pale-pink", "color": "#f78da7"},
                {"name": "Very dark gray", "slug": "very-dark-gray", "color": "#313131"},
                {"name": "White", "slug": "white", "color": "#FFFFFF"}
            ]"##,
        )
        .unwrap()
    }

    #[test]
    fn find_by_exact_and_equivalent_color() {
        let palette = palette();
        assert_eq!(palette.find_by_color("#f78da7").unwrap().slug, "pale-pink");
        assert_eq!(palette.find_by_color("#F78DA7").unwrap().slug, "pale-pink");
        assert_eq!(palette.find_by_color("#fff").unwrap().slug, "white");
        assert_eq!(palette.find_by_color("rgb(49, 49, 49)").unwrap().slug, "very-dark-gray");
        assert!(palette.find_by_color("#123456").is_none());
    }

    #[test]
    fn find_by_slug() {
        assert_eq!(palette().find_by_slug("white").unwrap().name, "White");
        assert!(palette().find_by_slug("black").is_none());
    }

    #[test]
    fn class_names() {
        assert_eq!(
            color_class_name("background-color", "pale-pink"),
            "has-pale-pink-background-color"
        );
        assert_eq!(color_class_name("color", "vividRed"), "has-vivid-red-color");
    }

    #[test]
    fn kebab_case_breaks() {
        assert_eq!(kebab_case("Very dark gray"), "very-dark-gray");
        assert_eq!(kebab_case("accent2"), "accent-2");
        assert_eq!(kebab_case("--primary--"), "primary");
        assert_eq!(kebab_case(""), "");
    }
}
