//! Color attributes of the navigation menu block and the classes and
//! inline styles derived from them.

use serde_json::Value;

use crate::block::Attributes;
use crate::color_selector::{ColorChange, ColorType, ThemePalette, color_class_name};
use crate::html::safe_css_value;

/// Class added when a theme background color is chosen.
pub const HAS_BACKGROUND_COLOR: &str = "has-background-color";

/// Class added when a theme text color is chosen.
pub const HAS_TEXT_COLOR: &str = "has-text-color";

/// Color attributes of a navigation menu block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorAttributes {
    /// Theme palette slug for the background.
    pub background_color: Option<String>,
    /// Theme palette slug for the text.
    pub text_color: Option<String>,
    pub background_color_css_class: Option<String>,
    pub text_color_css_class: Option<String>,
    /// Raw background picked outside the palette.
    pub custom_background_color: Option<String>,
    /// Resolved background value.
    pub background_color_value: Option<String>,
    /// Raw text color picked outside the palette.
    pub custom_text_color: Option<String>,
    /// Resolved text color value.
    pub text_color_value: Option<String>,
}

const BACKGROUND_COLOR: &str = "backgroundColor";
const TEXT_COLOR: &str = "textColor";
const BACKGROUND_COLOR_CSS_CLASS: &str = "backgroundColorCSSClass";
const TEXT_COLOR_CSS_CLASS: &str = "textColorCSSClass";
const CUSTOM_BACKGROUND_COLOR: &str = "customBackgroundColor";
const BACKGROUND_COLOR_VALUE: &str = "backgroundColorValue";
const CUSTOM_TEXT_COLOR: &str = "customTextColor";
const TEXT_COLOR_VALUE: &str = "textColorValue";

impl ColorAttributes {
    /// Read the color keys from block attributes.
    ///
    /// Keys holding non-string values are treated as absent.
    pub fn from_attributes(attrs: &Attributes) -> Self {
        let get = |key: &str| attrs.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            background_color: get(BACKGROUND_COLOR),
            text_color: get(TEXT_COLOR),
            background_color_css_class: get(BACKGROUND_COLOR_CSS_CLASS),
            text_color_css_class: get(TEXT_COLOR_CSS_CLASS),
            custom_background_color: get(CUSTOM_BACKGROUND_COLOR),
            background_color_value: get(BACKGROUND_COLOR_VALUE),
            custom_text_color: get(CUSTOM_TEXT_COLOR),
            text_color_value: get(TEXT_COLOR_VALUE),
        }
    }

    /// Write the color keys back into block attributes.
    ///
    /// Present values are set and absent ones removed; other keys are left
    /// untouched.
    pub fn write_to(&self, attrs: &mut Attributes) {
        let fields = [
            (BACKGROUND_COLOR, &self.background_color),
            (TEXT_COLOR, &self.text_color),
            (BACKGROUND_COLOR_CSS_CLASS, &self.background_color_css_class),
            (TEXT_COLOR_CSS_CLASS, &self.text_color_css_class),
            (CUSTOM_BACKGROUND_COLOR, &self.custom_background_color),
            (BACKGROUND_COLOR_VALUE, &self.background_color_value),
            (CUSTOM_TEXT_COLOR, &self.custom_text_color),
            (TEXT_COLOR_VALUE, &self.text_color_value),
        ];

        for (key, value) in fields {
            match value {
                Some(v) => {
                    attrs.insert(key.to_string(), Value::String(v.clone()));
                }
                None => {
                    attrs.remove(key);
                }
            }
        }
    }

    /// Class list threaded to every menu item.
    ///
    /// Order: `has-background-color`, `has-text-color`, then the background
    /// and text class overrides. Blank overrides are skipped.
    pub fn css_classes(&self) -> String {
        let mut classes: Vec<&str> = Vec::new();

        if self.background_color.is_some() {
            classes.push(HAS_BACKGROUND_COLOR);
        }
        if self.text_color.is_some() {
            classes.push(HAS_TEXT_COLOR);
        }
        for class in [&self.background_color_css_class, &self.text_color_css_class]
            .into_iter()
            .flatten()
        {
            let class = class.trim();
            if !class.is_empty() {
                classes.push(class);
            }
        }

        classes.join(" ")
    }

    /// Inline style declarations threaded to every menu item.
    ///
    /// Background prefers `customBackgroundColor` over
    /// `backgroundColorValue`; text prefers `textColorValue` over
    /// `customTextColor`. Blank values count as unset. A chosen value that
    /// is not a safe CSS value drops its declaration.
    pub fn inline_styles(&self) -> String {
        let background = self
            .resolved_background()
            .and_then(safe_css_value)
            .map(|v| format!("background-color: {v};"));

        let text = self
            .resolved_text()
            .and_then(safe_css_value)
            .map(|v| format!("color: {v};"));

        [background, text]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Resolved background color, if any.
    pub fn resolved_background(&self) -> Option<&str> {
        non_blank(&self.custom_background_color).or(non_blank(&self.background_color_value))
    }

    /// Resolved text color, if any.
    pub fn resolved_text(&self) -> Option<&str> {
        non_blank(&self.text_color_value).or(non_blank(&self.custom_text_color))
    }

    /// Apply a color selector change.
    ///
    /// A value from the theme palette stores its slug, class and value and
    /// clears the custom key. Any other value is stored as custom, clearing
    /// slug and class. `None` clears the channel entirely.
    pub fn apply_color_change(&mut self, change: &ColorChange, palette: &ThemePalette) {
        let (slug, class, custom, resolved, context) = match change.color_type {
            ColorType::BackgroundColor => (
                &mut self.background_color,
                &mut self.background_color_css_class,
                &mut self.custom_background_color,
                &mut self.background_color_value,
                "background-color",
            ),
            ColorType::TextColor => (
                &mut self.text_color,
                &mut self.text_color_css_class,
                &mut self.custom_text_color,
                &mut self.text_color_value,
                "color",
            ),
        };

        let value = change.value.as_deref().map(str::trim).filter(|v| !v.is_empty());
        let Some(value) = value else {
            *slug = None;
            *class = None;
            *custom = None;
            *resolved = None;
            return;
        };

        match palette.find_by_color(value) {
            Some(entry) => {
                *slug = Some(entry.slug.clone());
                *class = Some(color_class_name(context, &entry.slug));
                *custom = None;
                *resolved = Some(entry.color.clone());
            }
            None => {
                *slug = None;
                *class = None;
                *custom = Some(value.to_string());
                *resolved = Some(value.to_string());
            }
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
