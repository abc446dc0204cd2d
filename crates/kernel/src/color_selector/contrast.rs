//! Contrast checker for text/background color pairs.
//!
//! Warns when a combination falls below the WCAG AA threshold: 4.5:1 for
//! normal text, 3:1 for large text. Pairs involving transparency or colors
//! that cannot be parsed are not judged.

use std::fmt;

use super::color::Color;

/// Minimum contrast ratio for normal-size text (WCAG AA).
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// Minimum contrast ratio for large text (WCAG AA).
pub const AA_LARGE_TEXT: f64 = 3.0;

/// Which way the user should move the colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastSuggestion {
    /// The background is darker than the text.
    DarkerBackgroundBrighterText,
    /// The background is at least as bright as the text.
    BrighterBackgroundDarkerText,
}

/// A failed contrast check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastWarning {
    /// Measured contrast ratio.
    pub ratio: f64,
    /// Threshold the pair failed.
    pub required: f64,
    pub suggestion: ContrastSuggestion,
}

impl fmt::Display for ContrastWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hint = match self.suggestion {
            ContrastSuggestion::DarkerBackgroundBrighterText => {
                "Try using a darker background color and/or a brighter text color."
            }
            ContrastSuggestion::BrighterBackgroundDarkerText => {
                "Try using a brighter background color and/or a darker text color."
            }
        };
        write!(f, "This color combination may be hard for people to read. {hint}")
    }
}

/// Checks a background/text pair, with optional fallbacks for either side.
#[derive(Debug, Clone, Default)]
pub struct ContrastChecker {
    background_color: Option<String>,
    text_color: Option<String>,
    fallback_background_color: Option<String>,
    fallback_text_color: Option<String>,
    is_large_text: bool,
}

impl ContrastChecker {
    /// Checker for the given pair.
    pub fn new(background_color: Option<&str>, text_color: Option<&str>) -> Self {
        Self {
            background_color: background_color.map(str::to_string),
            text_color: text_color.map(str::to_string),
            ..Self::default()
        }
    }

    /// Background used when no background color is set.
    pub fn fallback_background_color(mut self, color: &str) -> Self {
        self.fallback_background_color = Some(color.to_string());
        self
    }

    /// Text color used when no text color is set.
    pub fn fallback_text_color(mut self, color: &str) -> Self {
        self.fallback_text_color = Some(color.to_string());
        self
    }

    /// Judge against the large-text threshold.
    pub fn large_text(mut self, is_large_text: bool) -> Self {
        self.is_large_text = is_large_text;
        self
    }

    /// Required ratio for the configured text size.
    pub fn required_ratio(&self) -> f64 {
        if self.is_large_text {
            AA_LARGE_TEXT
        } else {
            AA_NORMAL_TEXT
        }
    }

    /// Run the check. `None` means no warning should be shown.
    pub fn check(&self) -> Option<ContrastWarning> {
        let background = non_empty(&self.background_color)
            .or_else(|| non_empty(&self.fallback_background_color))?;
        let text = non_empty(&self.text_color).or_else(|| non_empty(&self.fallback_text_color))?;

        let background: Color = background.parse().ok()?;
        let text: Color = text.parse().ok()?;

        if !background.is_opaque() || !text.is_opaque() {
            return None;
        }

        let ratio = background.contrast_ratio(&text);
        let required = self.required_ratio();
        if ratio >= required {
            return None;
        }

        let suggestion = if background.brightness() < text.brightness() {
            ContrastSuggestion::DarkerBackgroundBrighterText
        } else {
            ContrastSuggestion::BrighterBackgroundDarkerText
        };

        Some(ContrastWarning {
            ratio,
            required,
            suggestion,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
