//! CSS color parsing and WCAG luminance math.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// `rgb(r, g, b)` and `rgba(r, g, b, a)` with integer channels.
///
/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+)(%?)\s*)?\)$",
    )
    .expect("valid regex literal")
});

/// Named colors understood by the parser.
const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("silver", (192, 192, 192)),
    ("maroon", (128, 0, 0)),
    ("navy", (0, 0, 128)),
    ("teal", (0, 128, 128)),
    ("olive", (128, 128, 0)),
    ("lime", (0, 255, 0)),
    ("aqua", (0, 255, 255)),
    ("cyan", (0, 255, 255)),
    ("fuchsia", (255, 0, 255)),
    ("magenta", (255, 0, 255)),
];

/// Errors from parsing a CSS color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color value")]
    Empty,

    #[error("unrecognized color '{0}': expected #hex, rgb()/rgba() or a named color")]
    Unrecognized(String),

    #[error("color channel out of range in '{0}'")]
    OutOfRange(String),
}

/// An sRGB color with alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Color {
    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Whether the color is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    /// WCAG 2.0 relative luminance.
    pub fn relative_luminance(&self) -> f64 {
        fn linear(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// Perceived brightness on a 0-255 scale.
    pub fn brightness(&self) -> f64 {
        (f64::from(self.r) * 299.0 + f64::from(self.g) * 587.0 + f64::from(self.b) * 114.0)
            / 1000.0
    }

    /// WCAG contrast ratio against another color, in `1.0..=21.0`.
    pub fn contrast_ratio(&self, other: &Color) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Lowercase `#rrggbb` form, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn parse_hex(original: &str, digits: &str) -> Result<Self, ColorParseError> {
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::Unrecognized(original.to_string()));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::Unrecognized(original.to_string()))
        };
        let doubled = |i: usize| {
            let nibble = &digits[i..=i];
            channel(&format!("{nibble}{nibble}"))
        };

        match digits.len() {
            3 | 4 => {
                let alpha = if digits.len() == 4 {
                    f64::from(doubled(3)?) / 255.0
                } else {
                    1.0
                };
                Ok(Self {
                    r: doubled(0)?,
                    g: doubled(1)?,
                    b: doubled(2)?,
                    alpha,
                })
            }
            6 | 8 => {
                let alpha = if digits.len() == 8 {
                    f64::from(channel(&digits[6..8])?) / 255.0
                } else {
                    1.0
                };
                Ok(Self {
                    r: channel(&digits[0..2])?,
                    g: channel(&digits[2..4])?,
                    b: channel(&digits[4..6])?,
                    alpha,
                })
            }
            _ => Err(ColorParseError::Unrecognized(original.to_string())),
        }
    }

    fn parse_rgb_function(original: &str, caps: &regex::Captures<'_>) -> Result<Self, ColorParseError> {
        let out_of_range = || ColorParseError::OutOfRange(original.to_string());
        let channel = |i: usize| -> Result<u8, ColorParseError> {
            caps[i].parse::<u8>().map_err(|_| out_of_range())
        };

        let alpha = match caps.get(4) {
            Some(m) => {
                let raw: f64 = m.as_str().parse().map_err(|_| out_of_range())?;
                let alpha = if caps.get(5).is_some_and(|p| p.as_str() == "%") {
                    raw / 100.0
                } else {
                    raw
                };
                if !(0.0..=1.0).contains(&alpha) {
                    return Err(out_of_range());
                }
                alpha
            }
            None => 1.0,
        };

        Ok(Self {
            r: channel(1)?,
            g: channel(2)?,
            b: channel(3)?,
            alpha,
        })
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(digits) = trimmed.strip_prefix('#') {
            return Self::parse_hex(trimmed, digits);
        }

        if let Some(caps) = RGB_FUNCTION.captures(trimmed) {
            return Self::parse_rgb_function(trimmed, &caps);
        }

        let lowered = trimmed.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|(_, (r, g, b))| Self::rgb(*r, *g, *b))
            .ok_or_else(|| ColorParseError::Unrecognized(trimmed.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Color {
        s.parse().unwrap()
    }

    #[test]
    fn parses_hex_forms() {
        assert_eq!(parse("#fff"), Color::rgb(255, 255, 255));
        assert_eq!(parse("#1E90FF"), Color::rgb(30, 144, 255));
        assert_eq!(parse("#00000000").alpha, 0.0);
        assert!(!parse("#0008").is_opaque());
        assert!(parse("#000f").is_opaque());
    }

    #[test]
    fn parses_rgb_functions() {
        assert_eq!(parse("rgb(10, 20, 30)"), Color::rgb(10, 20, 30));
        assert_eq!(parse("RGBA(10,20,30,0.5)").alpha, 0.5);
        assert_eq!(parse("rgba(10, 20, 30, 50%)").alpha, 0.5);
    }

    #[test]
    fn parses_named_colors() {
        assert_eq!(parse("White"), Color::rgb(255, 255, 255));
        assert_eq!(parse(" navy "), Color::rgb(0, 0, 128));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!("".parse::<Color>(), Err(ColorParseError::Empty));
        assert!(matches!(
            "#12".parse::<Color>(),
            Err(ColorParseError::Unrecognized(_))
        ));
        assert!(matches!(
            "#ggg".parse::<Color>(),
            Err(ColorParseError::Unrecognized(_))
        ));
        assert!(matches!(
            "rgb(300, 0, 0)".parse::<Color>(),
            Err(ColorParseError::OutOfRange(_))
        ));
        assert!(matches!(
            "var(--accent)".parse::<Color>(),
            Err(ColorParseError::Unrecognized(_))
        ));
    }

    #[test]
    fn black_on_white_is_21() {
        let ratio = Color::rgb(0, 0, 0).contrast_ratio(&Color::rgb(255, 255, 255));
        assert!((ratio - 21.0).abs() < 1e-9, "{ratio}");
    }

    #[test]
    fn contrast_is_symmetric_and_at_least_one() {
        let a = parse("#777");
        let b = parse("#eee");
        assert!((a.contrast_ratio(&b) - b.contrast_ratio(&a)).abs() < 1e-12);
        assert!((a.contrast_ratio(&a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn brightness_scale() {
        assert_eq!(Color::rgb(255, 255, 255).brightness(), 255.0);
        assert_eq!(Color::rgb(0, 0, 0).brightness(), 0.0);
    }

    #[test]
    fn to_hex_lowercase() {
        assert_eq!(parse("#ABCDEF").to_hex(), "#abcdef");
        assert_eq!(parse("rgb(255, 0, 0)").to_string(), "#ff0000");
    }
}
