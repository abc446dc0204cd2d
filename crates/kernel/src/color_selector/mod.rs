//! Colors selector toolbar control.
//!
//! Provides:
//! - Color: CSS color parsing and WCAG luminance math
//! - ContrastChecker: readability warnings for color pairs
//! - ThemePalette: theme colors and their CSS class names
//! - ColorSelector: the control's props, dropdown state and change dispatch

mod color;
mod contrast;
mod palette;
mod selector;

pub use color::{Color, ColorParseError};
pub use contrast::{
    AA_LARGE_TEXT, AA_NORMAL_TEXT, ContrastChecker, ContrastSuggestion, ContrastWarning,
};
pub use palette::{PaletteColor, ThemePalette, color_class_name, kebab_case};
pub use selector::{
    CONTAINER_CLASS, ColorChange, ColorSelector, ColorType, ICON_TEXT, Key, POPOVER_CLASS,
    PickerControl, TOGGLE_LABEL, ToggleIcon,
};
