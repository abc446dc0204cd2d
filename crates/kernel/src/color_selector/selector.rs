//! Headless model of the toolbar colors selector.
//!
//! The host editor owns rendering; this type owns the control's contract:
//! its class names and labels, the open/closed state of its dropdown,
//! keyboard handling on the toggle, and `on_color_change` dispatch.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::contrast::{ContrastChecker, ContrastWarning};

/// Class on the dropdown container.
pub const CONTAINER_CLASS: &str = "block-library-colors-selector";

/// Class on the dropdown popover.
pub const POPOVER_CLASS: &str = "block-library-colors-selector__popover";

/// Accessible label of the toggle button.
pub const TOGGLE_LABEL: &str = "Open Colors Selector";

/// Text shown in the toggle icon, styled with the current colors.
pub const ICON_TEXT: &str = "Aa";

/// The color channel a picker edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorType {
    BackgroundColor,
    TextColor,
}

impl ColorType {
    /// Attribute-style name: `backgroundColor` or `textColor`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BackgroundColor => "backgroundColor",
            Self::TextColor => "textColor",
        }
    }

    /// Picker label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BackgroundColor => "Background Color",
            Self::TextColor => "Text Color",
        }
    }
}

impl fmt::Display for ColorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload passed to `on_color_change`. `value: None` clears the color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorChange {
    pub color_type: ColorType,
    pub value: Option<String>,
}

/// Keys the toggle reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Down,
    Escape,
    Other,
}

/// Description of one palette picker in the popover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerControl {
    pub color_type: ColorType,
    pub label: &'static str,
    pub value: Option<String>,
}

/// The toggle's icon: [`ICON_TEXT`] painted with the selector's style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleIcon<'a> {
    pub text: &'static str,
    pub style: Option<&'a str>,
}

type ColorChangeHandler = Box<dyn FnMut(ColorChange) + Send>;

/// The colors selector control.
pub struct ColorSelector {
    background_color: Option<String>,
    text_color: Option<String>,
    style: Option<String>,
    class_name: Option<String>,
    on_color_change: Option<ColorChangeHandler>,
    is_open: bool,
}

impl ColorSelector {
    /// A closed selector showing the given colors.
    pub fn new(background_color: Option<&str>, text_color: Option<&str>) -> Self {
        Self {
            background_color: background_color.map(str::to_string),
            text_color: text_color.map(str::to_string),
            style: None,
            class_name: None,
            on_color_change: None,
            is_open: false,
        }
    }

    /// Inline style applied to the toggle icon.
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Extra class for the container.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Callback invoked whenever a picker selection changes.
    pub fn on_color_change(mut self, handler: impl FnMut(ColorChange) + Send + 'static) -> Self {
        self.on_color_change = Some(Box::new(handler));
        self
    }

    /// Container class list.
    pub fn container_class(&self) -> String {
        match self.class_name.as_deref().map(str::trim) {
            Some(extra) if !extra.is_empty() => format!("{CONTAINER_CLASS} {extra}"),
            _ => CONTAINER_CLASS.to_string(),
        }
    }

    /// Popover class.
    pub fn popover_class(&self) -> &'static str {
        POPOVER_CLASS
    }

    /// Accessible label of the toggle button.
    pub fn toggle_label(&self) -> &'static str {
        TOGGLE_LABEL
    }

    /// Inline style of the toggle icon.
    pub fn icon_style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Icon shown inside the toggle.
    pub fn icon(&self) -> ToggleIcon<'_> {
        ToggleIcon {
            text: ICON_TEXT,
            style: self.icon_style(),
        }
    }

    /// Whether the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Open or close the dropdown.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Close the dropdown.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Handle a key press on the toggle.
    ///
    /// Returns `true` when the event was consumed and should not propagate.
    pub fn handle_key_down(&mut self, key: Key) -> bool {
        match key {
            Key::Down if !self.is_open => {
                self.is_open = true;
                true
            }
            Key::Escape if self.is_open => {
                self.is_open = false;
                true
            }
            _ => false,
        }
    }

    /// The popover content: background picker, then text picker.
    pub fn pickers(&self) -> [PickerControl; 2] {
        [
            PickerControl {
                color_type: ColorType::BackgroundColor,
                label: ColorType::BackgroundColor.label(),
                value: self.background_color.clone(),
            },
            PickerControl {
                color_type: ColorType::TextColor,
                label: ColorType::TextColor.label(),
                value: self.text_color.clone(),
            },
        ]
    }

    /// Report a picker selection to the host.
    pub fn select_color(&mut self, color_type: ColorType, value: Option<&str>) {
        if let Some(handler) = self.on_color_change.as_mut() {
            handler(ColorChange {
                color_type,
                value: value.map(str::to_string),
            });
        }
    }

    /// Contrast warning for the current colors, judged as normal-size text.
    pub fn contrast_warning(&self) -> Option<ContrastWarning> {
        ContrastChecker::new(self.background_color.as_deref(), self.text_color.as_deref())
            .large_text(false)
            .check()
    }
}

impl fmt::Debug for ColorSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorSelector")
            .field("background_color", &self.background_color)
            .field("text_color", &self.text_color)
            .field("style", &self.style)
            .field("class_name", &self.class_name)
            .field("is_open", &self.is_open)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn down_arrow_opens_closed_dropdown() {
        let mut selector = ColorSelector::new(None, None);
        assert!(selector.handle_key_down(Key::Down));
        assert!(selector.is_open());
        // Already open: the key is left to the popover.
        assert!(!selector.handle_key_down(Key::Down));
        assert!(selector.is_open());
    }

    #[test]
    fn escape_closes_and_other_keys_ignored() {
        let mut selector = ColorSelector::new(None, None);
        assert!(!selector.handle_key_down(Key::Other));
        assert!(!selector.handle_key_down(Key::Escape));
        selector.toggle();
        assert!(selector.handle_key_down(Key::Escape));
        assert!(!selector.is_open());
    }

    #[test]
    fn toggle_and_close() {
        let mut selector = ColorSelector::new(None, None);
        selector.toggle();
        assert!(selector.is_open());
        selector.close();
        assert!(!selector.is_open());
    }

    #[test]
    fn select_color_dispatches_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut selector =
            ColorSelector::new(None, None).on_color_change(move |change| sink.lock().unwrap().push(change));

        selector.select_color(ColorType::BackgroundColor, Some("#fff"));
        selector.select_color(ColorType::TextColor, None);

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                ColorChange {
                    color_type: ColorType::BackgroundColor,
                    value: Some("#fff".to_string()),
                },
                ColorChange {
                    color_type: ColorType::TextColor,
                    value: None,
                },
            ]
        );
    }

    #[test]
    fn select_color_without_handler_is_noop() {
        let mut selector = ColorSelector::new(None, None);
        selector.select_color(ColorType::TextColor, Some("#000"));
    }

    #[test]
    fn color_change_json_shape() {
        let change = ColorChange {
            color_type: ColorType::BackgroundColor,
            value: Some("#111".to_string()),
        };
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json, serde_json::json!({ "colorType": "backgroundColor", "value": "#111" }));
    }

    #[test]
    fn container_class_appends_extra() {
        assert_eq!(ColorSelector::new(None, None).container_class(), CONTAINER_CLASS);
        assert_eq!(
            ColorSelector::new(None, None).class_name("is-active").container_class(),
            "block-library-colors-selector is-active"
        );
    }

    #[test]
    fn toggle_describes_itself() {
        let selector = ColorSelector::new(None, None).style("color: #fff;");
        assert_eq!(selector.toggle_label(), "Open Colors Selector");
        assert_eq!(selector.popover_class(), "block-library-colors-selector__popover");
        assert_eq!(
            selector.icon(),
            ToggleIcon {
                text: "Aa",
                style: Some("color: #fff;"),
            }
        );
        assert_eq!(ColorSelector::new(None, None).icon().style, None);
    }

    #[test]
    fn pickers_describe_current_colors() {
        let selector = ColorSelector::new(Some("#000"), Some("#fff"));
        let [background, text] = selector.pickers();
        assert_eq!(background.label, "Background Color");
        assert_eq!(background.value.as_deref(), Some("#000"));
        assert_eq!(text.label, "Text Color");
        assert_eq!(text.value.as_deref(), Some("#fff"));
    }

    #[test]
    fn contrast_warning_for_poor_pair() {
        assert!(ColorSelector::new(Some("#000"), Some("#fff")).contrast_warning().is_none());
        assert!(ColorSelector::new(Some("#fff"), Some("#ddd")).contrast_warning().is_some());
    }
}
