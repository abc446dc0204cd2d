//! Server-side rendering of the navigation menu block.
//!
//! Walks the menu tree depth-first and emits nested `<ul>/<li>` markup:
//!
//! ```text
//! <nav class="wp-block-navigation-menu">
//!   <ul>
//!     <li>
//!       <div class="wp-block-navigation-menu-item {classes}" style="{styles}">
//!         <a class="wp-block-navigation-menu-link" href=".." title="..">label</a>
//!       </div>
//!       <ul>..</ul>
//!     </li>
//!   </ul>
//! </nav>
//! ```
//!
//! (emitted without whitespace). Classes and styles are computed once from
//! the block's color attributes and passed unchanged to every level.

use tracing::warn;

use super::colors::ColorAttributes;
use super::node::MenuNode;
use crate::html::{html_escape, safe_href, sanitize_label};

/// Class on the outer `<nav>`.
pub const NAV_CLASS: &str = "wp-block-navigation-menu";

/// Class on each item's wrapper `<div>`.
pub const ITEM_CLASS: &str = "wp-block-navigation-menu-item";

/// Class on each item's link.
pub const LINK_CLASS: &str = "wp-block-navigation-menu-link";

/// Default cap on nested `<ul>` levels.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Navigation menu renderer.
#[derive(Debug, Clone, Copy)]
pub struct MenuRenderer {
    max_depth: usize,
}

impl Default for MenuRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl MenuRenderer {
    /// Renderer emitting at most `max_depth` nested lists (minimum 1).
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
        }
    }

    /// Maximum nested `<ul>` levels.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Render the complete block: classes and styles from `colors`, the
    /// menu list, and the `<nav>` wrapper.
    pub fn render_block(&self, colors: &ColorAttributes, menu: &MenuNode) -> String {
        let css_classes = colors.css_classes();
        let inline_styles = colors.inline_styles();
        format!(
            "<nav class=\"{NAV_CLASS}\">{}</nav>",
            self.render_tree(menu, &css_classes, &inline_styles)
        )
    }

    /// Render the children of `tree` as a `<ul>`, recursing into nested
    /// items. A tree without children yields `<ul></ul>`.
    pub fn render_tree(&self, tree: &MenuNode, css_classes: &str, inline_styles: &str) -> String {
        let item_attrs = ItemAttributes::new(css_classes, inline_styles);
        let mut html = String::new();
        self.write_list(&mut html, tree, &item_attrs, 1);
        html
    }

    fn write_list(&self, html: &mut String, node: &MenuNode, item_attrs: &ItemAttributes, depth: usize) {
        html.push_str("<ul>");
        for item in &node.children {
            html.push_str("<li>");
            write_item(html, item, item_attrs);

            if item.has_children() {
                if depth < self.max_depth {
                    self.write_list(html, item, item_attrs, depth + 1);
                } else {
                    warn!(
                        max_depth = self.max_depth,
                        dropped = item.children.len(),
                        "navigation menu nesting exceeds maximum depth, truncating"
                    );
                }
            }

            html.push_str("</li>");
        }
        html.push_str("</ul>");
    }
}

/// The escaped `class` and `style` attribute text shared by every item.
struct ItemAttributes {
    class: String,
    style: Option<String>,
}

impl ItemAttributes {
    fn new(css_classes: &str, inline_styles: &str) -> Self {
        let css_classes = css_classes.trim();
        let class = if css_classes.is_empty() {
            ITEM_CLASS.to_string()
        } else {
            format!("{ITEM_CLASS} {}", html_escape(css_classes))
        };

        let inline_styles = inline_styles.trim();
        let style = (!inline_styles.is_empty()).then(|| html_escape(inline_styles));

        Self { class, style }
    }
}

/// Write one item's `<div><a>..</a></div>`.
fn write_item(html: &mut String, item: &MenuNode, item_attrs: &ItemAttributes) {
    html.push_str("<div class=\"");
    html.push_str(&item_attrs.class);
    html.push('"');
    if let Some(style) = &item_attrs.style {
        html.push_str(" style=\"");
        html.push_str(style);
        html.push('"');
    }
    html.push('>');

    html.push_str("<a class=\"");
    html.push_str(LINK_CLASS);
    html.push('"');
    if let Some(href) = item.attrs.destination.as_deref().and_then(safe_href) {
        html.push_str(" href=\"");
        html.push_str(&html_escape(href));
        html.push('"');
    }
    if let Some(title) = &item.attrs.title {
        html.push_str(" title=\"");
        html.push_str(&html_escape(title));
        html.push('"');
    }
    html.push('>');
    if let Some(label) = &item.attrs.label {
        html.push_str(&sanitize_label(label));
    }
    html.push_str("</a></div>");
}
