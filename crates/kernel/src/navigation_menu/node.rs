//! Typed menu tree.

use tracing::warn;

use super::render::DEFAULT_MAX_DEPTH;
use crate::block::ParsedBlock;

/// Attributes a menu item renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItemAttributes {
    /// Link target.
    pub destination: Option<String>,
    /// Link `title` attribute.
    pub title: Option<String>,
    /// Link text.
    pub label: Option<String>,
}

/// A node in the menu tree.
///
/// The root stands for the whole menu; its descendants are menu items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuNode {
    pub attrs: MenuItemAttributes,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// An empty root.
    pub fn root() -> Self {
        Self::default()
    }

    /// A menu item with a label and destination.
    pub fn item(label: &str, destination: &str) -> Self {
        Self {
            attrs: MenuItemAttributes {
                destination: Some(destination.to_string()),
                title: None,
                label: Some(label.to_string()),
            },
            children: Vec::new(),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: &str) -> Self {
        self.attrs.title = Some(title.to_string());
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: MenuNode) -> Self {
        self.children.push(child);
        self
    }

    /// Whether the node has nested items.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Build a menu tree from a parsed block, keeping at most `max_depth`
    /// levels of items below `block`.
    ///
    /// Reads `destination`, `title` and `label` from each block's
    /// attributes; non-string values are treated as absent.
    pub fn from_block(block: &ParsedBlock, max_depth: usize) -> Self {
        let children = if max_depth == 0 {
            if !block.inner_blocks.is_empty() {
                warn!(
                    dropped = block.inner_blocks.len(),
                    "navigation menu nesting exceeds maximum depth, truncating"
                );
            }
            Vec::new()
        } else {
            block
                .inner_blocks
                .iter()
                .map(|inner| Self::from_block(inner, max_depth - 1))
                .collect()
        };

        Self {
            attrs: MenuItemAttributes {
                destination: block.attr_str("destination").map(str::to_string),
                title: block.attr_str("title").map(str::to_string),
                label: block.attr_str("label").map(str::to_string),
            },
            children,
        }
    }
}

impl From<&ParsedBlock> for MenuNode {
    /// Menu tree capped at [`DEFAULT_MAX_DEPTH`] levels.
    fn from(block: &ParsedBlock) -> Self {
        Self::from_block(block, DEFAULT_MAX_DEPTH)
    }
}
