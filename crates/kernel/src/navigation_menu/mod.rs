//! The `core/navigation-menu` block.
//!
//! This module provides:
//! - MenuNode: the typed menu tree read from parsed blocks
//! - ColorAttributes: color attributes and the classes/styles they produce
//! - MenuRenderer: nested `<ul>/<li>` rendering
//! - register: loads the block's descriptor and registers its renderer
//! - apply_color_change: writes a colors selector change into block attributes

mod colors;
mod node;
mod render;

use tracing::debug;

pub use colors::{ColorAttributes, HAS_BACKGROUND_COLOR, HAS_TEXT_COLOR};
pub use node::{MenuItemAttributes, MenuNode};
pub use render::{DEFAULT_MAX_DEPTH, ITEM_CLASS, LINK_CLASS, MenuRenderer, NAV_CLASS};

use crate::block::{Attributes, BlockDescriptor, BlockRegistry, BlockType, DESCRIPTOR_FILE, ParsedBlock};
use crate::color_selector::{ColorChange, ThemePalette};
use crate::config::Config;
use crate::error::BlockError;

/// Directory of this block inside the block library.
pub const BLOCK_DIR: &str = "navigation-menu";

/// Render callback for the block: `(attributes, content, block) -> HTML`.
///
/// The saved content is ignored; the menu is rebuilt from inner blocks.
pub fn render_block(
    renderer: &MenuRenderer,
    attributes: &Attributes,
    _content: &str,
    block: &ParsedBlock,
) -> String {
    let colors = ColorAttributes::from_attributes(attributes);
    let menu = MenuNode::from_block(block, renderer.max_depth());
    renderer.render_block(&colors, &menu)
}

/// Apply a colors selector change to a navigation menu block's attributes.
pub fn apply_color_change(block: &mut ParsedBlock, change: &ColorChange, palette: &ThemePalette) {
    let mut colors = ColorAttributes::from_attributes(&block.attrs);
    colors.apply_color_change(change, palette);
    colors.write_to(&mut block.attrs);
}

/// Load `navigation-menu/block.json` from the block library and register
/// the block with its render callback.
pub fn register(registry: &mut BlockRegistry, config: &Config) -> Result<(), BlockError> {
    let path = config.block_library_dir.join(BLOCK_DIR).join(DESCRIPTOR_FILE);
    let descriptor = BlockDescriptor::load(&path)?;
    let renderer = MenuRenderer::new(config.max_menu_depth);

    debug!(
        block = %descriptor.name,
        max_depth = renderer.max_depth(),
        "registering navigation menu"
    );

    let block_type = BlockType::from_descriptor(descriptor).with_render_callback(
        move |attributes, content, block| render_block(&renderer, attributes, content, block),
    );
    registry.register(block_type)
}
