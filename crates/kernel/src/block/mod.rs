//! Block library plumbing.
//!
//! This module provides:
//! - ParsedBlock: the block parser's record shape
//! - BlockDescriptor: `block.json` loading
//! - BlockRegistry: block name to render callback mapping
//! - register_core_blocks: the explicit initialization call

mod descriptor;
mod parsed;
mod registry;

use tracing::info;

pub use descriptor::{BlockDescriptor, DESCRIPTOR_FILE};
pub use parsed::{Attributes, ParsedBlock};
pub use registry::{BlockRegistry, BlockType, RenderCallback};

use crate::config::Config;
use crate::error::BlockError;
use crate::navigation_menu;

/// Register every block this library ships.
///
/// Any failure aborts initialization; nothing is registered implicitly.
pub fn register_core_blocks(registry: &mut BlockRegistry, config: &Config) -> Result<(), BlockError> {
    navigation_menu::register(registry, config)?;

    info!(
        blocks = registry.len(),
        dir = %config.block_library_dir.display(),
        "core blocks registered"
    );
    Ok(())
}
