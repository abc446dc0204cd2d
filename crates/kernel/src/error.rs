//! Block library error types with clear, actionable messages.
//!
//! Every variant names the descriptor path or block so a failed
//! initialization points straight at the file to fix.

use std::path::Path;

use thiserror::Error;

/// Errors raised while loading descriptors and registering block types.
#[derive(Debug, Error)]
pub enum BlockError {
    /// The block.json descriptor does not exist.
    #[error("block.json file not found at {path}")]
    DescriptorNotFound { path: String },

    /// The descriptor exists but could not be read.
    #[error("failed to read block.json at {path}: {source}")]
    DescriptorRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The descriptor is not valid JSON.
    #[error("unable to parse block.json at {path}: {source}")]
    DescriptorParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The descriptor has no string `name` field.
    #[error("block.json at {path} does not declare a block name (expected a string \"name\" field)")]
    MissingName { path: String },

    /// Block names must be namespaced, e.g. `core/navigation-menu`.
    #[error(
        "invalid block name '{name}': names must be lowercase and namespaced, e.g. 'core/navigation-menu'"
    )]
    InvalidName { name: String },

    /// A block type with this name is already registered.
    #[error("block type '{name}' is already registered")]
    AlreadyRegistered { name: String },
}

impl BlockError {
    /// Create a descriptor-not-found error.
    pub fn descriptor_not_found(path: &Path) -> Self {
        Self::DescriptorNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create a descriptor read error.
    pub fn descriptor_read(path: &Path, source: std::io::Error) -> Self {
        Self::DescriptorRead {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create a descriptor parse error.
    pub fn descriptor_parse(path: &Path, source: serde_json::Error) -> Self {
        Self::DescriptorParse {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create a missing-name error.
    pub fn missing_name(path: &Path) -> Self {
        Self::MissingName {
            path: path.display().to_string(),
        }
    }
}
