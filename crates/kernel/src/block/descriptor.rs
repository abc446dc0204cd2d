//! `block.json` descriptor loading.

use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::BlockError;

/// File name of a block descriptor inside its block directory.
pub const DESCRIPTOR_FILE: &str = "block.json";

/// A loaded block descriptor: the block name plus the remaining metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockDescriptor {
    /// Namespaced block name, e.g. `core/navigation-menu`.
    pub name: String,
    /// Everything else in the descriptor (category, attributes, supports).
    pub metadata: Map<String, Value>,
}

impl BlockDescriptor {
    /// Load and parse a descriptor file.
    ///
    /// Missing or unparsable descriptors are errors; callers treat them as
    /// fatal to initialization.
    pub fn load(path: &Path) -> Result<Self, BlockError> {
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => BlockError::descriptor_not_found(path),
            _ => BlockError::descriptor_read(path, e),
        })?;

        let descriptor = Self::parse(&contents, path)?;
        debug!(block = %descriptor.name, path = %path.display(), "loaded block descriptor");
        Ok(descriptor)
    }

    /// Parse descriptor JSON; `path` is only used for error messages.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, BlockError> {
        let value: Value =
            serde_json::from_str(contents).map_err(|e| BlockError::descriptor_parse(path, e))?;

        let Value::Object(mut metadata) = value else {
            return Err(BlockError::missing_name(path));
        };

        let name = match metadata.remove("name") {
            Some(Value::String(name)) => name,
            _ => return Err(BlockError::missing_name(path)),
        };

        Ok(Self { name, metadata })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn path() -> &'static Path {
        Path::new("blocks/demo/block.json")
    }

    #[test]
    fn parse_extracts_name() {
        let descriptor = BlockDescriptor::parse(
            r#"{"name": "core/demo", "category": "layout"}"#,
            path(),
        )
        .unwrap();
        assert_eq!(descriptor.name, "core/demo");
        assert!(!descriptor.metadata.contains_key("name"));
        assert_eq!(descriptor.metadata["category"], "layout");
    }

    #[test]
    fn parse_rejects_invalid_json() {
        let err = BlockDescriptor::parse("{ not json", path()).unwrap_err();
        assert!(matches!(err, BlockError::DescriptorParse { .. }));
        assert!(err.to_string().contains("unable to parse"));
    }

    #[test]
    fn parse_requires_string_name() {
        let err = BlockDescriptor::parse(r#"{"name": 7}"#, path()).unwrap_err();
        assert!(matches!(err, BlockError::MissingName { .. }));

        let err = BlockDescriptor::parse("[]", path()).unwrap_err();
        assert!(matches!(err, BlockError::MissingName { .. }));
    }

    #[test]
    fn load_missing_file() {
        let err = BlockDescriptor::load(Path::new("/nonexistent/navblock/block.json")).unwrap_err();
        assert!(matches!(err, BlockError::DescriptorNotFound { .. }));
    }
}
