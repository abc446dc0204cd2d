//! Block registry - maps block names to their metadata and render callbacks.
//!
//! The registry is populated by an explicit initialization call (see
//! [`register_core_blocks`](super::register_core_blocks)) and is read-only
//! afterwards.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use super::descriptor::BlockDescriptor;
use super::parsed::{Attributes, ParsedBlock};
use crate::error::BlockError;

/// Namespaced, lowercase block names: `namespace/block-name`.
///
/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static VALID_BLOCK_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+/[a-z0-9-]+$").expect("valid regex literal"));

/// Server-side render callback: `(attributes, inner content, block) -> HTML`.
pub type RenderCallback = Arc<dyn Fn(&Attributes, &str, &ParsedBlock) -> String + Send + Sync>;

/// A registered block type.
#[derive(Clone)]
pub struct BlockType {
    /// Namespaced block name.
    pub name: String,
    /// Descriptor metadata, minus the name.
    pub metadata: Map<String, Value>,
    /// Server-side renderer; `None` for blocks saved as static markup.
    pub render_callback: Option<RenderCallback>,
}

impl BlockType {
    /// Build a block type from a loaded descriptor.
    pub fn from_descriptor(descriptor: BlockDescriptor) -> Self {
        Self {
            name: descriptor.name,
            metadata: descriptor.metadata,
            render_callback: None,
        }
    }

    /// Attach a render callback.
    pub fn with_render_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Attributes, &str, &ParsedBlock) -> String + Send + Sync + 'static,
    {
        self.render_callback = Some(Arc::new(callback));
        self
    }

    /// Whether this block renders on the server.
    pub fn is_dynamic(&self) -> bool {
        self.render_callback.is_some()
    }

    /// Attribute schema declared under `attributes`, if any.
    pub fn attribute_schema(&self) -> Option<&Map<String, Value>> {
        self.metadata.get("attributes").and_then(Value::as_object)
    }

    /// Normalize raw block attributes against the declared schema.
    ///
    /// Values whose JSON type disagrees with `attributes.<key>.type` are
    /// dropped, then declared defaults fill any missing keys. Attributes
    /// without a schema entry pass through unchanged.
    pub fn prepare_attributes(&self, raw: &Attributes) -> Attributes {
        let mut prepared = raw.clone();

        let Some(schema) = self.attribute_schema() else {
            return prepared;
        };

        for (key, definition) in schema {
            if let Some(value) = prepared.get(key)
                && let Some(expected) = definition.get("type").and_then(Value::as_str)
                && !value_matches_type(value, expected)
            {
                debug!(block = %self.name, attribute = %key, expected, "dropping mistyped attribute");
                prepared.remove(key);
            }

            if !prepared.contains_key(key)
                && let Some(default) = definition.get("default")
            {
                prepared.insert(key.clone(), default.clone());
            }
        }

        prepared
    }
}

impl fmt::Debug for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockType")
            .field("name", &self.name)
            .field("metadata", &self.metadata)
            .field("dynamic", &self.is_dynamic())
            .finish()
    }
}

/// Check a JSON value against a block attribute `type` keyword.
fn value_matches_type(value: &Value, expected: &str) -> bool {
    match expected {
        "string" => value.is_string(),
        "boolean" => value.is_boolean(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        "null" => value.is_null(),
        // Unknown type keywords are not enforced.
        _ => true,
    }
}

/// Registry of block types, keyed by name.
#[derive(Debug, Default)]
pub struct BlockRegistry {
    types: HashMap<String, BlockType>,
}

impl BlockRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block type.
    ///
    /// Fails if the name is not namespaced or is already taken.
    pub fn register(&mut self, block_type: BlockType) -> Result<(), BlockError> {
        if !VALID_BLOCK_NAME.is_match(&block_type.name) {
            return Err(BlockError::InvalidName {
                name: block_type.name,
            });
        }
        if self.types.contains_key(&block_type.name) {
            return Err(BlockError::AlreadyRegistered {
                name: block_type.name,
            });
        }

        debug!(
            block = %block_type.name,
            dynamic = block_type.is_dynamic(),
            "registered block type"
        );
        self.types.insert(block_type.name.clone(), block_type);
        Ok(())
    }

    /// Remove a block type, returning it if it was registered.
    pub fn unregister(&mut self, name: &str) -> Option<BlockType> {
        self.types.remove(name)
    }

    /// Look up a block type by name.
    pub fn get(&self, name: &str) -> Option<&BlockType> {
        self.types.get(name)
    }

    /// Check whether a block type is registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered block types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Render a parsed block.
    ///
    /// Dynamic blocks go through their render callback with prepared
    /// attributes and the block's saved inner HTML. Unknown and static
    /// blocks render as their saved inner HTML.
    pub fn render(&self, block: &ParsedBlock) -> String {
        let Some(name) = block.block_name.as_deref() else {
            return block.inner_html.clone();
        };

        match self.types.get(name) {
            Some(block_type) => match &block_type.render_callback {
                Some(callback) => {
                    debug!(block = %name, "rendering dynamic block");
                    let attributes = block_type.prepare_attributes(&block.attrs);
                    callback(&attributes, &block.inner_html, block)
                }
                None => block.inner_html.clone(),
            },
            None => {
                debug!(block = %name, "no block type registered, using saved content");
                block.inner_html.clone()
            }
        }
    }

    /// Render a sequence of top-level blocks and concatenate the output.
    pub fn render_all(&self, blocks: &[ParsedBlock]) -> String {
        blocks.iter().map(|block| self.render(block)).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn block_type(name: &str) -> BlockType {
        BlockType {
            name: name.to_string(),
            metadata: Map::new(),
            render_callback: None,
        }
    }

    fn parsed(value: Value) -> ParsedBlock {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn attribute_schema_from_descriptor() {
        let descriptor = BlockDescriptor::parse(
            r#"{"name": "core/demo", "attributes": {"label": {"type": "string"}}}"#,
            std::path::Path::new("blocks/demo/block.json"),
        )
        .unwrap();
        let demo = BlockType::from_descriptor(descriptor);
        assert!(demo.attribute_schema().unwrap().contains_key("label"));
        assert!(block_type("core/bare").attribute_schema().is_none());
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = BlockRegistry::new();
        registry.register(block_type("core/demo")).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.is_registered("core/demo"));
        assert!(!registry.get("core/demo").unwrap().is_dynamic());
    }

    #[test]
    fn duplicate_registration_rejected() {
        let mut registry = BlockRegistry::new();
        registry.register(block_type("core/demo")).unwrap();
        let err = registry.register(block_type("core/demo")).unwrap_err();
        assert!(matches!(err, BlockError::AlreadyRegistered { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn invalid_names_rejected() {
        let mut registry = BlockRegistry::new();
        for name in ["demo", "Core/Demo", "core/demo/extra", "core/", "/demo"] {
            let err = registry.register(block_type(name)).unwrap_err();
            assert!(matches!(err, BlockError::InvalidName { .. }), "{name}");
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn unregister_removes() {
        let mut registry = BlockRegistry::new();
        registry.register(block_type("core/demo")).unwrap();
        assert!(registry.unregister("core/demo").is_some());
        assert!(registry.unregister("core/demo").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = BlockRegistry::new();
        registry.register(block_type("core/zeta")).unwrap();
        registry.register(block_type("core/alpha")).unwrap();
        assert_eq!(registry.names(), vec!["core/alpha", "core/zeta"]);
    }

    #[test]
    fn render_dispatches_to_callback() {
        let mut registry = BlockRegistry::new();
        registry
            .register(
                block_type("core/echo").with_render_callback(|attrs, content, block| {
                    format!(
                        "{}|{}|{}",
                        attrs.get("word").and_then(Value::as_str).unwrap_or(""),
                        content,
                        block.inner_blocks.len()
                    )
                }),
            )
            .unwrap();

        let html = registry.render(&parsed(json!({
            "blockName": "core/echo",
            "attrs": { "word": "hi" },
            "innerBlocks": [{}],
            "innerHTML": "saved"
        })));
        assert_eq!(html, "hi|saved|1");
    }

    #[test]
    fn render_unknown_and_static_blocks_return_saved_content() {
        let mut registry = BlockRegistry::new();
        registry.register(block_type("core/static")).unwrap();

        let unknown = parsed(json!({ "blockName": "core/missing", "innerHTML": "<p>a</p>" }));
        let static_block = parsed(json!({ "blockName": "core/static", "innerHTML": "<p>b</p>" }));
        let freeform = parsed(json!({ "innerHTML": "<p>c</p>" }));

        assert_eq!(registry.render(&unknown), "<p>a</p>");
        assert_eq!(registry.render(&static_block), "<p>b</p>");
        assert_eq!(registry.render(&freeform), "<p>c</p>");
        assert_eq!(
            registry.render_all(&[unknown, static_block, freeform]),
            "<p>a</p><p>b</p><p>c</p>"
        );
    }

    #[test]
    fn prepare_attributes_applies_defaults_and_types() {
        let mut bt = block_type("core/demo");
        bt.metadata.insert(
            "attributes".to_string(),
            json!({
                "automaticallyAdd": { "type": "boolean", "default": false },
                "textColor": { "type": "string" },
                "level": { "type": "integer", "default": 2 }
            }),
        );

        let raw = json!({ "textColor": 12, "level": 3, "extra": "kept" });
        let prepared = bt.prepare_attributes(raw.as_object().unwrap());

        assert_eq!(prepared["automaticallyAdd"], json!(false));
        assert!(!prepared.contains_key("textColor"));
        assert_eq!(prepared["level"], json!(3));
        assert_eq!(prepared["extra"], json!("kept"));
    }

    #[test]
    fn mistyped_attribute_falls_back_to_default() {
        let mut bt = block_type("core/demo");
        bt.metadata.insert(
            "attributes".to_string(),
            json!({ "automaticallyAdd": { "type": "boolean", "default": false } }),
        );
        let raw = json!({ "automaticallyAdd": "yes" });
        let prepared = bt.prepare_attributes(raw.as_object().unwrap());
        assert_eq!(prepared["automaticallyAdd"], json!(false));
    }
}
