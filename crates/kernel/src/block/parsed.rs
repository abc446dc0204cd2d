//! The parsed-block record produced by the external block parser.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Block attributes, keyed by attribute name.
pub type Attributes = Map<String, Value>;

/// A block as emitted by the block parser.
///
/// Only `blockName`, `attrs`, `innerBlocks` and `innerHTML` are read;
/// other parser fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedBlock {
    #[serde(rename = "blockName", default)]
    pub block_name: Option<String>,
    #[serde(default)]
    pub attrs: Attributes,
    #[serde(rename = "innerBlocks", default)]
    pub inner_blocks: Vec<ParsedBlock>,
    #[serde(rename = "innerHTML", default)]
    pub inner_html: String,
}

impl ParsedBlock {
    /// Look up a string attribute; non-string values count as absent.
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_parser_output() {
        let block: ParsedBlock = serde_json::from_value(json!({
            "blockName": "core/navigation-menu",
            "attrs": { "textColor": "blue" },
            "innerBlocks": [
                { "blockName": "core/navigation-menu-item", "attrs": { "label": "Home" } }
            ],
            "innerHTML": "",
            "innerContent": []
        }))
        .unwrap();

        assert_eq!(block.block_name.as_deref(), Some("core/navigation-menu"));
        assert_eq!(block.attr_str("textColor"), Some("blue"));
        assert_eq!(block.inner_blocks.len(), 1);
        assert_eq!(block.inner_blocks[0].attr_str("label"), Some("Home"));
    }

    #[test]
    fn missing_fields_default() {
        let block: ParsedBlock = serde_json::from_value(json!({})).unwrap();
        assert!(block.block_name.is_none());
        assert!(block.attrs.is_empty());
        assert!(block.inner_blocks.is_empty());
        assert!(block.inner_html.is_empty());
    }

    #[test]
    fn non_string_attr_is_absent() {
        let block: ParsedBlock =
            serde_json::from_value(json!({ "attrs": { "label": 42 } })).unwrap();
        assert!(block.attr_str("label").is_none());
    }
}
