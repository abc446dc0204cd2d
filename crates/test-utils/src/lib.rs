//! navblock test utilities.
//!
//! Fixture builders for parsed-block JSON and scratch block-library
//! directories for descriptor loading tests.

use std::path::{Path, PathBuf};

use serde_json::{Value as JsonValue, json};
use uuid::Uuid;

/// Block name of the navigation menu.
pub const NAVIGATION_MENU: &str = "core/navigation-menu";

/// Block name used for menu items.
pub const NAVIGATION_MENU_ITEM: &str = "core/navigation-menu-item";

/// Create a menu item with a label and destination.
pub fn menu_item(label: &str, destination: &str) -> TestMenuItem {
    TestMenuItem {
        label: Some(label.to_string()),
        destination: Some(destination.to_string()),
        title: None,
        children: Vec::new(),
    }
}

/// A menu item builder producing parsed-block JSON.
#[derive(Debug, Clone, Default)]
pub struct TestMenuItem {
    pub label: Option<String>,
    pub destination: Option<String>,
    pub title: Option<String>,
    pub children: Vec<TestMenuItem>,
}

impl TestMenuItem {
    /// An item without any attributes.
    pub fn bare() -> Self {
        Self::default()
    }

    /// Set the title attribute.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Remove the destination.
    pub fn without_destination(mut self) -> Self {
        self.destination = None;
        self
    }

    /// Append a child item.
    pub fn with_child(mut self, child: TestMenuItem) -> Self {
        self.children.push(child);
        self
    }

    /// Convert to the parsed-block shape.
    pub fn to_json(&self) -> JsonValue {
        let mut attrs = serde_json::Map::new();
        if let Some(label) = &self.label {
            attrs.insert("label".to_string(), json!(label));
        }
        if let Some(destination) = &self.destination {
            attrs.insert("destination".to_string(), json!(destination));
        }
        if let Some(title) = &self.title {
            attrs.insert("title".to_string(), json!(title));
        }

        json!({
            "blockName": NAVIGATION_MENU_ITEM,
            "attrs": attrs,
            "innerBlocks": self.children.iter().map(TestMenuItem::to_json).collect::<Vec<_>>(),
            "innerHTML": "",
        })
    }
}

/// Build a navigation menu block with the given color attributes and items.
pub fn navigation_block(attrs: JsonValue, items: &[TestMenuItem]) -> JsonValue {
    json!({
        "blockName": NAVIGATION_MENU,
        "attrs": attrs,
        "innerBlocks": items.iter().map(TestMenuItem::to_json).collect::<Vec<_>>(),
        "innerHTML": "",
    })
}

/// Build a single chain of items `depth` levels deep below the root.
pub fn nested_menu(depth: usize) -> JsonValue {
    let mut item: Option<TestMenuItem> = None;
    for level in (1..=depth).rev() {
        let mut current = menu_item(&format!("Level {level}"), &format!("/level-{level}"));
        if let Some(child) = item.take() {
            current = current.with_child(child);
        }
        item = Some(current);
    }
    let items: Vec<TestMenuItem> = item.into_iter().collect();
    navigation_block(json!({}), &items)
}

/// Path to the block library shipped with the workspace.
pub fn shipped_blocks_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("blocks")
}

/// A temporary block-library directory, removed on drop.
#[derive(Debug)]
pub struct ScratchBlocksDir {
    path: PathBuf,
}

impl ScratchBlocksDir {
    /// Create an empty, uniquely named directory under the system temp dir.
    pub fn new() -> std::io::Result<Self> {
        let path = std::env::temp_dir().join(format!("navblock-test-{}", Uuid::now_v7()));
        std::fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    /// Root of the scratch library.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `<root>/<block_dir>/block.json` with raw contents.
    pub fn write_descriptor(&self, block_dir: &str, contents: &str) -> std::io::Result<PathBuf> {
        let dir = self.path.join(block_dir);
        std::fs::create_dir_all(&dir)?;
        let file = dir.join("block.json");
        std::fs::write(&file, contents)?;
        Ok(file)
    }
}

impl Drop for ScratchBlocksDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
