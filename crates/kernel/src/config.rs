//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::navigation_menu::DEFAULT_MAX_DEPTH;

/// Block library configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one sub-directory per block, each with a
    /// `block.json` descriptor (default: ./blocks).
    pub block_library_dir: PathBuf,

    /// Maximum number of nested `<ul>` levels the navigation menu
    /// renderer emits (default: 32).
    pub max_menu_depth: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let block_library_dir = lookup("BLOCK_LIBRARY_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./blocks"));

        let max_menu_depth: usize = lookup("NAVIGATION_MENU_MAX_DEPTH")
            .unwrap_or_else(|| DEFAULT_MAX_DEPTH.to_string())
            .parse()
            .context("NAVIGATION_MENU_MAX_DEPTH must be a valid unsigned integer")?;

        if max_menu_depth == 0 {
            bail!("NAVIGATION_MENU_MAX_DEPTH must be at least 1");
        }

        Ok(Self {
            block_library_dir,
            max_menu_depth,
        })
    }

    /// Override the block library directory.
    pub fn with_block_library_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.block_library_dir = dir.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            block_library_dir: PathBuf::from("./blocks"),
            max_menu_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
