//! navblock kernel library
//!
//! The navigation menu block: server-side menu rendering, the block
//! registry it plugs into, and the colors selector control model.
//! The `navblock` binary is a command-line front end over this library.

pub mod block;
pub mod color_selector;
pub mod config;
pub mod error;
pub mod html;
pub mod navigation_menu;

pub use block::{BlockRegistry, ParsedBlock, register_core_blocks};
pub use config::Config;
pub use error::BlockError;
