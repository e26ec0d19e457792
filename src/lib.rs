//! dirtree - Print a directory as an indented tree diagram
//!
//! Entries are listed depth-first, sorted by name at every level, and
//! prefixed with box-drawing connectors that show nesting and which entry
//! closes each branch.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod tree;

// Re-export commonly used types
pub use config::{Config, ErrorPolicy};
pub use error::{Result, TreeError};
pub use tree::{render, render_to_string, RenderOptions};
