use std::io::Write;
use std::path::Path;

use crate::config::ErrorPolicy;
use crate::error::{Result, TreeError};

use super::walker::{LineKind, TreeLines};

/// Connector for every entry but the last among its siblings
pub const BRANCH: &str = "├── ";
/// Connector for the last entry among its siblings
pub const CORNER: &str = "└── ";
/// Continuation below an entry that still has following siblings
pub const VERTICAL: &str = "│   ";
/// Continuation below a last entry
pub const BLANK: &str = "    ";

/// Text of the line standing in for a subdirectory that could not be listed
pub const UNREADABLE_MARKER: &str = "[unreadable]";

/// Render options for tree output
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Print the root path as the first line
    pub show_root: bool,
    /// Title line printed before the tree, followed by a blank line
    pub header: Option<String>,
    /// Listing failure policy for subdirectories
    pub on_error: ErrorPolicy,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_show_root(mut self, show: bool) -> Self {
        self.show_root = show;
        self
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        let header = header.into();
        self.header = (!header.is_empty()).then_some(header);
        self
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.on_error = policy;
        self
    }
}

/// Counts of what a render emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub directories: u64,
    pub files: u64,
    pub unreadable: u64,
}

/// Render the tree under `root` into `out`, one line per entry.
///
/// Lines are written as the traversal produces them. A root that cannot be
/// listed fails before anything (header included) is written.
pub fn render<W: Write>(root: &Path, options: &RenderOptions, out: &mut W) -> Result<RenderStats> {
    let lines = TreeLines::new(root, options.on_error)?;

    if let Some(header) = &options.header {
        writeln!(out, "{}\n", header).map_err(TreeError::Output)?;
    }
    if options.show_root {
        writeln!(out, "{}", root.display()).map_err(TreeError::Output)?;
    }

    let mut stats = RenderStats::default();
    for line in lines {
        let line = line?;
        match line.kind {
            LineKind::Directory => stats.directories += 1,
            LineKind::File => stats.files += 1,
            LineKind::Unreadable => stats.unreadable += 1,
        }
        writeln!(out, "{}", line).map_err(TreeError::Output)?;
    }

    out.flush().map_err(TreeError::Output)?;
    Ok(stats)
}

/// Render the tree under `root` into a string
pub fn render_to_string(root: &Path, options: &RenderOptions) -> Result<String> {
    let mut buf = Vec::new();
    render(root, options, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
