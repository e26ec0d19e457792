mod entry;
mod render;
mod walker;

pub use entry::{list_entries, DirectoryEntry};
pub use render::{
    render, render_to_string, RenderOptions, RenderStats, BLANK, BRANCH, CORNER,
    UNREADABLE_MARKER, VERTICAL,
};
pub use walker::{LineKind, TreeLine, TreeLines};
