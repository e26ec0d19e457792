//! Lazy pre-order traversal producing one formatted line per entry.
//!
//! Traversal state lives on an explicit stack of frames instead of the call
//! stack, so deep hierarchies cannot overflow it. Each frame owns the sorted
//! entries of one directory that are still to be printed and the prefix its
//! lines start with. A directory is listed only once the iterator reaches it.

use std::fmt;
use std::iter::Peekable;
use std::path::{Path, PathBuf};
use std::vec;

use crate::config::ErrorPolicy;
use crate::error::Result;

use super::entry::{list_entries, DirectoryEntry};
use super::render::{BLANK, BRANCH, CORNER, UNREADABLE_MARKER, VERTICAL};

/// What a rendered line stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    File,
    Directory,
    /// Marker for a subdirectory that could not be listed
    Unreadable,
}

/// One line of the tree, without a trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub text: String,
    pub kind: LineKind,
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

struct Frame {
    entries: Peekable<vec::IntoIter<DirectoryEntry>>,
    prefix: String,
}

/// A directory whose line has been emitted but whose children are not listed yet.
struct Pending {
    path: PathBuf,
    prefix: String,
}

/// Iterator over the lines of a directory tree.
///
/// Yields `Err` at most once: under [`ErrorPolicy::Halt`] the first listing
/// failure ends the traversal.
pub struct TreeLines {
    stack: Vec<Frame>,
    pending: Option<Pending>,
    policy: ErrorPolicy,
    done: bool,
}

impl TreeLines {
    /// Start a traversal at `root`.
    ///
    /// The root is listed immediately, so a missing or unreadable root fails
    /// here before any line exists, whatever the policy.
    pub fn new(root: &Path, policy: ErrorPolicy) -> Result<Self> {
        let entries = list_entries(root)?;
        tracing::debug!(path = %root.display(), count = entries.len(), "Listed root");

        Ok(Self {
            stack: vec![Frame {
                entries: entries.into_iter().peekable(),
                prefix: String::new(),
            }],
            pending: None,
            policy,
            done: false,
        })
    }

    fn descend(&mut self, dir: Pending) -> Option<Result<TreeLine>> {
        match list_entries(&dir.path) {
            Ok(entries) => {
                tracing::debug!(path = %dir.path.display(), count = entries.len(), "Listed directory");
                self.stack.push(Frame {
                    entries: entries.into_iter().peekable(),
                    prefix: dir.prefix,
                });
                None
            }
            Err(err) => match self.policy {
                ErrorPolicy::Halt => {
                    self.done = true;
                    self.stack.clear();
                    Some(Err(err))
                }
                ErrorPolicy::Mark => {
                    tracing::warn!(path = %dir.path.display(), error = %err, "Skipping unreadable directory");
                    Some(Ok(TreeLine {
                        text: format!("{}{}{}", dir.prefix, CORNER, UNREADABLE_MARKER),
                        kind: LineKind::Unreadable,
                    }))
                }
            },
        }
    }
}

impl Iterator for TreeLines {
    type Item = Result<TreeLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some(dir) = self.pending.take() {
            if let Some(item) = self.descend(dir) {
                return Some(item);
            }
        }

        loop {
            let frame = self.stack.last_mut()?;

            let Some(entry) = frame.entries.next() else {
                self.stack.pop();
                continue;
            };

            let is_last = frame.entries.peek().is_none();
            let connector = if is_last { CORNER } else { BRANCH };
            let text = format!("{}{}{}", frame.prefix, connector, entry.name);

            let kind = if entry.is_dir {
                let continuation = if is_last { BLANK } else { VERTICAL };
                self.pending = Some(Pending {
                    prefix: format!("{}{}", frame.prefix, continuation),
                    path: entry.path,
                });
                LineKind::Directory
            } else {
                LineKind::File
            };

            return Some(Ok(TreeLine { text, kind }));
        }
    }
}
