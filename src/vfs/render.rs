use std::fmt;

use crate::Entry;

const INDENT: &str = "  ";

/// Displays a subtree, one entry per line, indented by depth.
///
/// Directories get a trailing `/`, files are followed by their content length:
///
/// ```text
/// /
///   docs/
///     readme.txt (27 chars)
/// ```
pub struct TreeView<'a> {
    entry: &'a Entry,
}

impl<'a> TreeView<'a> {
    pub fn new(entry: &'a Entry) -> Self {
        Self { entry }
    }

    fn write_entry(f: &mut fmt::Formatter<'_>, entry: &Entry, depth: usize) -> fmt::Result {
        let indent = INDENT.repeat(depth);
        match entry.content() {
            Some(content) => writeln!(
                f,
                "{indent}{} ({} chars)",
                entry.name(),
                content.chars().count()
            ),
            None => {
                let name = entry.name().trim_end_matches('/');
                writeln!(f, "{indent}{name}/")?;
                for child in entry.children() {
                    Self::write_entry(f, child, depth + 1)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for TreeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_entry(f, self.entry, 0)
    }
}
