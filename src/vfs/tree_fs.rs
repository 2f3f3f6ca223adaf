//! This module provides an in-memory namespace of directories and files organized as a tree.

use crate::core::utils::{self, ROOT};
use crate::core::{FsBackend, FsError, Result};
use crate::{DirEntry, Entry, EntryType, TreeView};

/// An in-memory file namespace that stores its entries as a tree of owned nodes.
///
/// ### Internal state
///
/// * `root` — The root directory, named `/`. It is created by [`TreeFS::new`], is always a
///   directory, and is never replaced or removed.
///
/// ### Invariants
///
/// 1. **Root existence**: the root is always present and has type `Directory`.
/// 2. **Uniqueness**: names are unique among the children of a directory.
/// 3. **Fixed kind**: an entry never changes between file and directory after creation.
/// 4. **Valid names**: every name below the root satisfies [`utils::is_valid_name`].
///
/// ### Paths
///
/// Paths are absolute and never normalized: `/`, `/docs`, `/docs/readme.txt` are valid,
/// while `docs`, `/docs/`, `/a//b`, `/Docs` and `/v2` are rejected with `InvalidPath`.
///
/// ### Failure atomicity
///
/// Creating operations (`mkdir()`, `add_content_to_file()`) only ever conflict with entries
/// that already exist, and all of those come before the first entry the walk creates. An
/// operation that returns an error therefore leaves the tree untouched.
///
/// ### Thread Safety
///
/// `TreeFS` holds plain owned data and is `Send + Sync`, but its mutating methods take
/// `&mut self`. If concurrent access is required, wrap it in a synchronization primitive
/// (e.g., `Arc<Mutex<TreeFS>>`) at the application level.
///
/// ### Example
///
/// ```
/// use tree_vfs::{FsBackend, TreeFS};
///
/// let mut fs = TreeFS::new();
///
/// fs.mkdir("/a/b/c").unwrap();
/// fs.add_content_to_file("/a/b/c/d", "hello").unwrap();
///
/// assert_eq!(fs.ls("/").unwrap(), vec!["a"]);
/// assert_eq!(fs.read_content_from_file("/a/b/c/d").unwrap(), "hello");
/// ```
#[derive(Debug, Clone)]
pub struct TreeFS {
    root: Entry,
}

impl TreeFS {
    /// Creates new TreeFS instance containing only the root directory.
    pub fn new() -> Self {
        Self {
            root: Entry::new(ROOT, EntryType::Directory),
        }
    }

    /// Returns the entry at `path`, failing on any missing or wrong-kind component.
    pub fn entry(&self, path: &str) -> Result<&Entry> {
        let components = utils::split_path(path)?;
        let mut current = &self.root;
        for (i, name) in components.iter().enumerate() {
            if current.is_file() {
                return Err(FsError::NotADirectory {
                    path: utils::join_path(&components[..i]),
                });
            }
            current = current
                .child(name)
                .ok_or_else(|| FsError::PathNotFound {
                    path: utils::join_path(&components[..=i]),
                })?;
        }
        Ok(current)
    }

    /// Returns a printable view of the subtree at `path`.
    pub fn render(&self, path: &str) -> Result<TreeView<'_>> {
        Ok(TreeView::new(self.entry(path)?))
    }

    /// Walks `path`, creating every missing component: directories on the way, and an
    /// entry of type `terminal` at the end. The entry found at `path` must be of that type.
    fn entry_or_create(&mut self, path: &str, terminal: EntryType) -> Result<&mut Entry> {
        let components = utils::split_path(path)?;
        let last = components.len().saturating_sub(1);

        let mut current = &mut self.root;
        for (i, name) in components.iter().enumerate() {
            let entry_type = if i == last {
                terminal
            } else {
                EntryType::Directory
            };
            current = current
                .child_or_insert(name, entry_type)
                .ok_or_else(|| FsError::ConflictingType {
                    path: utils::join_path(&components[..i]),
                    expected: EntryType::Directory,
                })?;
        }

        if current.entry_type() != terminal {
            return Err(FsError::ConflictingType {
                path: path.to_string(),
                expected: terminal,
            });
        }
        Ok(current)
    }

    fn collect_tree(entry: &Entry, prefix: &str, out: &mut Vec<DirEntry>) {
        for child in entry.children() {
            let path = format!("{prefix}/{}", child.name());
            out.push(DirEntry::new(path.as_str(), child.entry_type()));
            Self::collect_tree(child, &path, out);
        }
    }
}

impl Default for TreeFS {
    fn default() -> Self {
        Self::new()
    }
}

impl FsBackend for TreeFS {
    /// Lists the entry at `path`.
    ///
    /// # Returns
    /// * For a directory, the names of its immediate children in ascending order.
    /// * For a file, a single-element vector with the file's own name.
    /// * `Err(FsError)` - `InvalidPath`, `PathNotFound`, or `NotADirectory` if a
    ///   non-terminal component is a file.
    fn ls(&self, path: &str) -> Result<Vec<String>> {
        let entry = self.entry(path)?;
        if entry.is_file() {
            return Ok(vec![entry.name().to_string()]);
        }
        Ok(entry
            .children()
            .into_iter()
            .map(|child| child.name().to_string())
            .collect())
    }

    /// Creates directory and all its parents (if needed).
    /// Does nothing if `path` already is a directory; `/` is always one.
    /// Fails with `ConflictingType` if any component of `path` is an existing file.
    fn mkdir(&mut self, path: &str) -> Result<()> {
        self.entry_or_create(path, EntryType::Directory)?;
        Ok(())
    }

    /// Appends `content` to the file at `path`.
    ///
    /// Missing parent directories and the file itself are created first; a new file starts
    /// empty. Fails with `ConflictingType` if `path` is a directory (the root included) or
    /// if one of its parents is a file.
    fn add_content_to_file(&mut self, path: &str, content: &str) -> Result<()> {
        let file = self.entry_or_create(path, EntryType::File)?;
        file.append_content(content);
        Ok(())
    }

    /// Reads the entire contents of a file.
    ///
    /// # Returns
    /// * `Ok(String)` - everything appended to the file so far, in order.
    /// * `Err(FsError)` - `InvalidPath`, `PathNotFound`, `NotADirectory`, or `NotAFile` if
    ///   `path` is a directory.
    fn read_content_from_file(&self, path: &str) -> Result<String> {
        let entry = self.entry(path)?;
        entry
            .content()
            .map(str::to_string)
            .ok_or_else(|| FsError::NotAFile {
                path: path.to_string(),
            })
    }

    /// Checks if `path` is valid and exists.
    fn exists(&self, path: &str) -> bool {
        self.entry(path).is_ok()
    }

    fn is_file(&self, path: &str) -> bool {
        self.entry(path).is_ok_and(Entry::is_file)
    }

    fn is_dir(&self, path: &str) -> bool {
        self.entry(path).is_ok_and(Entry::is_dir)
    }

    /// Returns every entry below `path` in depth-first order, siblings sorted as by `ls()`.
    /// The entry at `path` itself is not included, unless it is a file, in which case it
    /// is the only item.
    fn tree(&self, path: &str) -> Result<Vec<DirEntry>> {
        let entry = self.entry(path)?;
        let mut out = Vec::new();
        if entry.is_file() {
            out.push(DirEntry::new(path, EntryType::File));
            return Ok(out);
        }
        let prefix = if path == ROOT { "" } else { path };
        Self::collect_tree(entry, prefix, &mut out);
        Ok(out)
    }
}
