//! An in-memory hierarchical namespace of directories and files.
//!
//! ### Overview
//!
//! `tree-vfs` keeps a tree of directories and text files entirely in memory and lets you work
//! with it through absolute, slash-delimited paths. It defines the `FsBackend` trait with the
//! public operations and provides `TreeFS`, the tree-backed implementation.
//!
//! **Key ideas**:
//! - **Strict names**: a path is `/` followed by components made of lowercase ASCII letters and
//!   `.`; anything else is rejected before the tree is touched.
//! - **Creation on demand**: `mkdir()` and `add_content_to_file()` create every missing parent.
//! - **Typed nodes**: an entry is a directory or a file for its whole life; a directory never
//!   has content and a file never has children.
//! - **Distinguishable errors**: every failure is an `FsError` with a matchable `ErrorKind`.
//! - **Isolation**: each `TreeFS` is an independent value; there is no global state.
//!
//! ### Example
//!
//! ```
//! use tree_vfs::{ErrorKind, FsBackend, TreeFS};
//!
//! let mut fs = TreeFS::new();
//! fs.add_content_to_file("/docs/readme.txt", "Welcome").unwrap();
//!
//! assert_eq!(fs.ls("/docs").unwrap(), vec!["readme.txt"]);
//! assert_eq!(fs.mkdir("/docs/readme.txt").unwrap_err().kind(), ErrorKind::ConflictingType);
//! ```

mod core;
mod vfs;

pub use crate::core::{ErrorKind, FsBackend, FsError, Result, utils};
pub use crate::vfs::{DirEntry, Entry, EntryType, TreeFS, TreeView};
