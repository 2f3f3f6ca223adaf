use crate::EntryType;
use crate::core::utils::{ROOT, SEPARATOR};

/// A path and its kind, as yielded by recursive listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    path: String,
    kind: EntryType,
}

impl DirEntry {
    pub fn new(path: impl Into<String>, kind: EntryType) -> DirEntry {
        DirEntry {
            path: path.into(),
            kind,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Last component of the path (`/` for the root).
    pub fn name(&self) -> &str {
        match self.path.rsplit_once(SEPARATOR) {
            Some((_, name)) if !name.is_empty() => name,
            _ => ROOT,
        }
    }

    /// Number of components below the root.
    pub fn depth(&self) -> usize {
        self.path.split(SEPARATOR).filter(|c| !c.is_empty()).count()
    }

    pub fn kind(&self) -> EntryType {
        self.kind
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryType::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryType::Directory
    }

    pub fn is_root(&self) -> bool {
        self.kind == EntryType::Directory && self.path == ROOT
    }
}
