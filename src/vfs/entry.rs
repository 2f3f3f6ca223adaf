use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryType {
    File,
    Directory,
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryType::File => f.write_str("file"),
            EntryType::Directory => f.write_str("directory"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Directory(HashMap<String, Entry>),
    File(String),
}

/// A single node of the tree: a directory owning its children, or a file owning its content.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    name: String,
    node: Node,
}

impl Entry {
    pub fn new(name: impl Into<String>, entry_type: EntryType) -> Entry {
        let node = match entry_type {
            EntryType::Directory => Node::Directory(HashMap::new()),
            EntryType::File => Node::File(String::new()),
        };
        Entry {
            name: name.into(),
            node,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entry_type(&self) -> EntryType {
        match self.node {
            Node::Directory(_) => EntryType::Directory,
            Node::File(_) => EntryType::File,
        }
    }

    pub fn is_file(&self) -> bool {
        self.entry_type() == EntryType::File
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type() == EntryType::Directory
    }

    /// File content; `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match &self.node {
            Node::File(content) => Some(content),
            Node::Directory(_) => None,
        }
    }

    /// Appends to a file's content. Returns false (and does nothing) for directories.
    pub(crate) fn append_content(&mut self, content: &str) -> bool {
        match &mut self.node {
            Node::File(existing) => {
                existing.push_str(content);
                true
            }
            Node::Directory(_) => false,
        }
    }

    pub fn child(&self, name: &str) -> Option<&Entry> {
        match &self.node {
            Node::Directory(children) => children.get(name),
            Node::File(_) => None,
        }
    }

    /// Returns the child `name`, inserting `Entry::new(name, entry_type)` if absent.
    /// `None` if `self` is a file.
    pub(crate) fn child_or_insert(
        &mut self,
        name: &str,
        entry_type: EntryType,
    ) -> Option<&mut Entry> {
        match &mut self.node {
            Node::Directory(children) => Some(
                children
                    .entry(name.to_string())
                    .or_insert_with(|| Entry::new(name, entry_type)),
            ),
            Node::File(_) => None,
        }
    }

    /// Children sorted by name; empty for files.
    pub fn children(&self) -> Vec<&Entry> {
        let mut children: Vec<&Entry> = match &self.node {
            Node::Directory(children) => children.values().collect(),
            Node::File(_) => Vec::new(),
        };
        children.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_directory() {
        let dir = Entry::new("docs", EntryType::Directory);
        assert_eq!(dir.name(), "docs");
        assert!(dir.is_dir());
        assert!(!dir.is_file());
        assert_eq!(dir.content(), None);
        assert!(dir.children().is_empty());
    }

    #[test]
    fn test_new_file() {
        let file = Entry::new("note.txt", EntryType::File);
        assert!(file.is_file());
        assert_eq!(file.content(), Some(""));
        assert!(file.children().is_empty());
        assert!(file.child("x").is_none());
    }

    #[test]
    fn test_append_content() {
        let mut file = Entry::new("log", EntryType::File);
        assert!(file.append_content("hello"));
        assert!(file.append_content(""));
        assert!(file.append_content(" world"));
        assert_eq!(file.content(), Some("hello world"));

        let mut dir = Entry::new("dir", EntryType::Directory);
        assert!(!dir.append_content("data"));
        assert_eq!(dir.content(), None);
    }

    #[test]
    fn test_child_or_insert_keeps_existing() {
        let mut dir = Entry::new("/", EntryType::Directory);
        dir.child_or_insert("a", EntryType::File)
            .unwrap()
            .append_content("x");
        // an existing child is returned as is, whatever type is asked for
        let child = dir.child_or_insert("a", EntryType::Directory).unwrap();
        assert!(child.is_file());
        assert_eq!(child.content(), Some("x"));

        let mut file = Entry::new("f", EntryType::File);
        assert!(file.child_or_insert("a", EntryType::Directory).is_none());
    }

    #[test]
    fn test_children_sorted() {
        let mut dir = Entry::new("/", EntryType::Directory);
        for name in ["zeta", "alpha", "b.txt", "a.b", "beta"] {
            dir.child_or_insert(name, EntryType::Directory);
        }
        let names: Vec<_> = dir.children().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["a.b", "alpha", "b.txt", "beta", "zeta"]);
        assert!(dir.child("alpha").is_some());
        assert!(dir.child("gamma").is_none());
    }
}
