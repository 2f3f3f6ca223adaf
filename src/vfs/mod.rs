mod dir_entry;
mod entry;
mod render;
mod tree_fs;

pub use dir_entry::DirEntry;
pub use entry::{Entry, EntryType};
pub use render::TreeView;
pub use tree_fs::TreeFS;
