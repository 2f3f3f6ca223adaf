use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tree_vfs::{FsBackend, TreeFS};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Section {
    Basic,
    Example,
    Errors,
    Tree,
    All,
}

/// Walks through the operations of an in-memory tree namespace.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Which part of the walkthrough to run.
    #[arg(long, value_enum, default_value_t = Section::All)]
    section: Section,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn basic_operations() -> Result<TreeFS> {
    let mut fs = TreeFS::new();
    info!(root = ?fs.ls("/")?, exists = fs.exists("/"), "initial state");

    fs.mkdir("/documents")?;
    fs.mkdir("/projects/rust/filesystem")?;
    info!(root = ?fs.ls("/")?, projects = ?fs.ls("/projects")?, "created directories");

    fs.add_content_to_file("/documents/readme.txt", "Welcome to the file system!")?;
    fs.add_content_to_file("/projects/rust/filesystem/main.rs", "// entry point\n")?;
    fs.add_content_to_file("/projects/rust/filesystem/main.rs", "fn main() {}\n")?;
    info!(documents = ?fs.ls("/documents")?, "created files");

    let main = fs
        .read_content_from_file("/projects/rust/filesystem/main.rs")
        .context("reading main.rs")?;
    info!(content = %main.trim_end(), "read main.rs");
    Ok(fs)
}

fn round_trip_example() -> Result<()> {
    let mut fs = TreeFS::new();
    fs.mkdir("/a/b/c")?;
    fs.add_content_to_file("/a/b/c/d", "hello")?;
    info!(root = ?fs.ls("/")?, leaf_dir = ?fs.ls("/a/b/c")?, "after mkdir and add");
    info!(content = %fs.read_content_from_file("/a/b/c/d")?, "read /a/b/c/d");

    fs.add_content_to_file("/a/b/c/d", " world")?;
    info!(content = %fs.read_content_from_file("/a/b/c/d")?, "after append");
    Ok(())
}

fn error_handling() -> Result<()> {
    let mut fs = TreeFS::new();
    fs.add_content_to_file("/x", "data")?;
    fs.mkdir("/dir")?;

    let attempts = [
        ("ls a/b", fs.ls("a/b").map(drop)),
        ("ls /Upper", fs.ls("/Upper").map(drop)),
        ("ls /a//b", fs.ls("/a//b").map(drop)),
        ("ls /missing", fs.ls("/missing").map(drop)),
        ("ls /x/y", fs.ls("/x/y").map(drop)),
        ("read /dir", fs.read_content_from_file("/dir").map(drop)),
        ("mkdir /x", fs.mkdir("/x")),
        ("add /x/y", fs.add_content_to_file("/x/y", "z")),
        ("add /dir", fs.add_content_to_file("/dir", "z")),
    ];
    for (op, result) in attempts {
        match result {
            Ok(()) => info!(op, "unexpectedly succeeded"),
            Err(e) => warn!(op, kind = ?e.kind(), "{e}"),
        }
    }
    info!(tree = ?fs.ls("/")?, "tree after failed operations");
    Ok(())
}

fn tree_visualization(fs: &mut TreeFS) -> Result<()> {
    fs.add_content_to_file("/projects/rust/filesystem/lib.rs", "pub mod vfs;\n")?;
    fs.mkdir("/projects/rust/filesystem/tests")?;
    for entry in fs.tree("/projects")? {
        info!(path = entry.path(), kind = %entry.kind(), depth = entry.depth(), "entry");
    }
    println!("{}", fs.render("/")?);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let run = |section: Section| args.section == section || args.section == Section::All;

    if run(Section::Basic) || run(Section::Tree) {
        let mut fs = basic_operations()?;
        if run(Section::Tree) {
            tree_visualization(&mut fs)?;
        }
    }
    if run(Section::Example) {
        round_trip_example()?;
    }
    if run(Section::Errors) {
        error_handling()?;
    }
    Ok(())
}
