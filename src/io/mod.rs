pub mod destinations;
pub mod memory;
pub mod real;
pub mod traits;
pub mod walker;

// Re-export I/O traits for convenient access
pub use destinations::{
    DestinationFactory, FileDestination, FileDestinations, MemoryDestination, MemoryDestinations,
    OutputDestination, StdoutDestination,
};
pub use memory::MemoryFileSystem;
pub use real::RealFileSystem;
pub use traits::{DirEntry, EntryKind, FileSystem};
pub use walker::{DirectoryWalker, WalkOutcome};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
