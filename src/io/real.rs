//! Production implementation of [`FileSystem`].
//!
//! ```rust,ignore
//! use gradetally::io::real::RealFileSystem;
//! use gradetally::io::traits::FileSystem;
//!
//! let fs = RealFileSystem::new();
//! let entries = fs.list_dir(Path::new("submissions"))?;
//! ```

use crate::errors::Error;
use crate::io::traits::{DirEntry, EntryKind, FileSystem};
use std::fs;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// File system backed by `std::fs`, listing directories with `walkdir`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        fs::read_to_string(path).map_err(|e| Error::io_at("Failed to read file", path, e))
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, Error> {
        let metadata =
            fs::metadata(path).map_err(|e| Error::io_at("Failed to list directory", path, e))?;
        if !metadata.is_dir() {
            return Err(Error::file_system(
                format!("Not a directory: {}", path.display()),
                path,
            ));
        }

        let mut entries = Vec::new();
        let walker = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            match entry {
                Ok(entry) => entries.push(DirEntry::new(entry.path(), classify(&entry))),
                // Depth zero means the directory itself could not be opened.
                Err(e) if e.depth() == 0 => {
                    let message = format!("Failed to list directory: {}", e);
                    return Err(match e.into_io_error() {
                        Some(source) => Error::FileSystem {
                            message,
                            path: Some(path.to_path_buf()),
                            source: Some(source),
                        },
                        None => Error::file_system(message, path),
                    });
                }
                Err(e) => {
                    warn!("Skipping unreadable entry in '{}': {}", path.display(), e);
                }
            }
        }

        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Symlinks count as files when they point at one; linked directories are
/// never descended into.
fn classify(entry: &walkdir::DirEntry) -> EntryKind {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else if file_type.is_symlink() {
        match fs::metadata(entry.path()) {
            Ok(target) if target.is_file() => EntryKind::File,
            _ => EntryKind::Other,
        }
    } else {
        EntryKind::Other
    }
}
