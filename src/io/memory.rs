//! In-memory [`FileSystem`] for tests.
//!
//! Adding a file registers all of its ancestor directories, so a tree can be
//! described by its files alone. Paths marked with [`MemoryFileSystem::deny`]
//! fail with `PermissionDenied`, which exercises the walker's skip paths.

use crate::errors::Error;
use crate::io::traits::{DirEntry, EntryKind, FileSystem};
use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone)]
pub struct MemoryFileSystem {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    denied: BTreeSet<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_dir(path);
        self
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.insert(path, content.into());
    }

    pub fn add_dir(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    /// Make reads and listings of `path` fail with `PermissionDenied`.
    pub fn deny(mut self, path: impl Into<PathBuf>) -> Self {
        self.denied.insert(path.into());
        self
    }

    fn check_access(&self, path: &Path, message: &str) -> Result<(), Error> {
        if self.denied.contains(path) {
            let source = std::io::Error::new(ErrorKind::PermissionDenied, "permission denied");
            return Err(Error::io_at(message, path, source));
        }
        Ok(())
    }
}

fn not_found(message: &str, path: &Path) -> Error {
    let source = std::io::Error::new(ErrorKind::NotFound, "no such file or directory");
    Error::io_at(message, path, source)
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        self.check_access(path, "Failed to read file")?;
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found("Failed to read file", path))
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, Error> {
        self.check_access(path, "Failed to list directory")?;
        if !self.dirs.contains(path) {
            return Err(not_found("Failed to list directory", path));
        }

        let files = self
            .files
            .keys()
            .filter(|file| file.parent() == Some(path))
            .map(|file| DirEntry::new(file.clone(), EntryKind::File));
        let dirs = self
            .dirs
            .iter()
            .filter(|dir| dir.parent() == Some(path))
            .map(|dir| DirEntry::new(dir.clone(), EntryKind::Directory));

        let mut entries: Vec<DirEntry> = files.chain(dirs).collect();
        entries.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }
}
