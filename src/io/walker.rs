use crate::core::{FileResult, FileTable, ScoreTotals, DEFAULT_MARKER, DEFAULT_SUFFIX};
use crate::errors::Result;
use crate::extraction::extract_marker_lines;
use crate::io::traits::{DirEntry, FileSystem};
use crate::scoring::ScorePattern;
use std::path::PathBuf;
use tracing::{debug, debug_span, info, warn};

/// What one walk produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOutcome {
    /// Sum over every processed file
    pub totals: ScoreTotals,
    /// Number of files that matched the suffix and were scanned
    pub files_processed: usize,
    /// Directories that were listed successfully, in visit order
    pub visited: Vec<PathBuf>,
    /// Per-file results, present only when collection was requested
    pub files: Option<FileTable>,
}

impl WalkOutcome {
    fn empty(collect_files: bool) -> Self {
        Self {
            totals: ScoreTotals::ZERO,
            files_processed: 0,
            visited: Vec::new(),
            files: collect_files.then(FileTable::new),
        }
    }
}

/// Walks a directory (optionally its whole subtree) and scores every file
/// whose name ends with the configured suffix.
///
/// Each directory is visited at most once and only the files directly inside
/// it are processed there. Directories are visited depth-first with children
/// in name order. Directories that cannot be listed are skipped.
pub struct DirectoryWalker<F: FileSystem> {
    fs: F,
    root: PathBuf,
    recursive: bool,
    collect_files: bool,
    marker: String,
    suffix: String,
    excluded: Vec<String>,
}

impl<F: FileSystem> DirectoryWalker<F> {
    pub fn new(fs: F, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
            recursive: false,
            collect_files: false,
            marker: DEFAULT_MARKER.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            excluded: Vec::new(),
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Keep the per-file table in the outcome.
    pub fn collect_files(mut self, collect_files: bool) -> Self {
        self.collect_files = collect_files;
        self
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Never scan files with this exact name, even when the suffix matches.
    ///
    /// Used for the artifacts a scan writes itself.
    pub fn exclude_file_name(mut self, name: impl Into<String>) -> Self {
        self.excluded.push(name.into());
        self
    }

    /// Run the walk.
    ///
    /// Only fails when the marker cannot be turned into a pattern. Read and
    /// listing failures are logged and skipped; an unlistable root gives an
    /// empty outcome.
    pub fn walk(&self) -> Result<WalkOutcome> {
        let pattern = ScorePattern::new(&self.marker)?;
        let mut outcome = WalkOutcome::empty(self.collect_files);
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let _span = debug_span!("visit", dir = %dir.display()).entered();

            let entries = match self.fs.list_dir(&dir) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Could not list directory '{}': {}", dir.display(), e);
                    continue;
                }
            };
            outcome.visited.push(dir);

            let mut subdirs = Vec::new();
            for entry in entries {
                if entry.is_dir() {
                    subdirs.push(entry.path);
                } else if self.qualifies(&entry) {
                    self.process_file(&pattern, entry.path, &mut outcome);
                }
            }

            if self.recursive {
                // Reversed so the first child in name order is popped first.
                pending.extend(subdirs.into_iter().rev());
            }
        }

        info!(
            "Scanned {} file(s) in {} director{} under '{}': {}",
            outcome.files_processed,
            outcome.visited.len(),
            if outcome.visited.len() == 1 { "y" } else { "ies" },
            self.root.display(),
            outcome.totals
        );
        Ok(outcome)
    }

    fn qualifies(&self, entry: &DirEntry) -> bool {
        if !entry.is_file() {
            return false;
        }
        let name = entry.file_name();
        name.ends_with(&self.suffix) && !self.excluded.contains(&name)
    }

    fn process_file(&self, pattern: &ScorePattern, path: PathBuf, outcome: &mut WalkOutcome) {
        let comments = extract_marker_lines(&self.fs, &path, &self.marker);
        let totals = pattern.totals(&comments);
        debug!("{}: {}", path.display(), totals);

        outcome.totals += totals;
        outcome.files_processed += 1;
        if let Some(files) = outcome.files.as_mut() {
            files.insert(path.clone(), FileResult::new(path, comments, totals));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemoryFileSystem;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn nested_fs() -> MemoryFileSystem {
        MemoryFileSystem::new()
            .with_file("top/t.py", "### Grading: 1/2\n")
            .with_file("top/notes.txt", "### Grading: 50/50\n")
            .with_file("top/sub/s.py", "### Grading: 2/3\n")
            .with_file("top/sub/subsub/ss.py", "### Grading: 3/4\n")
            .with_file("top/alpha/a.py", "### Grading: 0/1\n")
    }

    #[test]
    fn test_non_recursive_only_scans_root_files() {
        let outcome = DirectoryWalker::new(nested_fs(), "top").walk().unwrap();

        assert_eq!(outcome.totals, ScoreTotals::new(1, 2));
        assert_eq!(outcome.files_processed, 1);
        assert_eq!(outcome.visited, vec![PathBuf::from("top")]);
        assert!(outcome.files.is_none());
    }

    #[test]
    fn test_recursive_visits_each_directory_once_in_name_order() {
        let outcome = DirectoryWalker::new(nested_fs(), "top")
            .recursive(true)
            .walk()
            .unwrap();

        assert_eq!(outcome.totals, ScoreTotals::new(6, 10));
        assert_eq!(
            outcome.visited,
            vec![
                PathBuf::from("top"),
                PathBuf::from("top/alpha"),
                PathBuf::from("top/sub"),
                PathBuf::from("top/sub/subsub"),
            ]
        );
    }

    #[test]
    fn test_collects_file_table_when_requested() {
        let outcome = DirectoryWalker::new(nested_fs(), "top")
            .recursive(true)
            .collect_files(true)
            .walk()
            .unwrap();

        let files = outcome.files.unwrap();
        let paths: Vec<_> = files.keys().cloned().collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("top/alpha/a.py"),
                PathBuf::from("top/sub/s.py"),
                PathBuf::from("top/sub/subsub/ss.py"),
                PathBuf::from("top/t.py"),
            ]
        );
        assert_eq!(
            files[Path::new("top/sub/s.py")].totals,
            ScoreTotals::new(2, 3)
        );
    }

    #[test]
    fn test_file_without_markers_is_listed_with_zero() {
        let fs = MemoryFileSystem::new().with_file("hw/empty.py", "print('hi')\n");
        let outcome = DirectoryWalker::new(fs, "hw")
            .collect_files(true)
            .walk()
            .unwrap();

        let files = outcome.files.unwrap();
        let result = &files[Path::new("hw/empty.py")];
        assert!(result.comments.is_empty());
        assert_eq!(result.totals, ScoreTotals::ZERO);
    }

    #[test]
    fn test_unlistable_subdirectory_is_skipped() {
        let fs = nested_fs().deny("top/sub");
        let outcome = DirectoryWalker::new(fs, "top")
            .recursive(true)
            .walk()
            .unwrap();

        // sub and its child are unreachable
        assert_eq!(outcome.totals, ScoreTotals::new(1, 3));
        assert_eq!(
            outcome.visited,
            vec![PathBuf::from("top"), PathBuf::from("top/alpha")]
        );
    }

    #[test]
    fn test_unreadable_file_contributes_zero() {
        let fs = nested_fs().deny("top/t.py");
        let outcome = DirectoryWalker::new(fs, "top")
            .collect_files(true)
            .walk()
            .unwrap();

        assert_eq!(outcome.totals, ScoreTotals::ZERO);
        assert_eq!(outcome.files_processed, 1);
        assert!(outcome.files.unwrap()[Path::new("top/t.py")]
            .comments
            .is_empty());
    }

    #[test]
    fn test_missing_root_gives_empty_outcome() {
        let outcome = DirectoryWalker::new(MemoryFileSystem::new(), "nowhere")
            .recursive(true)
            .collect_files(true)
            .walk()
            .unwrap();

        assert_eq!(outcome.totals, ScoreTotals::ZERO);
        assert!(outcome.visited.is_empty());
        assert_eq!(outcome.files, Some(FileTable::new()));
    }

    #[test]
    fn test_custom_suffix_and_marker() {
        let fs = MemoryFileSystem::new()
            .with_file("src/a.rs", "// GRADE 2/2\n")
            .with_file("src/b.py", "// GRADE 5/5\n");
        let outcome = DirectoryWalker::new(fs, "src")
            .with_suffix(".rs")
            .with_marker("// GRADE")
            .walk()
            .unwrap();

        assert_eq!(outcome.totals, ScoreTotals::new(2, 2));
    }

    #[test]
    fn test_excluded_file_names_are_not_scanned() {
        let fs = MemoryFileSystem::new()
            .with_file("notes/a.txt", "### Grading: 1/1\n")
            .with_file("notes/grading_report.txt", "### Grading: 1/1\n");
        let outcome = DirectoryWalker::new(fs, "notes")
            .with_suffix(".txt")
            .exclude_file_name("grading_report.txt")
            .walk()
            .unwrap();

        assert_eq!(outcome.files_processed, 1);
        assert_eq!(outcome.totals, ScoreTotals::new(1, 1));
    }

    #[test]
    fn test_empty_directories_are_visited() {
        let fs = nested_fs().with_dir("top/empty").with_dir("top/sub/blank");
        let outcome = DirectoryWalker::new(fs, "top")
            .recursive(true)
            .walk()
            .unwrap();

        assert_eq!(outcome.totals, ScoreTotals::new(6, 10));
        assert_eq!(
            outcome.visited,
            vec![
                PathBuf::from("top"),
                PathBuf::from("top/alpha"),
                PathBuf::from("top/empty"),
                PathBuf::from("top/sub"),
                PathBuf::from("top/sub/blank"),
                PathBuf::from("top/sub/subsub"),
            ]
        );
    }
}
