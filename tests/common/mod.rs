// Shared helpers for gradetally integration tests
#![allow(dead_code)]

use gradetally::commands::{run_scan, ScanConfig};
use gradetally::config::GradetallyConfig;
use gradetally::io::{FileDestinations, MemoryDestination, RealFileSystem, WalkOutcome};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Write `content` to `root/relative`, creating parent directories.
pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Run a scan over the real file system and capture the console output.
pub fn scan(config: &ScanConfig) -> (WalkOutcome, String) {
    let console = MemoryDestination::new();
    let outcome = run_scan(
        config,
        &GradetallyConfig::default(),
        RealFileSystem::new(),
        &FileDestinations,
        &console,
        false,
    )
    .unwrap();
    (outcome, console.get_content())
}

/// Summary CSV rows keyed by directory label.
pub fn read_summary(path: &Path) -> BTreeMap<String, (u64, u64)> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    assert_eq!(
        reader.headers().unwrap().iter().collect::<Vec<_>>(),
        vec!["Directory", "TotalObtained", "TotalPossible"]
    );
    reader
        .records()
        .map(|record| {
            let record = record.unwrap();
            (
                record[0].to_string(),
                (record[1].parse().unwrap(), record[2].parse().unwrap()),
            )
        })
        .collect()
}
