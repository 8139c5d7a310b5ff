mod common;

use common::{read_summary, scan, write};
use gradetally::commands::ScanConfig;
use gradetally::ScoreTotals;
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn nested_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let top = temp_dir.path().join("topdir");
    write(&top, "t.py", "### Grading: 1/2\n");
    write(&top, "sub/s.py", "### Grading: 2/3\n");
    write(&top, "sub/subsub/ss.py", "### Grading: 3/4\n");
    temp_dir
}

#[test]
fn test_non_recursive_report() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(
        root,
        "a.py",
        indoc! {"
            # starter
            ### Grading: 4/5
            ### Grading: 1/1
        "},
    );
    write(root, "b.py", "# another\n### Grading: 2/2\n");
    write(root, "nested/c.py", "### Grading: 9/9\n");

    let config = ScanConfig {
        per_file: true,
        report: true,
        ..ScanConfig::new(root)
    };
    let (outcome, _) = scan(&config);

    assert_eq!(outcome.totals, ScoreTotals::new(7, 8));
    assert_eq!(outcome.files.as_ref().unwrap().len(), 2);

    let report = fs::read_to_string(root.join("grading_report.txt")).unwrap();
    assert!(report.starts_with("Grading report for directory: "));
    assert!(report.contains("Total for a.py: 5 / 6"));
    assert!(report.ends_with("Grand total: 7 / 8\n"));
    assert!(!root.join("nested/grading_report.txt").exists());
}

#[test]
fn test_recursive_summary_rolls_up() {
    let temp_dir = nested_tree();
    let top = temp_dir.path().join("topdir");

    let config = ScanConfig {
        recursive: true,
        summary: true,
        ..ScanConfig::new(&top)
    };
    let (outcome, console) = scan(&config);

    assert_eq!(outcome.totals, ScoreTotals::new(6, 9));
    assert!(console.ends_with("(recursive=true): 6 / 9\n"));

    let rows = read_summary(&top.join("grading_summary.csv"));
    assert_eq!(rows.len(), 3);
    assert_eq!(rows["topdir"], (6, 9));
    assert_eq!(rows["sub"], (5, 7));
    assert_eq!(rows["sub/subsub"], (3, 4));
}

#[test]
fn test_reports_hold_flat_totals() {
    let temp_dir = TempDir::new().unwrap();
    let top = temp_dir.path().join("top");
    write(&top, "a.py", "### Grading: 1/2\n### Grading: 2/3\n");
    write(&top, "sub1/x.py", "### Grading: 2/3\n");
    write(&top, "sub2/y.py", "### Grading: 3/4\n");
    write(&top, "sub2/subsub/z.py", "### Grading: 4/5\n");

    let config = ScanConfig {
        recursive: true,
        report: true,
        summary: true,
        ..ScanConfig::new(&top)
    };
    scan(&config);

    let sub2_report = fs::read_to_string(top.join("sub2/grading_report.txt")).unwrap();
    assert!(sub2_report.ends_with("Grand total: 3 / 4\n"));
    assert!(!sub2_report.contains("z.py"));

    let rows = read_summary(&top.join("grading_summary.csv"));
    assert_eq!(rows["top"], (12, 17));
    assert_eq!(rows["sub1"], (2, 3));
    assert_eq!(rows["sub2"], (7, 9));
    assert_eq!(rows["sub2/subsub"], (4, 5));
}

#[test]
fn test_rerun_is_idempotent() {
    let temp_dir = nested_tree();
    let top = temp_dir.path().join("topdir");
    let config = ScanConfig {
        recursive: true,
        report: true,
        summary: true,
        ..ScanConfig::new(&top)
    };

    let read_artifacts = || {
        [
            "grading_report.txt",
            "grading_summary.csv",
            "sub/grading_report.txt",
            "sub/subsub/grading_report.txt",
        ]
        .map(|name| fs::read_to_string(top.join(name)).unwrap())
    };

    let (first, _) = scan(&config);
    let first_artifacts = read_artifacts();
    let (second, _) = scan(&config);

    assert_eq!(first, second);
    assert_eq!(first_artifacts, read_artifacts());
}

#[test]
fn test_file_without_markers_is_listed() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "plain.py", "print('no grades')\n");

    let config = ScanConfig {
        per_file: true,
        report: true,
        ..ScanConfig::new(temp_dir.path())
    };
    let (outcome, console) = scan(&config);

    assert_eq!(outcome.totals, ScoreTotals::ZERO);
    assert!(console.contains("plain.py: 0 / 0\n"));
    let report = fs::read_to_string(temp_dir.path().join("grading_report.txt")).unwrap();
    assert!(report.contains("File: plain.py\nTotal for plain.py: 0 / 0\n"));
}

#[test]
fn test_summary_rows_resum_to_root_total() {
    let temp_dir = TempDir::new().unwrap();
    let top = temp_dir.path().join("course");
    write(&top, "a.py", "### Grading: 4/5\n");
    write(&top, "w1/b.py", "### Grading: 2/3 ### Grading: 1/1\n");
    write(&top, "w1/deep/c.py", "### Grading: 7/7\n");
    write(&top, "w2/d.py", "### Grading: 0/6\n");
    fs::create_dir_all(top.join("w3")).unwrap();

    let config = ScanConfig {
        recursive: true,
        summary: true,
        ..ScanConfig::new(&top)
    };
    let (outcome, _) = scan(&config);
    let rows = read_summary(&top.join("grading_summary.csv"));

    // Depth-one rows plus the root's own files rebuild the root total.
    let children: (u64, u64) = rows
        .iter()
        .filter(|(label, _)| *label != "course" && !label.contains('/'))
        .fold((0, 0), |acc, (_, totals)| (acc.0 + totals.0, acc.1 + totals.1));
    let own = ScoreTotals::new(4, 5);
    assert_eq!(
        ScoreTotals::new(children.0, children.1) + own,
        outcome.totals
    );
    assert_eq!(rows["course"], (outcome.totals.obtained, outcome.totals.possible));
    assert_eq!(rows["w3"], (0, 0));
}

#[test]
fn test_unlistable_root_gives_zero_outcome() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");
    let (outcome, console) = scan(&ScanConfig::new(&missing));

    assert!(outcome.visited.is_empty());
    assert_eq!(outcome.totals, ScoreTotals::ZERO);
    assert!(console.ends_with("(recursive=false): 0 / 0\n"));
}
