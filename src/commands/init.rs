use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r####"# Gradetally Configuration

# Token that starts a grading comment. Everything after it on the line is
# searched for "<obtained>/<possible>" pairs.
marker = "### Grading:"

# Only files whose name ends with this suffix are scanned.
suffix = ".py"

[output]
# Written into every directory with scanned files (--report)
report_file_name = "grading_report.txt"
# Written at the scan root (--recursive --summary)
summary_file_name = "grading_summary.csv"
# First line of each report; {dir} is replaced by the directory name
report_preamble = "Grading report for directory: {dir}"
"####;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

/// Write the commented default configuration to `path`.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }
    io::write_file(path, DEFAULT_CONFIG)
}
