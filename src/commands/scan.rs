use crate::config::{self, GradetallyConfig};
use crate::io::{
    DestinationFactory, DirectoryWalker, FileDestinations, FileSystem, OutputDestination,
    RealFileSystem, StdoutDestination, WalkOutcome,
};
use crate::output::{
    format_breakdown, format_directory_totals, should_use_colors, ReportWriter, SummaryWriter,
};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

/// Everything `gradetally scan` was asked to do.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    pub path: PathBuf,
    pub recursive: bool,
    pub per_file: bool,
    pub report: bool,
    pub summary: bool,
    pub marker: Option<String>,
    pub suffix: Option<String>,
    pub config: Option<PathBuf>,
    pub plain: bool,
}

impl ScanConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    fn needs_file_table(&self) -> bool {
        self.per_file || self.report || self.summary
    }
}

/// Settings for one scan: the explicit or discovered config file with the
/// command line overrides applied on top.
pub fn resolve_config(scan: &ScanConfig) -> Result<GradetallyConfig> {
    let mut settings = match &scan.config {
        Some(path) => config::load_config_file(path)?,
        None => config::load_config(&scan.path),
    };

    if let Some(marker) = &scan.marker {
        settings.marker = marker.clone();
    }
    if let Some(suffix) = &scan.suffix {
        settings.suffix = suffix.clone();
    }

    config::validate_config(&settings).map_err(crate::errors::Error::Validation)?;
    Ok(settings)
}

pub fn handle_scan(scan: ScanConfig) -> Result<WalkOutcome> {
    let fs = RealFileSystem::new();
    if !scan.path.exists() {
        anyhow::bail!("Scan root '{}' does not exist", scan.path.display());
    }
    if !fs.is_dir(&scan.path) {
        anyhow::bail!("Scan root '{}' is not a directory", scan.path.display());
    }

    let settings = resolve_config(&scan)
        .with_context(|| format!("Invalid configuration for '{}'", scan.path.display()))?;
    let use_colors = !scan.plain && should_use_colors();

    run_scan(
        &scan,
        &settings,
        fs,
        &FileDestinations,
        &StdoutDestination::new(),
        use_colors,
    )
}

/// Walk, print, and write the requested artifacts.
///
/// Console and artifact write failures are logged and do not fail the scan.
pub fn run_scan<F, D, O>(
    scan: &ScanConfig,
    settings: &GradetallyConfig,
    fs: F,
    artifacts: &D,
    console: &O,
    use_colors: bool,
) -> Result<WalkOutcome>
where
    F: FileSystem,
    D: DestinationFactory,
    O: OutputDestination,
{
    let outcome = DirectoryWalker::new(fs, scan.path.clone())
        .recursive(scan.recursive)
        .collect_files(scan.needs_file_table())
        .with_marker(settings.marker.clone())
        .with_suffix(settings.suffix.clone())
        .exclude_file_name(settings.output.report_file_name.clone())
        .exclude_file_name(settings.output.summary_file_name.clone())
        .walk()?;

    let mut text = format_directory_totals(&scan.path, scan.recursive, outcome.totals, use_colors);
    text.push('\n');
    if scan.per_file {
        if let Some(files) = outcome.files.as_ref() {
            text.push_str(&format_breakdown(files, use_colors));
        }
    }
    print_to(console, &text);

    let Some(files) = outcome.files.as_ref() else {
        return Ok(outcome);
    };

    if scan.report {
        let stats = ReportWriter::new(settings.output.clone()).write_reports(files, artifacts);
        info!(
            "Reports: {} written, {} failed",
            stats.written, stats.failed
        );
    }

    if scan.summary {
        if scan.recursive {
            let writer = SummaryWriter::new(settings.output.summary_file_name.clone());
            let path = writer.summary_path(&scan.path);
            let destination = artifacts.destination_for(&path);
            match writer.write_summary(&destination, &scan.path, &outcome.visited, files) {
                Ok(()) => info!("Wrote summary {}", destination.description()),
                Err(e) => warn!("Could not write summary to '{}': {}", path.display(), e),
            }
        } else {
            warn!("--summary needs --recursive; no summary written");
        }
    }

    Ok(outcome)
}

fn print_to<O: OutputDestination>(console: &O, text: &str) {
    if let Err(e) = console.write_str(text).and_then(|()| console.flush()) {
        warn!("Could not write to {}: {}", console.description(), e);
    }
}
