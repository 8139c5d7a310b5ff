use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::{GradetallyConfig, CONFIG_FILE_NAME};
use super::validation::validate_config;
use crate::errors::{Error, Result};

/// How many directories (starting at the scan root) discovery looks at.
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read a config file's raw contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<GradetallyConfig> {
    let config = toml::from_str::<GradetallyConfig>(contents)?;
    validate_config(&config).map_err(Error::Validation)?;
    Ok(config)
}

/// Load a config file named explicitly by the user.
///
/// Unlike discovery, every problem here is an error.
pub fn load_config_file(path: &Path) -> Result<GradetallyConfig> {
    let contents =
        read_config_file(path).map_err(|e| Error::io_at("Failed to read config file", path, e))?;
    let config = parse_and_validate_config(&contents).map_err(|e| {
        Error::Configuration(format!("{}: {}", path.display(), e))
    })?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading config from a discovered location
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<GradetallyConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!(
                "Ignoring invalid config {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate `start` and its ancestors, at most `max_depth` of them
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Discover `.gradetally.toml` starting at `start` and walking upwards.
///
/// Falls back to defaults when nothing usable is found.
pub fn load_config(start: &Path) -> GradetallyConfig {
    let start = start
        .canonicalize()
        .unwrap_or_else(|_| start.to_path_buf());

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            GradetallyConfig::default()
        })
}
