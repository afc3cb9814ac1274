use std::fs;
use std::path::{Path, PathBuf};

use super::TagsConfig;
use crate::core::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".gotags.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<TagsConfig> {
    toml::from_str::<TagsConfig>(contents)
        .map_err(|e| Error::configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))
}

/// Load config from an explicit path; a missing file is an error here
pub fn load_config_from_path(path: &Path) -> Result<TagsConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read config file", path, e))?;
    let config = parse_config(&contents)?;
    log_loaded(path);
    Ok(config)
}

fn log_loaded(path: &Path) {
    tracing::debug!("Loaded config from {}", path.display());
}

/// Try one candidate location, treating absence as "keep looking"
fn try_load_config_from_path(config_path: &Path) -> Option<TagsConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log_loaded(config_path);
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Only log actual errors, not "file not found"
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its ancestors, nearest first, at most `max_depth` entries
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

/// Find the nearest `.gotags.toml` at or above `start`
pub fn find_config(start: PathBuf) -> Option<TagsConfig> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
}

/// Load config from the working directory hierarchy, or defaults
pub fn load_config() -> TagsConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return TagsConfig::default();
        }
    };

    find_config(current).unwrap_or_else(|| {
        tracing::debug!(
            "No config found after checking {} directories. Using default config.",
            MAX_TRAVERSAL_DEPTH
        );
        TagsConfig::default()
    })
}
