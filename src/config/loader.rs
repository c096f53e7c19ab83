use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::EngineConfig;
use crate::error::{Error, Result, ResultExt};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".skinplan.toml";

/// Read a config file into memory
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse TOML into an [`EngineConfig`] and check every section
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<EngineConfig, String> {
    let config = toml::from_str::<EngineConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    config.validate()?;
    Ok(config)
}

/// Load one candidate file, or `None` if it is missing or unusable
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<EngineConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Ignoring this file.", e, config_path.display());
            None
        }
    }
}

/// A missing file is expected while searching; anything else is logged
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its parents, at most `max_depth` entries
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

/// Search the working directory and its ancestors for `.skinplan.toml`.
///
/// Unreadable or invalid files are logged and skipped; when nothing usable
/// is found the built-in defaults are returned.
pub fn load_config() -> EngineConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return EngineConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            EngineConfig::default()
        })
}

/// Load an explicitly requested config file. Unlike [`load_config`], every
/// failure is reported to the caller.
pub fn load_config_from_path(path: &Path) -> Result<EngineConfig> {
    let contents = read_config_file(path)
        .map_err(Error::from)
        .context(format!("Reading config file {}", path.display()))?;
    parse_and_validate_config(&contents).map_err(Error::Configuration)
}
