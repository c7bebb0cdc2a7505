use std::fs;
use std::path::{Path, PathBuf};

use super::core::DashboardConfig;
use crate::error::ConfigError;

pub const CONFIG_FILE_NAME: &str = ".fmeadash.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<DashboardConfig, ConfigError> {
    let config = toml::from_str::<DashboardConfig>(contents)?;

    config
        .thresholds
        .rpn
        .validate()
        .map_err(|source| ConfigError::Thresholds {
            section: "rpn",
            source,
        })?;
    config
        .thresholds
        .matrix
        .validate()
        .map_err(|source| ConfigError::Thresholds {
            section: "matrix",
            source,
        })?;

    Ok(config)
}

/// Load an explicitly requested config file. Every failure is an error.
pub fn load_config_from(path: &Path) -> Result<DashboardConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound(path.to_path_buf())
        } else {
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let config = parse_and_validate_config(&contents)?;
    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Try a discovered candidate. Missing files are skipped silently, broken ones
/// are reported and skipped so discovery falls back to defaults.
fn try_load_config_from_path(config_path: &Path) -> Option<DashboardConfig> {
    match load_config_from(config_path) {
        Ok(config) => Some(config),
        Err(ConfigError::NotFound(_)) => None,
        Err(e) => {
            tracing::warn!(path = %config_path.display(), "{}. Using defaults.", e);
            None
        }
    }
}

/// Pure function to generate directory ancestors up to a depth limit
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

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fmeadash").join("config.toml"))
}

/// Discover configuration starting at `start`: project ancestors first, then
/// the user config directory, then defaults.
pub fn discover_config(start: PathBuf) -> DashboardConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            DashboardConfig::default()
        })
}

/// Resolve the effective configuration for a command.
pub fn load_config(explicit: Option<&Path>) -> Result<DashboardConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(DashboardConfig::default())
        }
    }
}
