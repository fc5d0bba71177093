use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::DonutConfig;

/// Config file name, looked up in the home directory
pub const CONFIG_FILE_NAME: &str = ".donut.yml";

/// Storage directory name used when the config does not set one
pub const DEFAULT_DIR_NAME: &str = ".donut";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine the home directory")]
    NoHomeDir,
}

/// Resolve the storage directory for the current user.
///
/// Only a missing home directory is an error; every problem with the config
/// file itself falls back to `~/.donut`.
pub fn resolve_donut_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(donut_dir_for_home(&home))
}

/// Resolve the storage directory against an explicit home directory
pub fn donut_dir_for_home(home: &Path) -> PathBuf {
    let config = read_config(&home.join(CONFIG_FILE_NAME));
    expand_dir(home, config.donut_dir.as_deref())
}

/// Read the config file. Missing, unreadable or malformed files yield the
/// default config.
pub fn read_config(path: &Path) -> DonutConfig {
    if !path.exists() {
        return DonutConfig::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read config, using defaults");
            return DonutConfig::default();
        }
    };

    match serde_yaml::from_str::<DonutConfig>(&content) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not parse config, using defaults");
            DonutConfig::default()
        }
    }
}

/// Expand a configured directory: `~/x` and relative paths resolve against
/// `home`, absolute paths are kept, and an empty value means `~/.donut`.
pub fn expand_dir(home: &Path, raw: Option<&str>) -> PathBuf {
    let raw = match raw.map(str::trim) {
        Some(r) if !r.is_empty() => r,
        _ => return home.join(DEFAULT_DIR_NAME),
    };

    if raw == "~" {
        return home.to_path_buf();
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        return home.join(rest);
    }

    let path = Path::new(raw);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        home.join(path)
    }
}
