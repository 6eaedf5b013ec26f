use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::config::FileConfig;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "YEARPICK_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("config file already exists: {0}")]
    Exists(PathBuf),
    #[error("no config directory available; pass --config")]
    NoConfigDir,
}

/// Resolve the config file path: explicit path, then `$YEARPICK_CONFIG`,
/// then `<config dir>/case-organizer/yearpick.toml`.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(env) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(env));
    }
    dirs::config_dir()
        .map(|dir| dir.join("case-organizer").join("yearpick.toml"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Read and validate the config. A missing file yields defaults.
pub fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(FileConfig::default());
        }
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    let config: FileConfig = toml::from_str(&text)?;
    config
        .picker
        .validate()
        .map_err(|e| ConfigError::Invalid {
            field: e.field,
            reason: e.reason,
        })?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Write a config file, creating parent directories. Refuses to overwrite.
pub fn write_config(path: &Path, config: &FileConfig) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::Exists(path.to_path_buf()));
    }
    let text = toml::to_string_pretty(config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(path, text).map_err(|e| ConfigError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
