//! TOML configuration file loading
//!
//! Config values only fill settings the command line left unset.

use super::args::{Args, LOG_FORMATS, LOG_LEVELS};
use std::path::{Path, PathBuf};

/// Errors raised while loading or applying the configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The specified configuration file does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing configuration file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for '{key}' in configuration file: expected {expected}")]
    InvalidValue { key: String, expected: String },
}

impl ConfigError {
    /// Read failures are environmental, everything else is fixable in the file
    pub fn is_user_actionable(&self) -> bool {
        !matches!(self, ConfigError::Read { .. })
    }
}

/// Default config path: `<config dir>/Titlecase/titlecase.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Titlecase").join("titlecase.toml"))
}

/// Load the configuration file, if there is one
///
/// An explicitly named file must exist; the default file is optional.
pub fn load_config_file(config_file: Option<&Path>) -> Result<Option<toml::Table>, ConfigError> {
    let config_path = match config_file {
        Some(path) if !path.exists() => {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(None),
        },
    };

    let contents = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
        path: config_path.clone(),
        source,
    })?;
    let table = toml::from_str::<toml::Table>(&contents).map_err(|source| ConfigError::Parse {
        path: config_path.clone(),
        source,
    })?;

    log::debug!("Loaded configuration from {}", config_path.display());
    Ok(Some(table))
}

impl Args {
    /// Apply TOML configuration values to settings the command line left unset
    ///
    /// `locale` and `color` are kept apart from their CLI counterparts so the
    /// precedence can be decided where they are used.
    pub fn apply_toml_values(&mut self, config: &toml::Table) -> Result<(), ConfigError> {
        self.config_locale = string_field(config, "locale", None)?;
        if self.log_level.is_none() {
            self.log_level = string_field(config, "log-level", Some(&LOG_LEVELS[..]))?;
        }
        if self.log_format.is_none() {
            self.log_format = string_field(config, "log-format", Some(&LOG_FORMATS[..]))?;
        }
        if self.log_file.is_none() {
            self.log_file = string_field(config, "log-file", None)?.map(PathBuf::from);
        }
        if let Some(value) = config.get("color") {
            let color = value.as_bool().ok_or_else(|| ConfigError::InvalidValue {
                key: "color".to_string(),
                expected: "a boolean".to_string(),
            })?;
            self.config_color = Some(color);
        }
        Ok(())
    }
}

fn string_field(
    config: &toml::Table,
    key: &str,
    allowed: Option<&[&str]>,
) -> Result<Option<String>, ConfigError> {
    let Some(value) = config.get(key) else {
        return Ok(None);
    };

    let text = value.as_str().ok_or_else(|| ConfigError::InvalidValue {
        key: key.to_string(),
        expected: "a string".to_string(),
    })?;

    if let Some(allowed) = allowed {
        if !allowed.contains(&text) {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                expected: format!("one of {}", allowed.join(", ")),
            });
        }
    }
    Ok(Some(text.to_string()))
}
