//! Failures of sketch config files.
//!
//! A config can fail to be read or written, can name an extension other than
//! `.json` or `.toml`, can fail to parse, or can parse into values the
//! renderer would choke on (zero-sized canvas, empty palette, non-finite
//! motif geometry). Each case has its own variant so callers can report the
//! offending key.

use std::io;
use thiserror::Error;

/// Sketch config error.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Reading the config file failed; carries the path and cause.
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    /// Writing the config file failed; carries the path and cause.
    #[error("Failed to save settings: {0}")]
    SaveError(String),

    /// A parsed value failed validation. `key` is the dotted config path.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// Extension is neither `json` nor `toml`.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl SettingsError {
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Result of loading, saving or validating a config.
pub type SettingsResult<T> = Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_error_display() {
        let err = SettingsError::LoadError("file not found".to_string());
        assert_eq!(err.to_string(), "Failed to load settings: file not found");

        let err = SettingsError::invalid("canvas.width", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid setting 'canvas.width': must be positive"
        );

        let err = SettingsError::UnsupportedFormat("yaml".to_string());
        assert_eq!(err.to_string(), "Unsupported config format: yaml");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let settings_err: SettingsError = io_err.into();
        assert!(matches!(settings_err, SettingsError::Io(_)));

        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let settings_err: SettingsError = json_err.into();
        assert!(matches!(settings_err, SettingsError::Json(_)));

        let toml_err = toml::from_str::<toml::Value>("= 1").unwrap_err();
        let settings_err: SettingsError = toml_err.into();
        assert!(matches!(settings_err, SettingsError::TomlDe(_)));
    }
}
