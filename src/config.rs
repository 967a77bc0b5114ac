// src/config.rs
//
// Application configuration.
//
// Lookup order: explicit path, then $COURSEHUB_CONFIG, then
// <config dir>/coursehub/config.json. A missing file means defaults;
// a file that exists but cannot be parsed is an error.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const CONFIG_ENV_VAR: &str = "COURSEHUB_CONFIG";
const CONFIG_DIR_NAME: &str = "coursehub";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub toast: ToastConfig,
    pub resolution: ResolutionConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// How long a toast stays visible
    pub default_duration_ms: u64,

    /// Exit animation length; containers wait this long before removal
    pub exit_transition_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: 4000,
            exit_transition_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Emit VideoReferenceResolved/Rejected events on the bus
    pub emit_events: bool,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self { emit_events: true }
    }
}

impl AppConfig {
    /// Load using the standard lookup order
    pub fn load(explicit: Option<&Path>) -> AppResult<Self> {
        match Self::locate(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json_str(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw).map_err(|e| AppError::Config(e.to_string()))
    }

    fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.toast.default_duration_ms, 4000);
        assert_eq!(config.toast.exit_transition_ms, 300);
        assert!(config.resolution.emit_events);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json_str(r#"{"toast": {"default_duration_ms": 2500}}"#).unwrap();
        assert_eq!(config.toast.default_duration_ms, 2500);
        assert_eq!(config.toast.exit_transition_ms, 300);
        assert!(config.resolution.emit_events);
    }

    #[test]
    fn test_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"resolution": {{"emit_events": false}}}}"#).unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert!(!config.resolution.emit_events);
    }

    #[test]
    fn test_missing_explicit_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(Some(&dir.path().join("absent.json"))).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
