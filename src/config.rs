/// Settings for distro-finder
///
/// Stored in ~/.distro-finder/settings.json. Every field is optional on
/// disk; whatever is missing falls back to the defaults below.

use crate::core::DEFAULT_PENALTY_FACTOR;
use crate::error::{FinderError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the base directory
pub const HOME_ENV: &str = "DISTRO_FINDER_HOME";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Where the survey, distro and hardware JSON files live
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Multiplier applied per mismatch or weak hardware axis
    #[serde(default = "default_penalty_factor")]
    pub penalty_factor: f64,

    /// Whether hardware facts count towards the ranking
    #[serde(default = "default_use_hardware")]
    pub use_hardware: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            penalty_factor: default_penalty_factor(),
            use_hardware: default_use_hardware(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    Settings::home().join("data")
}

fn default_penalty_factor() -> f64 {
    DEFAULT_PENALTY_FACTOR
}

fn default_use_hardware() -> bool {
    true
}

impl Settings {
    /// Base directory: $DISTRO_FINDER_HOME or ~/.distro-finder
    pub fn home() -> PathBuf {
        if let Ok(home) = std::env::var(HOME_ENV) {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".distro-finder")
    }

    pub fn default_path() -> PathBuf {
        Self::home().join("settings.json")
    }

    /// Load settings from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path
    ///
    /// A missing file gives defaults, and so does a malformed one (with a
    /// warning). Values that parse but make no sense are an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings = match serde_json::from_str::<Settings>(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                Self::default()
            }
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings, overwriting the whole file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.penalty_factor > 0.0 && self.penalty_factor <= 1.0) {
            return Err(FinderError::Config(format!(
                "penalty_factor must be in (0, 1], got {}",
                self.penalty_factor
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json")).unwrap();

        assert_eq!(settings.penalty_factor, 0.5);
        assert!(settings.use_hardware);
        assert!(settings.data_dir.ends_with("data"));
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"penalty_factor": 0.8, "data_dir": "/srv/distros"}"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();

        assert_eq!(settings.penalty_factor, 0.8);
        assert_eq!(settings.data_dir, PathBuf::from("/srv/distros"));
        assert!(settings.use_hardware);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "penalty_factor = 0.8").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.penalty_factor, 0.5);
    }

    #[test]
    fn test_invalid_penalty_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        for bad in ["0", "-0.5", "1.5"] {
            std::fs::write(&path, format!(r#"{{"penalty_factor": {}}}"#, bad)).unwrap();
            assert!(matches!(
                Settings::load_from(&path),
                Err(FinderError::Config(_))
            ));
        }
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            data_dir: dir.path().join("data"),
            penalty_factor: 0.25,
            use_hardware: false,
        };
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }
}
