//! Planner configuration for flightpath
//!
//! Read from `--config <path>` when given, otherwise from
//! `~/.config/flightpath/config.toml` (or `$FLIGHTPATH_CONFIG_DIR/config.toml`).
//! A missing default file means default settings.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{FlightError, Result};

pub use types::{PlannerConfig, DEFAULT_MAX_PATHS};

const CONFIG_DIR: &str = "flightpath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "FLIGHTPATH_CONFIG_DIR";

impl PlannerConfig {
    /// Default config file location
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    FlightError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| FlightError::io_operation("read config", path.display(), e))?;
        let config: PlannerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective configuration
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = Self::default_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlightError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| FlightError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.max_paths == 0 {
            bail_invalid!("max_paths (must be at least 1)", self.max_paths);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RankBy;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.max_paths, 3);
        assert_eq!(config.default_rank, RankBy::Cost);
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_rank = \"time\"\n").unwrap();

        let config = PlannerConfig::load(&path).unwrap();
        assert_eq!(config.max_paths, 3);
        assert_eq!(config.default_rank, RankBy::Time);
    }

    #[test]
    fn test_save_and_load_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = PlannerConfig {
            max_paths: 5,
            default_rank: RankBy::Time,
        };
        config.save(&path).unwrap();

        assert_eq!(PlannerConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_zero_max_paths_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_paths = 0\n").unwrap();

        let err = PlannerConfig::load(&path).unwrap_err();
        assert!(matches!(err, FlightError::InvalidValue { .. }));
    }

    #[test]
    fn test_malformed_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_paths = \"many\"\n").unwrap();

        assert!(matches!(
            PlannerConfig::load(&path).unwrap_err(),
            FlightError::Toml(_)
        ));
    }

    #[test]
    fn test_discover_explicit_missing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(PlannerConfig::discover(Some(&missing)).is_err());
    }
}
