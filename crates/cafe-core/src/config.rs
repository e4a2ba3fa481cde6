//! Runtime configuration
//!
//! Resolution order: built-in defaults, then an optional TOML file, then
//! `CAFE_*` environment variables. The CLI applies its own flags last.
//!
//! ```toml
//! db_path = "cafe.sqlite"
//! fast_threshold_minutes = 15
//! log_profile = "production"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{CafeError, Result};
use crate::logging_facility::Profile;
use crate::queries::DEFAULT_FAST_THRESHOLD_MINUTES;
use crate::rules::validate_threshold;

pub const ENV_DB_PATH: &str = "CAFE_DB_PATH";
pub const ENV_FAST_THRESHOLD: &str = "CAFE_FAST_THRESHOLD_MINUTES";
pub const ENV_LOG_PROFILE: &str = "CAFE_LOG_PROFILE";

pub const DEFAULT_DB_PATH: &str = "cafe.sqlite";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CafeConfig {
    /// SQLite database file
    pub db_path: PathBuf,

    /// Minutes under which an order counts as fast
    pub fast_threshold_minutes: u32,

    pub log_profile: Profile,
}

impl Default for CafeConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            fast_threshold_minutes: DEFAULT_FAST_THRESHOLD_MINUTES,
            log_profile: Profile::Development,
        }
    }
}

impl CafeConfig {
    /// Load configuration from defaults, `path` (if given) and the environment
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file cannot be read or parsed, or an
    /// environment variable holds an unusable value, and `InvalidThreshold`
    /// for a threshold below one minute.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file; missing keys fall back to defaults
    ///
    /// # Errors
    ///
    /// Returns `Config` on I/O or parse failure.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CafeError::Config {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&text)
    }

    /// # Errors
    ///
    /// Returns `Config` if `text` is not valid for this schema.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Overlay values from an environment lookup
    ///
    /// The lookup is injected so tests do not have to mutate the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `Config` when a variable is present but unparseable.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(db_path) = lookup(ENV_DB_PATH) {
            self.db_path = PathBuf::from(db_path);
        }

        if let Some(raw) = lookup(ENV_FAST_THRESHOLD) {
            let minutes: i64 = raw.trim().parse().map_err(|_| CafeError::Config {
                message: format!("{} must be an integer, got '{}'", ENV_FAST_THRESHOLD, raw),
            })?;
            self.fast_threshold_minutes = validate_threshold(minutes)?;
        }

        if let Some(raw) = lookup(ENV_LOG_PROFILE) {
            self.log_profile = raw
                .parse()
                .map_err(|message| CafeError::Config { message })?;
        }

        Ok(())
    }

    /// # Errors
    ///
    /// Returns `InvalidThreshold` if the threshold is zero, or `Config` if
    /// the database path is empty.
    pub fn validate(&self) -> Result<()> {
        validate_threshold(i64::from(self.fast_threshold_minutes))?;
        if self.db_path.as_os_str().is_empty() {
            return Err(CafeError::Config {
                message: "db_path cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CafeConfig::default();
        assert_eq!(config.db_path, PathBuf::from("cafe.sqlite"));
        assert_eq!(config.fast_threshold_minutes, 15);
        assert_eq!(config.log_profile, Profile::Development);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CafeConfig::from_toml_str("fast_threshold_minutes = 20").unwrap();
        assert_eq!(config.fast_threshold_minutes, 20);
        assert_eq!(config.db_path, PathBuf::from("cafe.sqlite"));
    }

    #[test]
    fn test_full_toml() {
        let config = CafeConfig::from_toml_str(
            r#"
            db_path = "/var/lib/cafe/orders.sqlite"
            fast_threshold_minutes = 10
            log_profile = "production"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_profile, Profile::Production);
        assert_eq!(config.fast_threshold_minutes, 10);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = CafeConfig::from_toml_str("threshold = 3").unwrap_err();
        assert!(matches!(err, CafeError::Config { .. }));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = CafeConfig::from_toml_str("fast_threshold_minutes = 20").unwrap();
        config
            .apply_env(env(&[
                (ENV_FAST_THRESHOLD, "5"),
                (ENV_DB_PATH, "other.sqlite"),
                (ENV_LOG_PROFILE, "prod"),
            ]))
            .unwrap();
        assert_eq!(config.fast_threshold_minutes, 5);
        assert_eq!(config.db_path, PathBuf::from("other.sqlite"));
        assert_eq!(config.log_profile, Profile::Production);
    }

    #[test]
    fn test_env_rejects_bad_values() {
        let mut config = CafeConfig::default();
        assert!(matches!(
            config.apply_env(env(&[(ENV_FAST_THRESHOLD, "soon")])),
            Err(CafeError::Config { .. })
        ));
        assert!(matches!(
            config.apply_env(env(&[(ENV_FAST_THRESHOLD, "0")])),
            Err(CafeError::InvalidThreshold { minutes: 0 })
        ));
        assert!(matches!(
            config.apply_env(env(&[(ENV_LOG_PROFILE, "loud")])),
            Err(CafeError::Config { .. })
        ));
    }

    #[test]
    fn test_zero_threshold_in_file_fails_validation() {
        let config = CafeConfig::from_toml_str("fast_threshold_minutes = 0").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cafe.toml");
        std::fs::write(&path, "db_path = \"x.sqlite\"\n").unwrap();

        let config = CafeConfig::from_file(&path).unwrap();
        assert_eq!(config.db_path, PathBuf::from("x.sqlite"));

        let missing = CafeConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(CafeError::Config { .. })));
    }
}
