//! # onto-config
//!
//! Layered configuration loading for ontoresolve using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ONTO_*` prefix, `__` as separator)
//! 2. Project-level `.onto/config.toml`
//! 3. User-level `~/.config/onto/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ONTO_SERVICE__BASE_URL` -> `service.base_url`,
//! `ONTO_RESOLVE__DELAY_MS` -> `resolve.delay_ms`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use onto_config::OntoConfig;
//!
//! let config = OntoConfig::load_with_dotenv().expect("config");
//! println!("endpoint: {}", config.service.active_base_url());
//! ```

mod error;
mod resolve;
mod service;

pub use error::ConfigError;
pub use resolve::ResolveConfig;
pub use service::ServiceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OntoConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub resolve: ResolveConfig,
}

impl OntoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is
    /// out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is
    /// out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on extraction or validation failure.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".onto/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("ONTO_").split("__"))
    }

    /// Check values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service.active_base_url().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "service.base_url".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.resolve.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "resolve.page_size".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.resolve.language.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "resolve.language".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("onto").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = OntoConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.service.use_proxy);
        assert_eq!(config.resolve.page_size, 25);
    }

    #[test]
    fn zero_page_size_is_invalid() {
        let mut config = OntoConfig::default();
        config.resolve.page_size = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "resolve.page_size"));
    }

    #[test]
    fn empty_base_url_is_invalid() {
        let mut config = OntoConfig::default();
        config.service.base_url = "/".into();
        assert!(config.validate().is_err());
    }
}
