//! # survey-config
//!
//! Layered settings and participant configuration for survey3d.
//!
//! Settings sources (in priority order, highest wins):
//! 1. Environment variables (`SURVEY3D_*` prefix, `__` as separator)
//! 2. Project-level `.survey3d/config.toml`
//! 3. User-level `~/.config/survey3d/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `SURVEY3D_PATHS__DATA_DIR` -> `paths.data_dir`, and so on.
//!
//! The participant configuration (`participant_config.json` in
//! `paths.config_dir`) is a separate JSON file loaded with
//! [`ParticipantConfig::load`].
//!
//! # Usage
//!
//! ```no_run
//! use survey_config::{ParticipantConfig, SurveySettings};
//!
//! let settings = SurveySettings::load_with_dotenv().expect("settings");
//! let participants = ParticipantConfig::load(&settings.paths.config_dir).expect("participants");
//! println!("{} participants configured", participants.len());
//! ```

mod error;
mod output;
mod participants;
mod paths;

pub use error::ConfigError;
pub use output::OutputConfig;
pub use participants::{PARTICIPANT_CONFIG_FILE, ParticipantConfig};
pub use paths::PathsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SurveySettings {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl SurveySettings {
    /// Load settings from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load settings with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Extract and validate settings from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` on extraction failure and
    /// `ConfigError::InvalidValue` if a directory setting is empty.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let settings: Self = figment.extract()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
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
        let local_path = PathBuf::from(".survey3d/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SURVEY3D_").split("__"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, dir) in [
            ("paths.config_dir", &self.paths.config_dir),
            ("paths.data_dir", &self.paths.data_dir),
        ] {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "directory must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Path to the user-global config file, `<config dir>/survey3d/config.toml`.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("survey3d").join("config.toml"))
    }

    /// Load `.env` from the current directory. Silently does nothing if none exists.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
