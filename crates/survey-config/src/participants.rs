//! Participant configuration file.
//!
//! `{config_dir}/participant_config.json` is a JSON object mapping each
//! participant id to an arbitrary configuration value. The value is copied
//! verbatim into every survey started for that participant.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::ConfigError;

/// File name of the participant configuration inside the config directory.
pub const PARTICIPANT_CONFIG_FILE: &str = "participant_config.json";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantConfig {
    entries: Map<String, Value>,
}

impl ParticipantConfig {
    /// Load `participant_config.json` from `config_dir`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing, unreadable, not JSON, or
    /// not a JSON object.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        Self::from_file(&Self::path_in(config_dir))
    }

    /// Load a participant configuration from an explicit file path.
    ///
    /// # Errors
    ///
    /// See [`ParticipantConfig::load`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| ConfigError::ParticipantsUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
        let value: Value =
            serde_json::from_str(&contents).map_err(|source| ConfigError::ParticipantsMalformed {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::from_value(value).ok_or_else(|| ConfigError::ParticipantsNotAnObject {
            path: path.to_path_buf(),
        })?;

        tracing::debug!(
            path = %path.display(),
            participants = config.len(),
            "loaded participant config"
        );
        Ok(config)
    }

    /// Wrap an already-parsed JSON object. Returns `None` for any other value.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(entries) => Some(Self { entries }),
            _ => None,
        }
    }

    /// Configuration entry for `participant`.
    #[must_use]
    pub fn get(&self, participant: &str) -> Option<&Value> {
        self.entries.get(participant)
    }

    #[must_use]
    pub fn contains(&self, participant: &str) -> bool {
        self.entries.contains_key(participant)
    }

    /// Participant ids in file order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path the participant configuration is read from for `config_dir`.
    #[must_use]
    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(PARTICIPANT_CONFIG_FILE)
    }
}
