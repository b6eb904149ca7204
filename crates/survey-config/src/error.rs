//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// The participant configuration file is missing or unreadable.
    #[error("Cannot read participant config at {}: {source}", .path.display())]
    ParticipantsUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The participant configuration file is not valid JSON.
    #[error("Participant config at {} is not valid JSON: {source}", .path.display())]
    ParticipantsMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The participant configuration file is JSON but not an object.
    #[error("Participant config at {} must be a JSON object keyed by participant id", .path.display())]
    ParticipantsNotAnObject { path: PathBuf },

    /// A settings field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
