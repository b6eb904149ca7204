//! Cross-cutting error types for survey3d.
//!
//! Lifecycle errors that only make sense with a manager (`AlreadyActive`,
//! `UnknownParticipant`, ...) live in `survey-manager`. Configuration errors
//! live in `survey-config`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while converting or persisting survey records.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A record is missing one of its required keys.
    #[error("{entity} record is missing required field '{field}'")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// A key is present but its value has the wrong shape.
    #[error("{entity} record has an invalid '{field}' field: {reason}")]
    InvalidField {
        entity: &'static str,
        field: &'static str,
        reason: String,
    },

    /// The record itself is not a JSON object.
    #[error("{entity} record must be a JSON object")]
    NotAnObject { entity: &'static str },

    /// A survey with no projected fields cannot be persisted.
    #[error("Survey for participant '{participant}' cannot be saved without any projected fields")]
    EmptySurvey { participant: String },

    /// Reading or writing a survey file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed outside of record conversion.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
