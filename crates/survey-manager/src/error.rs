//! Survey manager error types.

use std::path::PathBuf;

use survey_config::ConfigError;
use survey_core::CoreError;
use thiserror::Error;

/// Errors from survey lifecycle operations.
///
/// Lifecycle violations (`AlreadyActive`, `UnknownParticipant`,
/// `InvalidParticipantId`, `NoActiveSurvey`, and a rejected save) leave the
/// manager in the state it was in before the call.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// Participant configuration or settings could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `new_survey` was called while another survey is in progress.
    #[error("Cannot begin new survey; a survey for participant '{participant}' is already ongoing")]
    AlreadyActive { participant: String },

    /// The participant id is not a key in the participant configuration.
    #[error("Cannot begin new survey; participant '{participant}' is not in the participant config")]
    UnknownParticipant { participant: String },

    /// The participant id cannot be used in a file name (empty, or contains
    /// a path separator or `..`).
    #[error("Cannot begin new survey; participant id '{participant}' is not a plain file name")]
    InvalidParticipantId { participant: String },

    /// A survey operation was attempted while no survey is active.
    #[error("No survey is currently active")]
    NoActiveSurvey,

    /// The data directory could not be created.
    #[error("Cannot create data directory {}: {source}", .path.display())]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record conversion or survey file output failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ManagerError {
    /// Whether this is a save rejected because the survey has no projected fields.
    #[must_use]
    pub const fn is_empty_survey(&self) -> bool {
        matches!(self, Self::Core(CoreError::EmptySurvey { .. }))
    }
}
