//! # survey-manager
//!
//! Owns at most one active [`Survey`] and moves it through its lifecycle:
//!
//! ```text
//! idle ──new_survey──▶ active ──save_survey (ok)──▶ idle
//!                        │  ▲
//!                        │  └── save_survey (empty / io error)
//!                        └──discard_survey──▶ idle
//! ```
//!
//! Every transition is checked against [`SurveyState::allowed_next_states`]
//! before anything is mutated, so a rejected call leaves the manager exactly
//! as it was.

mod error;

pub use error::ManagerError;

use std::path::{Path, PathBuf};

use survey_config::{ParticipantConfig, SurveySettings};
use survey_core::enums::SurveyState;
use survey_core::{ProjectedField, Survey};

#[derive(Debug)]
pub struct SurveyManager {
    participants: ParticipantConfig,
    data_dir: PathBuf,
    survey: Option<Survey>,
}

impl SurveyManager {
    /// Create a manager reading `participant_config.json` from `config_dir`
    /// and writing surveys into `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns `ManagerError::Config` if the participant configuration is
    /// missing or malformed.
    pub fn new(config_dir: &Path, data_dir: impl Into<PathBuf>) -> Result<Self, ManagerError> {
        let participants = ParticipantConfig::load(config_dir)?;
        Ok(Self::with_participants(participants, data_dir))
    }

    /// Create a manager from loaded settings.
    ///
    /// Creates the data directory if `output.create_data_dir` is set.
    ///
    /// # Errors
    ///
    /// Returns `ManagerError::Config` if the participant configuration cannot
    /// be loaded, or `ManagerError::DataDir` if the data directory cannot be
    /// created.
    pub fn from_settings(settings: &SurveySettings) -> Result<Self, ManagerError> {
        let data_dir = settings.paths.data_dir.clone();
        if settings.output.create_data_dir {
            std::fs::create_dir_all(&data_dir).map_err(|source| ManagerError::DataDir {
                path: data_dir.clone(),
                source,
            })?;
        }
        Self::new(&settings.paths.config_dir, data_dir)
    }

    /// Create a manager around an already-loaded participant configuration.
    #[must_use]
    pub fn with_participants(participants: ParticipantConfig, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            participants,
            data_dir: data_dir.into(),
            survey: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> SurveyState {
        if self.survey.is_some() {
            SurveyState::Active
        } else {
            SurveyState::Idle
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.survey.is_some()
    }

    /// The survey in progress, if any.
    #[must_use]
    pub const fn active(&self) -> Option<&Survey> {
        self.survey.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut Survey> {
        self.survey.as_mut()
    }

    #[must_use]
    pub const fn participants(&self) -> &ParticipantConfig {
        &self.participants
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Begin a survey for `participant`, stamped by `Survey::mark_start`.
    ///
    /// # Errors
    ///
    /// Returns `ManagerError::AlreadyActive` if a survey is in progress (it is
    /// left untouched), `ManagerError::UnknownParticipant` if the id is not
    /// configured, and `ManagerError::InvalidParticipantId` if it would not
    /// stay inside the data directory as a file name.
    pub fn new_survey(&mut self, participant: &str) -> Result<&mut Survey, ManagerError> {
        self.check_transition(SurveyState::Active)?;

        let Some(config) = self.participants.get(participant) else {
            tracing::warn!(participant, "cannot begin survey: unknown participant");
            return Err(ManagerError::UnknownParticipant {
                participant: participant.to_string(),
            });
        };

        if !Survey::is_valid_participant_id(participant) {
            tracing::warn!(
                participant,
                "cannot begin survey: participant id is not a plain file name"
            );
            return Err(ManagerError::InvalidParticipantId {
                participant: participant.to_string(),
            });
        }

        let survey = Survey::begin(participant, config.clone());
        tracing::info!(
            participant,
            file = %survey.file_name(),
            "survey started"
        );
        Ok(self.survey.insert(survey))
    }

    /// Append a projected field to the active survey.
    ///
    /// # Errors
    ///
    /// Returns `ManagerError::NoActiveSurvey` when idle.
    pub fn add_projected_field(&mut self, field: ProjectedField) -> Result<(), ManagerError> {
        let survey = self.survey.as_mut().ok_or(ManagerError::NoActiveSurvey)?;
        tracing::debug!(
            participant = %survey.participant,
            field = %field.name,
            model = %field.model,
            "projected field added"
        );
        survey.add_projected_field(field);
        Ok(())
    }

    /// Stamp the end time on the active survey and write it to the data
    /// directory. On success the manager becomes idle and the written path is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `ManagerError::NoActiveSurvey` when idle. If the survey has no
    /// projected fields (`CoreError::EmptySurvey`) or the write fails, the
    /// survey stays active so fields can be added and the save retried.
    pub fn save_survey(&mut self) -> Result<PathBuf, ManagerError> {
        self.check_transition(SurveyState::Idle)?;
        let Some(survey) = self.survey.as_mut() else {
            return Err(ManagerError::NoActiveSurvey);
        };

        survey.mark_end();
        let path = survey.save(&self.data_dir)?;

        tracing::info!(
            participant = %survey.participant,
            path = %path.display(),
            "survey saved"
        );
        self.survey = None;
        Ok(path)
    }

    /// Drop the active survey without writing it.
    ///
    /// # Errors
    ///
    /// Returns `ManagerError::NoActiveSurvey` when idle.
    pub fn discard_survey(&mut self) -> Result<Survey, ManagerError> {
        self.check_transition(SurveyState::Idle)?;
        let survey = self.survey.take().ok_or(ManagerError::NoActiveSurvey)?;
        tracing::info!(participant = %survey.participant, "survey discarded");
        Ok(survey)
    }

    fn check_transition(&self, next: SurveyState) -> Result<(), ManagerError> {
        let current = self.state();
        if current.can_transition_to(next) {
            return Ok(());
        }

        tracing::warn!(%current, %next, "rejected survey state transition");
        match &self.survey {
            Some(active) => Err(ManagerError::AlreadyActive {
                participant: active.participant.clone(),
            }),
            None => Err(ManagerError::NoActiveSurvey),
        }
    }
}
