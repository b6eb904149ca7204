use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::entities::{ProjectedField, Quality};
use crate::errors::CoreError;
use crate::record::RecordReader;
use crate::timefmt;

/// One participant session: metadata plus the projected fields drawn during it.
///
/// `date` and `start_time` are stamped when the survey begins, `end_time` when
/// it is finalized. Fields are append-only while the survey is active.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub participant: String,
    /// Snapshot of the participant's configuration entry at survey start.
    pub config: Value,
    #[serde(with = "timefmt::date")]
    #[schemars(with = "String")]
    pub date: NaiveDate,
    #[serde(with = "timefmt::time")]
    #[schemars(with = "String")]
    pub start_time: NaiveTime,
    #[serde(with = "timefmt::optional_time")]
    #[schemars(with = "String")]
    pub end_time: Option<NaiveTime>,
    pub projected_fields: Vec<ProjectedField>,
}

impl Survey {
    pub const ENTITY: &'static str = "Survey";

    /// Create a survey that started at `started_at`.
    #[must_use]
    pub fn new(participant: impl Into<String>, config: Value, started_at: NaiveDateTime) -> Self {
        let started_at = timefmt::truncate(started_at);
        Self {
            participant: participant.into(),
            config,
            date: started_at.date(),
            start_time: started_at.time(),
            end_time: None,
            projected_fields: Vec::new(),
        }
    }

    /// Create a survey and stamp it with [`Survey::mark_start`].
    #[must_use]
    pub fn begin(participant: impl Into<String>, config: Value) -> Self {
        let mut survey = Self::new(participant, config, NaiveDateTime::default());
        survey.mark_start();
        survey
    }

    /// Whether `participant` can be used as the leading part of a file name.
    ///
    /// Path separators and `..` are refused so a saved survey always lands
    /// inside its directory.
    #[must_use]
    pub fn is_valid_participant_id(participant: &str) -> bool {
        !participant.is_empty()
            && !participant.contains(['/', '\\'])
            && !participant.contains("..")
    }

    /// Set `date` and `start_time` from the local wall clock.
    ///
    /// Calling this again overwrites the previous values.
    pub fn mark_start(&mut self) {
        self.mark_start_at(timefmt::now());
    }

    pub fn mark_start_at(&mut self, at: NaiveDateTime) {
        let at = timefmt::truncate(at);
        self.date = at.date();
        self.start_time = at.time();
    }

    /// Set `end_time` from the local wall clock.
    pub fn mark_end(&mut self) {
        self.mark_end_at(timefmt::now().time());
    }

    pub fn mark_end_at(&mut self, at: NaiveTime) {
        self.end_time = Some(at.with_nanosecond(0).unwrap_or(at));
    }

    pub fn add_projected_field(&mut self, field: ProjectedField) {
        self.projected_fields.push(field);
    }

    #[must_use]
    pub const fn is_finalized(&self) -> bool {
        self.end_time.is_some()
    }

    /// File name the survey is saved under: `{participant}_{date}_{startTime}.json`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}_{}.json",
            self.participant,
            timefmt::format_date(self.date),
            timefmt::format_time(self.start_time)
        )
    }

    /// Write the survey as 4-space indented JSON into `directory`.
    ///
    /// An existing file with the same name is overwritten. The write is not
    /// atomic.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EmptySurvey` (and writes nothing) if the survey has
    /// no projected fields, `CoreError::InvalidField` (and writes nothing) if
    /// the participant id is not a safe file name or a quality rating is not
    /// finite, or `CoreError::Io` if the file cannot be written.
    pub fn save(&self, directory: &Path) -> Result<PathBuf, CoreError> {
        if self.projected_fields.is_empty() {
            tracing::warn!(
                participant = %self.participant,
                "survey cannot be saved without any projected fields"
            );
            return Err(CoreError::EmptySurvey {
                participant: self.participant.clone(),
            });
        }
        if !Self::is_valid_participant_id(&self.participant) {
            tracing::warn!(
                participant = %self.participant,
                "survey cannot be saved: participant id is not a plain file name"
            );
            return Err(CoreError::InvalidField {
                entity: Self::ENTITY,
                field: "participant",
                reason: "must not be empty or contain '/', '\\' or '..'".into(),
            });
        }
        if let Err(err) = self
            .projected_fields
            .iter()
            .flat_map(|field| &field.qualities)
            .try_for_each(Quality::check_finite)
        {
            tracing::warn!(
                participant = %self.participant,
                error = %err,
                "survey cannot be saved: non-finite quality rating"
            );
            return Err(err);
        }

        let path = directory.join(self.file_name());
        tracing::info!(
            participant = %self.participant,
            fields = self.projected_fields.len(),
            path = %path.display(),
            "saving survey"
        );

        let bytes = to_pretty_json(&self.to_record())?;
        std::fs::write(&path, bytes).map_err(|source| CoreError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Read a previously saved survey file.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Io` if the file cannot be read, `CoreError::Json` if
    /// it is not JSON, and the `from_record` errors otherwise.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let record: Value = serde_json::from_str(&contents)?;
        Self::from_record(&record)
    }

    #[must_use]
    pub fn to_record(&self) -> Value {
        json!({
            "participant": self.participant,
            "config": self.config,
            "date": timefmt::format_date(self.date),
            "startTime": timefmt::format_time(self.start_time),
            "endTime": self.end_time.map(timefmt::format_time).unwrap_or_default(),
            "projectedFields": self
                .projected_fields
                .iter()
                .map(ProjectedField::to_record)
                .collect::<Vec<_>>(),
        })
    }

    /// Build a `Survey` from a JSON object.
    ///
    /// An empty `endTime` reads back as an unfinalized survey.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingField` if `participant`, `config`, `date`,
    /// `startTime`, `endTime`, or `projectedFields` is absent, or if a nested
    /// projected field or quality is missing a key. Unparsable dates and times
    /// are `CoreError::InvalidField`.
    pub fn from_record(record: &Value) -> Result<Self, CoreError> {
        let reader = RecordReader::new(Self::ENTITY, record)?;
        let participant = reader.parse("participant")?;
        let config = reader.value("config", &[])?.clone();
        let date = reader.convert("date", timefmt::parse_date)?;
        let start_time = reader.convert("startTime", timefmt::parse_time)?;
        let end_time = reader.convert("endTime", |raw| {
            if raw.is_empty() {
                Ok(None)
            } else {
                timefmt::parse_time(raw).map(Some)
            }
        })?;
        let projected_fields = reader
            .array("projectedFields")?
            .iter()
            .map(ProjectedField::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            participant,
            config,
            date,
            start_time,
            end_time,
            projected_fields,
        })
    }
}

/// Render `value` as JSON indented with four spaces.
fn to_pretty_json(value: &Value) -> Result<Vec<u8>, CoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}
