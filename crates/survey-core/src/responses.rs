//! CLI response types returned as JSON by `survey3d` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Survey;
use crate::timefmt;

/// Response from `survey3d participants`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ParticipantsResponse {
    pub participants: Vec<String>,
}

/// Response from `survey3d record`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecordResponse {
    pub participant: String,
    pub path: String,
    pub projected_fields: usize,
}

/// One projected field in a [`SurveySummary`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FieldSummary {
    pub model: String,
    pub name: String,
    pub vertices: usize,
    pub qualities: usize,
}

/// Response from `survey3d show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SurveySummary {
    pub participant: String,
    pub date: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub fields: Vec<FieldSummary>,
}

impl From<&Survey> for SurveySummary {
    fn from(survey: &Survey) -> Self {
        Self {
            participant: survey.participant.clone(),
            date: timefmt::format_date(survey.date),
            start_time: timefmt::format_time(survey.start_time),
            end_time: survey.end_time.map(timefmt::format_time),
            fields: survey
                .projected_fields
                .iter()
                .map(|field| FieldSummary {
                    model: field.model.clone(),
                    name: field.name.clone(),
                    vertices: field.vertices.len(),
                    qualities: field.qualities.len(),
                })
                .collect(),
        }
    }
}
