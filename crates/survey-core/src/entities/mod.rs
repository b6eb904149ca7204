//! Record structs for a survey session.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. The serde
//! field names match the saved survey file layout exactly (`hotSpot`,
//! `startTime`, `projectedFields`, ...). `to_record` / `from_record` convert to
//! and from `serde_json::Value` with per-field error reporting.

mod projected_field;
mod quality;
mod survey;

pub use projected_field::{LEGACY_VERTICES_KEY, ProjectedField};
pub use quality::Quality;
pub use survey::Survey;

/// JSON Schema for a saved survey file.
#[must_use]
pub fn survey_schema() -> serde_json::Value {
    schemars::schema_for!(Survey).into()
}
