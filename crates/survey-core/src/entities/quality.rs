use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::errors::CoreError;
use crate::record::RecordReader;

/// A single sensation measurement attached to a projected field.
///
/// `depth` and `kind` are categorical labels chosen by the front-end (e.g.
/// `"deep"`, `"sharp"`); they are not validated here.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Quality {
    pub intensity: f64,
    pub naturalness: f64,
    pub pain: f64,
    pub depth: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Quality {
    pub const ENTITY: &'static str = "Quality";

    #[must_use]
    pub fn to_record(&self) -> Value {
        json!({
            "intensity": self.intensity,
            "naturalness": self.naturalness,
            "pain": self.pain,
            "depth": self.depth,
            "type": self.kind,
        })
    }

    /// JSON has no NaN or infinity, so a rating must be finite to be written.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidField` naming the first non-finite rating.
    pub fn check_finite(&self) -> Result<(), CoreError> {
        let ratings = [
            ("intensity", self.intensity),
            ("naturalness", self.naturalness),
            ("pain", self.pain),
        ];
        for (field, value) in ratings {
            if !value.is_finite() {
                return Err(CoreError::InvalidField {
                    entity: Self::ENTITY,
                    field,
                    reason: format!("{value} is not a finite number"),
                });
            }
        }
        Ok(())
    }

    /// Build a `Quality` from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingField` if any of the five keys is absent and
    /// `CoreError::InvalidField` if one holds the wrong type.
    pub fn from_record(record: &Value) -> Result<Self, CoreError> {
        let reader = RecordReader::new(Self::ENTITY, record)?;
        Ok(Self {
            intensity: reader.parse("intensity")?,
            naturalness: reader.parse("naturalness")?,
            pain: reader.parse("pain")?,
            depth: reader.parse("depth")?,
            kind: reader.parse("type")?,
        })
    }
}
