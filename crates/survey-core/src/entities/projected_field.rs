use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::entities::Quality;
use crate::errors::CoreError;
use crate::record::RecordReader;

/// Misspelled vertices key written by earlier survey tooling. Accepted on read,
/// never written.
pub const LEGACY_VERTICES_KEY: &str = "verices";

/// A region on a 3D model annotated with one or more sensation qualities.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedField {
    /// Identifier of the 3D model the field was drawn on.
    pub model: String,
    pub name: String,
    /// Mesh vertex indices belonging to the region.
    #[serde(alias = "verices")]
    pub vertices: Vec<u32>,
    /// Focal point of the field.
    pub hot_spot: Vec<i64>,
    /// Qualities in entry order.
    pub qualities: Vec<Quality>,
}

impl ProjectedField {
    pub const ENTITY: &'static str = "ProjectedField";

    #[must_use]
    pub fn to_record(&self) -> Value {
        json!({
            "model": self.model,
            "name": self.name,
            "vertices": self.vertices,
            "hotSpot": self.hot_spot,
            "qualities": self.qualities.iter().map(Quality::to_record).collect::<Vec<_>>(),
        })
    }

    /// Build a `ProjectedField` from a JSON object.
    ///
    /// Each entry of `qualities` goes through [`Quality::from_record`]; the
    /// first failing entry aborts the whole conversion.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingField` if `model`, `name`, `vertices`,
    /// `hotSpot`, or `qualities` is absent (or absent inside a quality).
    pub fn from_record(record: &Value) -> Result<Self, CoreError> {
        let reader = RecordReader::new(Self::ENTITY, record)?;
        let model = reader.parse("model")?;
        let name = reader.parse("name")?;
        let vertices = reader.parse_with_aliases("vertices", &[LEGACY_VERTICES_KEY])?;
        let hot_spot = reader.parse("hotSpot")?;
        let qualities = reader
            .array("qualities")?
            .iter()
            .map(Quality::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            model,
            name,
            vertices,
            hot_spot,
            qualities,
        })
    }
}
