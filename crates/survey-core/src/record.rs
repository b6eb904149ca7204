//! Field-by-field access to JSON records.
//!
//! `from_record` implementations read each key through a [`RecordReader`] so
//! that a missing key is reported as `CoreError::MissingField` and a key of the
//! wrong shape as `CoreError::InvalidField`, naming the entity and key. Nothing
//! is built until every key has been read, so conversion is all-or-nothing.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::CoreError;

pub(crate) struct RecordReader<'a> {
    entity: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> RecordReader<'a> {
    pub(crate) fn new(entity: &'static str, record: &'a Value) -> Result<Self, CoreError> {
        let map = record
            .as_object()
            .ok_or(CoreError::NotAnObject { entity })?;
        Ok(Self { entity, map })
    }

    /// Raw value for `field`, falling back to each of `aliases` in order.
    pub(crate) fn value(
        &self,
        field: &'static str,
        aliases: &[&str],
    ) -> Result<&'a Value, CoreError> {
        std::iter::once(field)
            .chain(aliases.iter().copied())
            .find_map(|key| self.map.get(key))
            .ok_or(CoreError::MissingField {
                entity: self.entity,
                field,
            })
    }

    /// Deserialize `field` into `T`.
    pub(crate) fn parse<T: DeserializeOwned>(&self, field: &'static str) -> Result<T, CoreError> {
        self.parse_with_aliases(field, &[])
    }

    pub(crate) fn parse_with_aliases<T: DeserializeOwned>(
        &self,
        field: &'static str,
        aliases: &[&str],
    ) -> Result<T, CoreError> {
        let value = self.value(field, aliases)?;
        serde_json::from_value(value.clone()).map_err(|e| self.invalid(field, e.to_string()))
    }

    /// The array stored under `field`.
    pub(crate) fn array(&self, field: &'static str) -> Result<&'a Vec<Value>, CoreError> {
        self.value(field, &[])?
            .as_array()
            .ok_or_else(|| self.invalid(field, "expected an array".to_string()))
    }

    /// The string stored under `field`, converted with `convert`.
    pub(crate) fn convert<T, E: std::fmt::Display>(
        &self,
        field: &'static str,
        convert: impl FnOnce(&str) -> Result<T, E>,
    ) -> Result<T, CoreError> {
        let raw: String = self.parse(field)?;
        convert(&raw).map_err(|e| self.invalid(field, format!("'{raw}': {e}")))
    }

    pub(crate) fn invalid(&self, field: &'static str, reason: String) -> CoreError {
        CoreError::InvalidField {
            entity: self.entity,
            field,
            reason,
        }
    }
}
