//! # survey-core
//!
//! Record types, time formats, and error types for survey3d.
//!
//! This crate provides the foundational types shared across all survey3d crates:
//! - Record structs for a survey session (`Survey`, `ProjectedField`, `Quality`)
//! - Record conversion to and from `serde_json::Value`
//! - Date and time formats used in saved survey files
//! - The `SurveyState` lifecycle enum
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
mod record;
pub mod responses;
pub mod timefmt;

pub use entities::{ProjectedField, Quality, Survey, survey_schema};
pub use errors::CoreError;
