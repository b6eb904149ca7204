use std::path::Path;

use anyhow::{Context, bail};
use serde_json::Value;
use survey_config::SurveySettings;
use survey_core::ProjectedField;
use survey_core::responses::RecordResponse;
use survey_manager::SurveyManager;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RecordArgs;
use crate::output::output;

/// Handle `survey3d record`.
pub fn handle(args: &RecordArgs, settings: &SurveySettings, flags: &GlobalFlags) -> anyhow::Result<()> {
    let fields = read_fields(Path::new(&args.fields))?;
    let mut manager =
        SurveyManager::from_settings(settings).context("failed to initialize survey manager")?;
    let response = record(&mut manager, &args.participant, fields)?;
    output(&response, flags.format)
}

/// Run one survey through the manager: start, append `fields`, save.
fn record(
    manager: &mut SurveyManager,
    participant: &str,
    fields: Vec<ProjectedField>,
) -> anyhow::Result<RecordResponse> {
    manager.new_survey(participant)?;
    let projected_fields = fields.len();
    for field in fields {
        manager.add_projected_field(field)?;
    }

    let path = manager.save_survey()?;
    Ok(RecordResponse {
        participant: participant.to_string(),
        path: path.display().to_string(),
        projected_fields,
    })
}

/// Read a JSON array of projected field records.
fn read_fields(path: &Path) -> anyhow::Result<Vec<ProjectedField>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read fields file {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("fields file {} is not valid JSON", path.display()))?;

    let Value::Array(records) = value else {
        bail!(
            "fields file {} must contain a JSON array of projected fields",
            path.display()
        );
    };

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            ProjectedField::from_record(record)
                .with_context(|| format!("invalid projected field at index {index}"))
        })
        .collect()
}
