use anyhow::Context;
use survey_config::{ParticipantConfig, SurveySettings};
use survey_core::responses::ParticipantsResponse;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `survey3d participants`.
pub fn handle(settings: &SurveySettings, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = ParticipantConfig::load(&settings.paths.config_dir)
        .context("failed to load participant config")?;
    output(
        &ParticipantsResponse {
            participants: config.ids().map(str::to_string).collect(),
        },
        flags.format,
    )
}
