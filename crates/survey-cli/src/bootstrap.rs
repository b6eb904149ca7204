use std::path::PathBuf;

use anyhow::Context;
use survey_config::SurveySettings;

use crate::cli::GlobalFlags;

/// Load layered settings, then apply `--config-dir` / `--data-dir` overrides.
pub fn load_settings(flags: &GlobalFlags) -> anyhow::Result<SurveySettings> {
    let settings = SurveySettings::load_with_dotenv().context("failed to load survey3d settings")?;
    Ok(apply_overrides(settings, flags))
}

fn apply_overrides(mut settings: SurveySettings, flags: &GlobalFlags) -> SurveySettings {
    if let Some(dir) = &flags.config_dir {
        settings.paths.config_dir = PathBuf::from(dir);
    }
    if let Some(dir) = &flags.data_dir {
        settings.paths.data_dir = PathBuf::from(dir);
    }
    tracing::debug!(
        config_dir = %settings.paths.config_dir.display(),
        data_dir = %settings.paths.data_dir.display(),
        "resolved survey directories"
    );
    settings
}
