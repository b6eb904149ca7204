use std::path::Path;

use anyhow::Context;
use survey_core::Survey;
use survey_core::responses::SurveySummary;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::output::output;

/// Handle `survey3d show`.
pub fn handle(args: &ShowArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let survey = Survey::load(Path::new(&args.path))
        .with_context(|| format!("failed to load survey file {}", args.path))?;

    if args.full {
        output(&survey.to_record(), flags.format)
    } else {
        output(&SurveySummary::from(&survey), flags.format)
    }
}
