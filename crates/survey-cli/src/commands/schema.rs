use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `survey3d schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&survey_core::survey_schema(), flags.format)
}
