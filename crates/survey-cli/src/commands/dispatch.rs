use survey_config::SurveySettings;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: Commands,
    settings: &SurveySettings,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Participants => commands::participants::handle(settings, flags),
        Commands::Record(args) => commands::record::handle(&args, settings, flags),
        Commands::Show(args) => commands::show::handle(&args, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
