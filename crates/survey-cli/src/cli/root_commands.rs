use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List participant ids from the participant config.
    Participants,
    /// Run a survey for a participant from a file of projected fields and save it.
    Record(RecordArgs),
    /// Summarize a saved survey file.
    Show(ShowArgs),
    /// Dump the JSON schema of a saved survey.
    Schema,
}

/// Arguments for `survey3d record`.
#[derive(Clone, Debug, Args)]
pub struct RecordArgs {
    /// Participant id (must be a key in participant_config.json).
    #[arg(long)]
    pub participant: String,
    /// JSON file holding an array of projected field records.
    #[arg(long)]
    pub fields: String,
}

/// Arguments for `survey3d show`.
#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Path to a saved survey file.
    pub path: String,
    /// Print the full survey record instead of a summary.
    #[arg(long)]
    pub full: bool,
}
