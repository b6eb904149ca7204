//! Survey output settings.

use serde::{Deserialize, Serialize};

const fn default_create_data_dir() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Create the data directory when the manager starts if it is missing.
    #[serde(default = "default_create_data_dir")]
    pub create_data_dir: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            create_data_dir: default_create_data_dir(),
        }
    }
}
