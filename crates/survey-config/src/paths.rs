//! Directory settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_config_dir() -> PathBuf {
    PathBuf::from("config")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Directory holding `participant_config.json`.
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,

    /// Directory survey files are written to.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            data_dir: default_data_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_relative() {
        let paths = PathsConfig::default();
        assert_eq!(paths.config_dir, PathBuf::from("config"));
        assert_eq!(paths.data_dir, PathBuf::from("data"));
    }
}
