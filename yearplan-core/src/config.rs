//! Global yearplan configuration.

use std::path::PathBuf;

use ::config::{Config, File};
use serde::Deserialize;

use crate::error::{PlannerError, PlannerResult};

fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("yearplan/events.json")
}

/// Global configuration at ~/.config/yearplan/config.toml
///
/// The config file is optional; without one the store lives at the
/// platform data dir (`~/.local/share/yearplan/events.json` on Linux).
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    /// Where the serialized store is kept. Tilde is expanded.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl GlobalConfig {
    pub fn config_path() -> PlannerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlannerError::Config("Could not determine config directory".into()))?
            .join("yearplan");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> PlannerResult<Self> {
        let config_path = Self::config_path()?;

        let config: GlobalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| PlannerError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PlannerError::Config(e.to_string()))?;

        Ok(config)
    }

    /// The data-file path with tilde expanded.
    pub fn data_file(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }
}
