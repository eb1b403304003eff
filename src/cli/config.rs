use crate::stopwatch::StartTime;
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::{fs::File, path::PathBuf};

/// Steps file, for example:
///
/// ```yaml
/// start_time: 1577836800.0
/// steps:
///   - name: fetch
///     cmd: cargo fetch
///   - cmd: cargo build
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    // kept untyped so integers can be told apart from floats
    pub start_time: Option<Value>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Step {
    pub name: Option<String>,
    pub cmd: String,
}

impl Step {
    /// A step named after its command
    pub fn from_cmd(cmd: impl Into<String>) -> Self {
        Self {
            name: None,
            cmd: cmd.into(),
        }
    }

    /// Lap name for this step, the command when no name is given
    #[must_use]
    pub fn lap_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.cmd)
    }
}

impl Config {
    pub fn new(config_path: PathBuf) -> Result<Self> {
        let file = File::open(&config_path)
            .with_context(|| format!("Failed to open config file: {}", config_path.display()))?;

        let config: Self = serde_yaml::from_reader(file).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Start time with the strict float check applied
    pub fn start_time(&self) -> Result<Option<f64>> {
        self.start_time
            .as_ref()
            .map(|value| {
                StartTime::try_from(value)
                    .map(StartTime::as_f64)
                    .context("Invalid start_time in config file")
            })
            .transpose()
    }
}
