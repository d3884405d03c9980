use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::driver::driver_input;
use crate::options::Options;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DriverConfig {
    /// Replaces the fixed driver input when set.
    #[serde(default)]
    pub start: Option<u64>,
    /// Also check that the sums agree for every value in `1..=sweep_upto`.
    #[serde(default)]
    pub sweep_upto: u64,
    #[serde(default)]
    pub report: Option<PathBuf>,
}

impl DriverConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: DriverConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Flags win over the file; the start value falls back to the fixed
    /// driver input.
    pub fn merge(&self, options: &Options) -> RunSettings {
        RunSettings {
            start: options.start.or(self.start).unwrap_or_else(driver_input),
            sweep_upto: self.sweep_upto,
            report: options.output.clone().or_else(|| self.report.clone()),
        }
    }
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub start: u64,
    pub sweep_upto: u64,
    pub report: Option<PathBuf>,
}
