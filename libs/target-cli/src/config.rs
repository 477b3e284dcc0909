//! TOML parameter files.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use target_geometry::TargetParameters;

/// Top-level parameter file.
#[derive(Debug, Default, Deserialize)]
pub struct JobConfig {
    /// Target dimensions and material; missing keys keep their defaults.
    #[serde(default)]
    pub target: TargetParameters,
    /// Single-isotope materials defined before the target material is set.
    #[serde(default)]
    pub isotope: Vec<IsotopeConfig>,
}

/// A `[[isotope]]` table.
#[derive(Debug, Deserialize)]
pub struct IsotopeConfig {
    /// Material name to register.
    pub name: String,
    /// Isotope symbol, e.g. "O18".
    pub symbol: String,
    /// Density in g/cm3.
    pub density: f64,
    /// Atomic number.
    pub z: u32,
    /// Mass number.
    pub a: u32,
}

/// Loads and parses a parameter file.
pub fn load_config(path: &Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: JobConfig =
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

/// Loads `path` when given, the defaults otherwise.
pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<JobConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(JobConfig::default()),
    }
}
