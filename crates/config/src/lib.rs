//! Scenario manifest models and loaders for the Lunar Transit Calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Optional absolute-mass overrides for the two primaries.
///
/// When absent, scenarios use the bundled Earth and Moon masses.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct MassOverrides {
    pub earth_mass_kg: f64,
    pub moon_mass_kg: f64,
}

/// A single integration scenario parsed from a manifest file.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub name: String,
    /// Initial state `[x, vx, y, vy, z, vz]` in normalized rotating-frame units.
    pub initial_state: [f64; 6],
    /// Fixed RK4 step size; negative integrates backward.
    pub step_size: f64,
    pub t_start: f64,
    pub t_end: f64,
    /// Number of trajectory rows, inclusive of both endpoints.
    pub samples: usize,
    #[serde(default)]
    pub masses: Option<MassOverrides>,
}

/// Errors that can occur while loading or validating scenario manifests.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("scenario '{name}' is invalid: {reason}")]
    Invalid { name: String, reason: String },
}

impl ScenarioConfig {
    /// Reject manifests that cannot drive a meaningful integration run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_size == 0.0 || !self.step_size.is_finite() {
            return self.invalid("step_size must be finite and nonzero");
        }
        if self.samples < 2 {
            return self.invalid("samples must be at least 2");
        }
        let span = self.t_end - self.t_start;
        if span == 0.0 {
            return self.invalid("t_start and t_end must differ");
        }
        if span.signum() != self.step_size.signum() {
            return self.invalid("step_size sign must match the direction of the time span");
        }
        if let Some(masses) = self.masses {
            if masses.earth_mass_kg <= 0.0 || masses.moon_mass_kg <= 0.0 {
                return self.invalid("mass overrides must be positive");
            }
        }
        Ok(())
    }

    /// Grid spacing implied by the span and sample count.
    ///
    /// Degenerate manifests (fewer than two samples, rejected by
    /// [`validate`](Self::validate)) fall back to the full span instead of
    /// underflowing the divisor.
    pub fn grid_spacing(&self) -> f64 {
        let intervals = self.samples.saturating_sub(1).max(1);
        (self.t_end - self.t_start) / intervals as f64
    }

    fn invalid(&self, reason: &str) -> Result<(), ConfigError> {
        Err(ConfigError::Invalid {
            name: self.name.clone(),
            reason: reason.to_string(),
        })
    }
}

/// Load a single scenario manifest, validated.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, ConfigError> {
    let scenario = read_record::<ScenarioConfig, _>(path)?;
    scenario.validate()?;
    Ok(scenario)
}

/// Load every scenario manifest in a directory, sorted by file name, validated.
pub fn load_scenarios<P: AsRef<Path>>(dir: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir.as_ref())?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .map(|ext| ext == "toml" || ext == "yaml" || ext == "yml")
                .unwrap_or(false)
        })
        .collect();
    entries.sort();

    let mut scenarios = Vec::new();
    for path in entries {
        scenarios.push(load_scenario(&path)?);
    }
    Ok(scenarios)
}

fn read_record<T, P>(path: P) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}
