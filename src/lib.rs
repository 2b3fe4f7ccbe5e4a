//! Core physics and solver logic lives here.
//!
//! The force model, integrator, and supporting crates are re-exported under
//! stable module names so front-ends (CLI, plotting) depend on one crate.

pub use lunar_config as config;
pub use lunar_core as core;
pub use lunar_dynamics as dynamics;
pub use lunar_export as export;
pub use lunar_integrator as integrator;

use lunar_config::ScenarioConfig;
use lunar_dynamics::{DynamicsError, MassFractions, ThreeBodySystem};
use lunar_integrator::{IntegrationError, integrate, time_grid};
use thiserror::Error;

/// Errors surfaced by [`run_scenario`].
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Dynamics(#[from] DynamicsError),
    #[error(transparent)]
    Integration(#[from] IntegrationError<DynamicsError>),
}

/// A completed integration run: the time grid, one state row per grid entry,
/// and the system that produced it.
#[derive(Debug, Clone)]
pub struct TrajectoryRun {
    pub system: ThreeBodySystem,
    pub times: Vec<f64>,
    pub states: Vec<Vec<f64>>,
}

/// Integrate a validated scenario end to end.
///
/// The grid spacing is derived from the scenario span and sample count; the
/// scenario's `step_size` is honored as-is even when it differs from that
/// spacing (see `lunar_integrator::integrate` for the fixed-step semantics).
pub fn run_scenario(scenario: &ScenarioConfig) -> Result<TrajectoryRun, RunError> {
    let system = match scenario.masses {
        Some(masses) => ThreeBodySystem::new(MassFractions::from_masses(
            masses.earth_mass_kg,
            masses.moon_mass_kg,
        )?),
        None => ThreeBodySystem::earth_moon(),
    };

    let times = time_grid(scenario.t_start, scenario.t_end, scenario.samples);
    let states = integrate(
        |state: &[f64], t| system.derivative_slice(state, t),
        &scenario.initial_state,
        scenario.step_size,
        &times,
    )?;

    Ok(TrajectoryRun {
        system,
        times,
        states,
    })
}

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
