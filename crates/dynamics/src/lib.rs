//! Circular restricted three-body equations of motion in the rotating
//! Earth-Moon barycentric frame.
//!
//! Lengths are normalized to the Earth-Moon distance and masses to the total
//! system mass, so the two primaries sit at fixed x-offsets `-moon` (Earth)
//! and `+earth` (Moon) and the frame rotates at unit angular rate about z.

use lunar_core::constants::{EARTH_MASS_KG, MOON_MASS_KG};
use lunar_core::state::State;
use thiserror::Error;

/// The primary body whose gravity term became undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primary {
    Earth,
    Moon,
}

impl std::fmt::Display for Primary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Primary::Earth => write!(f, "Earth"),
            Primary::Moon => write!(f, "Moon"),
        }
    }
}

/// Errors raised while evaluating the force model.
#[derive(Debug, Error, PartialEq)]
pub enum DynamicsError {
    /// The spacecraft position coincides with a primary; the gravitational
    /// term divides by zero and the model is undefined there.
    #[error("spacecraft collided with {primary}: zero distance at t = {t}")]
    Singularity { primary: Primary, t: f64 },
    /// A mass fraction constructor was handed a non-positive mass.
    #[error("primary masses must be positive, got earth = {earth_kg} kg, moon = {moon_kg} kg")]
    NonPositiveMass { earth_kg: f64, moon_kg: f64 },
    /// A slice handed to [`ThreeBodySystem::derivative_slice`] was not six wide.
    #[error("state vector has {found} components, expected 6")]
    WrongStateWidth { found: usize },
}

/// Normalized mass fractions of the two primaries.
///
/// Both fractions lie in (0, 1) and sum to 1 by construction; the fractions
/// double as the primaries' x-offsets from the barycenter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassFractions {
    pub earth: f64,
    pub moon: f64,
}

impl MassFractions {
    /// Derive the fractions from two absolute masses in kilograms.
    pub fn from_masses(earth_kg: f64, moon_kg: f64) -> Result<Self, DynamicsError> {
        if earth_kg <= 0.0 || moon_kg <= 0.0 {
            return Err(DynamicsError::NonPositiveMass { earth_kg, moon_kg });
        }
        let total = earth_kg + moon_kg;
        Ok(Self {
            earth: earth_kg / total,
            moon: moon_kg / total,
        })
    }

    /// Fractions for the bundled Earth and Moon masses.
    pub fn earth_moon() -> Self {
        let total = EARTH_MASS_KG + MOON_MASS_KG;
        Self {
            earth: EARTH_MASS_KG / total,
            moon: MOON_MASS_KG / total,
        }
    }
}

/// Stateless force model holding only the two mass fractions.
#[derive(Debug, Clone, Copy)]
pub struct ThreeBodySystem {
    fractions: MassFractions,
}

impl ThreeBodySystem {
    pub fn new(fractions: MassFractions) -> Self {
        Self { fractions }
    }

    /// The model built from the bundled Earth and Moon masses.
    pub fn earth_moon() -> Self {
        Self::new(MassFractions::earth_moon())
    }

    pub fn fractions(&self) -> MassFractions {
        self.fractions
    }

    /// Distance from the spacecraft to Earth's fixed offset position.
    pub fn earth_distance(&self, x: f64, y: f64, z: f64) -> f64 {
        ((x + self.fractions.moon).powi(2) + y * y + z * z).sqrt()
    }

    /// Distance from the spacecraft to the Moon's fixed offset position.
    pub fn moon_distance(&self, x: f64, y: f64, z: f64) -> f64 {
        ((x - self.fractions.earth).powi(2) + y * y + z * z).sqrt()
    }

    /// Instantaneous time-derivative of the state under the restricted
    /// three-body equations of motion.
    ///
    /// Input ordering is `[x, vx, y, vy, z, vz]` and the returned rate vector
    /// is `[vx, ax, vy, ay, vz, az]` to match. The system is
    /// autonomous; `t` only feeds error reporting. The `2*vy`/`-2*vx` terms
    /// are the Coriolis acceleration, the bare `x`/`y` terms the centrifugal
    /// contribution; z sees neither because the rotation axis is z.
    pub fn derivative(&self, state: &State, t: f64) -> Result<State, DynamicsError> {
        let [x, vx, y, vy, z, vz] = *state;
        let MassFractions { earth, moon } = self.fractions;

        let big_r = self.earth_distance(x, y, z);
        let small_r = self.moon_distance(x, y, z);
        if big_r == 0.0 {
            return Err(DynamicsError::Singularity {
                primary: Primary::Earth,
                t,
            });
        }
        if small_r == 0.0 {
            return Err(DynamicsError::Singularity {
                primary: Primary::Moon,
                t,
            });
        }

        let earth_pull = earth / big_r.powi(3);
        let moon_pull = moon / small_r.powi(3);

        let fx1 = earth_pull * (x + moon);
        let fx2 = moon_pull * (x - earth);
        let fy1 = earth_pull * y;
        let fy2 = moon_pull * y;
        let fz1 = earth_pull * z;
        let fz2 = moon_pull * z;

        let ax = x + 2.0 * vy - fx1 - fx2;
        let ay = y - 2.0 * vx - fy1 - fy2;
        let az = -fz1 - fz2;

        Ok([vx, ax, vy, ay, vz, az])
    }

    /// Slice-based wrapper over [`derivative`](Self::derivative) for
    /// dimension-agnostic integrator callbacks; rejects rows that are not
    /// six components wide instead of panicking.
    pub fn derivative_slice(&self, state: &[f64], t: f64) -> Result<Vec<f64>, DynamicsError> {
        let fixed: &State = state
            .try_into()
            .map_err(|_| DynamicsError::WrongStateWidth { found: state.len() })?;
        Ok(self.derivative(fixed, t)?.to_vec())
    }
}
