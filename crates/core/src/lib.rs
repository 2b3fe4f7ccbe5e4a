//! Physical constants and shared primitives for the Lunar Transit Calculator workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Mass of the Earth (kg).
    pub const EARTH_MASS_KG: f64 = 5.97e24;
    /// Mass of the Moon (kg).
    pub const MOON_MASS_KG: f64 = 7.35e22;
    /// Newtonian constant of gravitation (m³ kg⁻¹ s⁻²).
    pub const GRAVITATIONAL_CONSTANT: f64 = 6.6743e-11;
    /// Mean Earth-Moon distance (km); the unit length of the rotating frame.
    pub const EARTH_MOON_DISTANCE_KM: f64 = 384_400.0;
    /// Earth diameter (km).
    pub const EARTH_DIAMETER_KM: f64 = 6_371.0;
    /// Radial position of Earth's surface in normalized frame units.
    pub const POSITION_SURFACE: f64 = EARTH_DIAMETER_KM / EARTH_MOON_DISTANCE_KM;
    /// Radial position of a 350 km parking orbit in normalized frame units.
    pub const POSITION_STABLE_ORBIT: f64 = (EARTH_DIAMETER_KM + 350.0) / EARTH_MOON_DISTANCE_KM;
}

/// State-vector conventions shared by the dynamics and front-end crates.
pub mod state {
    /// Spacecraft state in the rotating barycentric frame: `[x, vx, y, vy, z, vz]`.
    ///
    /// Positions are in Earth-Moon distances, velocities in distance per
    /// rotation-angle unit; nothing dimensional survives normalization.
    pub type State = [f64; 6];
}
