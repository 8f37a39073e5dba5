//! User-adjustable simulation parameters
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant and spawn mass (read fresh every tick),
//! - fixed step size and run length for headless runs,
//! - radius scale for newly spawned particles

use crate::simulation::particle::RADIUS_SCALE_FACTOR;

pub const DEFAULT_GRAVITATIONAL_CONSTANT: f64 = 1.0;
pub const DEFAULT_SPAWN_MASS: f64 = 1.0;

/// Where the sandbox reads its live knobs from each tick.
///
/// An interactive front end implements this over its sliders; headless runs
/// use [`Parameters`].
pub trait ParameterSource {
    fn gravitational_constant(&self) -> f64;
    fn spawn_mass(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub gravitational_constant: f64,
    pub spawn_mass: f64,
    pub time_step: f64, // fixed dt per tick
    pub steps: u64, // ticks to run
    pub radius_scale: f64, // k in k * cbrt(m)
    pub report_every: u64, // log cadence, 0 = only at the end
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
            spawn_mass: DEFAULT_SPAWN_MASS,
            time_step: 1.0 / 60.0,
            steps: 600,
            radius_scale: RADIUS_SCALE_FACTOR,
            report_every: 60,
        }
    }
}

impl ParameterSource for Parameters {
    fn gravitational_constant(&self) -> f64 {
        self.gravitational_constant
    }

    fn spawn_mass(&self) -> f64 {
        self.spawn_mass
    }
}
