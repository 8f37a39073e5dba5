//! The physics engine and its step loop
//!
//! [`PhysicsEngine::step`] runs three phases, each one finished before the
//! next starts:
//!
//! 1. gravity from a snapshot of current positions, then semi-implicit Euler
//!    integration of every particle;
//! 2. contact resolution over every unordered pair (see [`collision`]);
//! 3. removal of particles whose mass reached zero.
//!
//! The gravitational constant is passed into every step. The engine itself
//! only owns the fixed material constants and the report of the last step.
//!
//! [`collision`]: crate::simulation::collision

use thiserror::Error;
use tracing::debug;

use crate::simulation::collision::resolve_collisions;
use crate::simulation::forces::{Force, ForceStats, NewtonianGravity};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::particle::Particle;
use crate::simulation::vector::NVec2;

/// Coefficient of restitution for contact impulses.
pub const RESTITUTION: f64 = 0.8;
/// Fraction of the lighter particle's mass moved per contact.
pub const ABSORPTION_RATE: f64 = 0.25;

/// Fixed physical constants of one engine instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConstants {
    pub restitution: f64,
    pub absorption_rate: f64,
    /// Length added in quadrature to every separation in the gravity law.
    /// Zero keeps the plain inverse-square law.
    pub softening: f64,
}

impl Default for EngineConstants {
    fn default() -> Self {
        Self {
            restitution: RESTITUTION,
            absorption_rate: ABSORPTION_RATE,
            softening: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EngineError {
    #[error("restitution must be within 0..=1, got {0}")]
    Restitution(f64),
    #[error("absorption rate must be within 0..=1, got {0}")]
    AbsorptionRate(f64),
    #[error("softening must be finite and non-negative, got {0}")]
    Softening(f64),
}

/// A step was refused. The population has not been touched.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StepError {
    #[error("gravitational constant must be finite and non-negative, got {0}")]
    GravitationalConstant(f64),
    #[error("time step must be finite and non-negative, got {0}")]
    TimeStep(f64),
}

/// What happened during one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub contacts: usize,
    pub impulses: usize,
    pub separating: usize,
    pub coincident_pairs: usize,
    pub degenerate_normals: usize,
    pub pruned: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PhysicsEngine {
    constants: EngineConstants,
    last_report: StepReport,
}

impl PhysicsEngine {
    pub fn new(constants: EngineConstants) -> Result<Self, EngineError> {
        let EngineConstants {
            restitution,
            absorption_rate,
            softening,
        } = constants;

        if !(0.0..=1.0).contains(&restitution) {
            return Err(EngineError::Restitution(restitution));
        }
        if !(0.0..=1.0).contains(&absorption_rate) {
            return Err(EngineError::AbsorptionRate(absorption_rate));
        }
        if !(softening.is_finite() && softening >= 0.0) {
            return Err(EngineError::Softening(softening));
        }

        Ok(Self {
            constants,
            last_report: StepReport::default(),
        })
    }

    pub fn constants(&self) -> &EngineConstants {
        &self.constants
    }

    pub fn last_report(&self) -> StepReport {
        self.last_report
    }

    /// Advance `particles` by `delta_time`.
    ///
    /// Arguments are checked before anything is mutated; on error the
    /// population is exactly as it was. On success dead particles have been
    /// removed from `particles`.
    pub fn step(
        &mut self,
        particles: &mut Vec<Particle>,
        gravitational_constant: f64,
        delta_time: f64,
    ) -> Result<(), StepError> {
        if !(gravitational_constant.is_finite() && gravitational_constant >= 0.0) {
            return Err(StepError::GravitationalConstant(gravitational_constant));
        }
        if !(delta_time.is_finite() && delta_time >= 0.0) {
            return Err(StepError::TimeStep(delta_time));
        }

        // Phase 1: forces from the pre-step snapshot, then integration
        let gravity = NewtonianGravity {
            gravitational_constant,
            softening: self.constants.softening,
        };
        let mut forces = vec![NVec2::zeros(); particles.len()];
        let mut force_stats = ForceStats::default();
        gravity.accumulate(particles, &mut forces, &mut force_stats);
        semi_implicit_euler(particles, &forces, delta_time);

        // Phase 2: contacts
        let collisions = resolve_collisions(particles, &self.constants);

        // Phase 3: pruning
        let before = particles.len();
        particles.retain(Particle::is_alive);
        let pruned = before - particles.len();

        self.last_report = StepReport {
            contacts: collisions.contacts,
            impulses: collisions.impulses,
            separating: collisions.separating,
            coincident_pairs: force_stats.coincident_pairs,
            degenerate_normals: collisions.degenerate_normals,
            pruned,
        };

        if self.last_report != StepReport::default() {
            debug!(
                particles = particles.len(),
                contacts = collisions.contacts,
                impulses = collisions.impulses,
                separating = collisions.separating,
                coincident = force_stats.coincident_pairs,
                degenerate_normals = collisions.degenerate_normals,
                pruned,
                "step"
            );
        }

        Ok(())
    }
}
