//! A particle population plus the queue of spawns waiting for the next tick.
//!
//! Spawn requests are validated when they arrive and applied only between
//! steps, in arrival order. Renderers read the population through
//! [`Sandbox::frame`] or [`Sandbox::particles`].

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::simulation::engine::{PhysicsEngine, StepError, StepReport};
use crate::simulation::params::ParameterSource;
use crate::simulation::particle::{Color, Particle, ParticleError, ParticleParams, Radius};
use crate::simulation::vector::NVec2;

/// What a renderer needs to draw one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleView {
    pub position: NVec2,
    pub radius: f64,
    pub color: Color,
}

impl From<&Particle> for ParticleView {
    fn from(p: &Particle) -> Self {
        Self {
            position: p.position,
            radius: p.radius(),
            color: p.color(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Sandbox {
    engine: PhysicsEngine,
    particles: Vec<Particle>,
    pending: VecDeque<Particle>,
    spawn_radius: Radius,
    steps: u64,
    elapsed: f64,
}

impl Sandbox {
    pub fn new(engine: PhysicsEngine) -> Self {
        Self::with_particles(engine, Vec::new())
    }

    pub fn with_particles(engine: PhysicsEngine, particles: Vec<Particle>) -> Self {
        Self {
            engine,
            particles,
            pending: VecDeque::new(),
            spawn_radius: Radius::default(),
            steps: 0,
            elapsed: 0.0,
        }
    }

    /// Radius rule applied to particles created through [`Sandbox::spawn_at`].
    pub fn set_spawn_radius(&mut self, radius: Radius) {
        self.spawn_radius = radius;
    }

    /// Validate and queue a new particle. It joins the population at the next tick.
    pub fn request_spawn(&mut self, params: ParticleParams) -> Result<(), ParticleError> {
        let particle = Particle::new(params)?;
        debug!(
            x = particle.position.x,
            y = particle.position.y,
            mass = particle.mass(),
            "spawn queued"
        );
        self.pending.push_back(particle);
        Ok(())
    }

    /// The click-to-spawn path: a resting white particle with the current spawn mass.
    pub fn spawn_at(
        &mut self,
        position: NVec2,
        source: &impl ParameterSource,
    ) -> Result<(), ParticleError> {
        let params = ParticleParams {
            radius: self.spawn_radius,
            ..ParticleParams::new(source.spawn_mass(), position)
        };
        self.request_spawn(params)
    }

    /// Apply queued spawns, then advance one step with the source's current
    /// gravitational constant.
    pub fn tick(&mut self, source: &impl ParameterSource, delta_time: f64) -> Result<(), StepError> {
        if !self.pending.is_empty() {
            info!(count = self.pending.len(), "admitting spawned particles");
            self.particles.extend(self.pending.drain(..));
        }

        self.engine
            .step(&mut self.particles, source.gravitational_constant(), delta_time)?;

        let report = self.engine.last_report();
        if report.pruned > 0 {
            info!(
                pruned = report.pruned,
                remaining = self.particles.len(),
                "particles consumed"
            );
        }

        self.steps += 1;
        self.elapsed += delta_time;
        Ok(())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn frame(&self) -> impl Iterator<Item = ParticleView> + '_ {
        self.particles.iter().map(ParticleView::from)
    }

    pub fn pending_spawns(&self) -> usize {
        self.pending.len()
    }

    pub fn last_report(&self) -> StepReport {
        self.engine.last_report()
    }

    pub fn engine(&self) -> &PhysicsEngine {
        &self.engine
    }

    /// Completed ticks.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated time covered by completed ticks.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn total_mass(&self) -> f64 {
        self.particles.iter().map(Particle::mass).sum()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.particles
            .iter()
            .fold(NVec2::zeros(), |acc, p| acc + p.momentum())
    }
}
