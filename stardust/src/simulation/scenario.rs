//! Build runnable sandbox scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a [`Scenario`]:
//! - numerical parameters (`Parameters`)
//! - a `Sandbox` holding the engine and the initial particles
//! - scripted spawns, sorted by the tick they precede

use thiserror::Error;
use tracing::info;

use crate::configuration::config::{ParticleConfig, ScenarioConfig, SpawnConfig};
use crate::simulation::engine::{EngineConstants, EngineError, PhysicsEngine, StepError};
use crate::simulation::params::Parameters;
use crate::simulation::particle::{Color, Particle, ParticleError, ParticleParams, Radius};
use crate::simulation::sandbox::Sandbox;
use crate::simulation::vector::NVec2;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    #[error("invalid engine constants: {0}")]
    Engine(#[from] EngineError),
    #[error("particle {index}: {source}")]
    Particle {
        index: usize,
        #[source]
        source: ParticleError,
    },
    #[error("spawn {index}: {source}")]
    Spawn {
        index: usize,
        #[source]
        source: ParticleError,
    },
    #[error("step {step} failed: {source}")]
    Step {
        step: u64,
        #[source]
        source: StepError,
    },
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub steps: u64,
    pub elapsed: f64,
    pub particles: usize,
    pub total_mass: f64,
}

#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub sandbox: Sandbox,
    spawns: Vec<SpawnConfig>,
    next_spawn: usize,
}

impl Scenario {
    pub fn build(cfg: ScenarioConfig) -> Result<Self, ScenarioError> {
        let engine = PhysicsEngine::new(EngineConstants {
            restitution: cfg.engine.restitution,
            absorption_rate: cfg.engine.absorption_rate,
            softening: cfg.engine.softening,
        })?;

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            gravitational_constant: p_cfg.gravitational_constant,
            spawn_mass: p_cfg.spawn_mass,
            time_step: p_cfg.time_step,
            steps: p_cfg.steps,
            radius_scale: p_cfg.radius_scale,
            report_every: p_cfg.report_every,
        };
        let spawn_radius = Radius::FromMass {
            scale: parameters.radius_scale,
        };

        let particles = cfg
            .particles
            .iter()
            .enumerate()
            .map(|(index, pc)| {
                Particle::new(particle_params(pc, spawn_radius))
                    .map_err(|source| ScenarioError::Particle { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut sandbox = Sandbox::with_particles(engine, particles);
        sandbox.set_spawn_radius(spawn_radius);

        // Stable sort keeps file order for spawns sharing a step.
        let mut spawns = cfg.spawns;
        spawns.sort_by_key(|s| s.step);

        Ok(Self {
            parameters,
            sandbox,
            spawns,
            next_spawn: 0,
        })
    }

    /// Run one tick, first queueing any scripted spawns due at this step.
    pub fn tick(&mut self) -> Result<(), ScenarioError> {
        let step = self.sandbox.steps();

        while let Some(spawn) = self.spawns.get(self.next_spawn) {
            if spawn.step > step {
                break;
            }
            let index = self.next_spawn;
            let position = NVec2::new(spawn.x[0], spawn.x[1]);
            let queued = match spawn.m {
                Some(m) => self.sandbox.request_spawn(ParticleParams {
                    radius: Radius::FromMass {
                        scale: self.parameters.radius_scale,
                    },
                    ..ParticleParams::new(m, position)
                }),
                None => self.sandbox.spawn_at(position, &self.parameters),
            };
            queued.map_err(|source| ScenarioError::Spawn { index, source })?;
            self.next_spawn += 1;
        }

        self.sandbox
            .tick(&self.parameters, self.parameters.time_step)
            .map_err(|source| ScenarioError::Step { step, source })
    }

    /// Run the configured number of ticks, logging a summary every `report_every`.
    pub fn run(&mut self) -> Result<RunSummary, ScenarioError> {
        for _ in 0..self.parameters.steps {
            self.tick()?;
            let done = self.sandbox.steps();
            if self.parameters.report_every > 0 && done % self.parameters.report_every == 0 {
                self.log_progress();
            }
        }
        let summary = self.summary();
        info!(
            steps = summary.steps,
            elapsed = summary.elapsed,
            particles = summary.particles,
            total_mass = summary.total_mass,
            "run finished"
        );
        Ok(summary)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            steps: self.sandbox.steps(),
            elapsed: self.sandbox.elapsed(),
            particles: self.sandbox.particles().len(),
            total_mass: self.sandbox.total_mass(),
        }
    }

    fn log_progress(&self) {
        let momentum = self.sandbox.total_momentum();
        let heaviest = self
            .sandbox
            .particles()
            .iter()
            .map(Particle::mass)
            .fold(0.0, f64::max);
        info!(
            step = self.sandbox.steps(),
            particles = self.sandbox.particles().len(),
            total_mass = self.sandbox.total_mass(),
            heaviest,
            px = momentum.x,
            py = momentum.y,
            "progress"
        );
    }
}

fn particle_params(pc: &ParticleConfig, derived: Radius) -> ParticleParams {
    ParticleParams {
        velocity: NVec2::new(pc.v[0], pc.v[1]),
        color: pc.color.map(Color::from).unwrap_or_default(),
        radius: pc.radius.map_or(derived, Radius::Fixed),
        ..ParticleParams::new(pc.m, NVec2::new(pc.x[0], pc.x[1]))
    }
}
