pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::vector::{NVec2, Normalized, PlanarVector};
pub use simulation::particle::{Color, Particle, ParticleError, ParticleParams, Radius, RADIUS_SCALE_FACTOR};
pub use simulation::engine::{EngineConstants, EngineError, PhysicsEngine, StepError, StepReport, ABSORPTION_RATE, RESTITUTION};
pub use simulation::forces::{Force, ForceStats, NewtonianGravity};
pub use simulation::params::{ParameterSource, Parameters};
pub use simulation::sandbox::{ParticleView, Sandbox};
pub use simulation::scenario::{RunSummary, Scenario, ScenarioError};

pub use configuration::config::{EngineConfig, ParametersConfig, ParticleConfig, ScenarioConfig, SpawnConfig};

pub use benchmark::benchmark::bench_step;
