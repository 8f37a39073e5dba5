//! Configuration types for loading sandbox scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – fixed engine constants (restitution, absorption, softening)
//! - [`ParametersConfig`] – live parameters and run length
//! - [`ParticleConfig`]   – initial state for each particle
//! - [`SpawnConfig`]      – scripted spawn requests, standing in for mouse clicks
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:                    # every field optional
//!   restitution: 0.8
//!   absorption_rate: 0.25
//!   softening: 0.0
//!
//! parameters:
//!   gravitational_constant: 1.0
//!   spawn_mass: 50.0
//!   time_step: 0.016
//!   steps: 600
//!   radius_scale: 2.0        # optional, default 2
//!   report_every: 60         # optional, default 60
//!
//! particles:
//!   - x: [0.0, 0.0]
//!     m: 1000.0
//!   - x: [10.0, 0.0]
//!     v: [0.0, 5.0]          # optional, default [0, 0]
//!     m: 10.0
//!     radius: 3.0            # optional, fixed radius instead of k * cbrt(m)
//!     color: [1.0, 0.5, 0.0, 1.0]
//!
//! spawns:
//!   - step: 120              # applied before tick 120
//!     x: [40.0, 0.0]
//!     m: 5.0                 # optional, defaults to parameters.spawn_mass
//! ```

use serde::Deserialize;

use crate::simulation::engine::{ABSORPTION_RATE, RESTITUTION};
use crate::simulation::particle::RADIUS_SCALE_FACTOR;

/// Fixed engine constants
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub restitution: f64, // 1 = elastic, 0 = perfectly inelastic
    pub absorption_rate: f64, // fraction of the lighter mass moved per contact
    pub softening: f64, // added in quadrature to pair distances
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            restitution: RESTITUTION,
            absorption_rate: ABSORPTION_RATE,
            softening: 0.0,
        }
    }
}

/// Live parameters and run settings
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    pub gravitational_constant: f64,
    pub spawn_mass: f64,
    pub time_step: f64,
    pub steps: u64,
    #[serde(default = "default_radius_scale")]
    pub radius_scale: f64,
    #[serde(default = "default_report_every")]
    pub report_every: u64,
}

fn default_radius_scale() -> f64 {
    RADIUS_SCALE_FACTOR
}

fn default_report_every() -> u64 {
    60
}

/// Initial state of one particle
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    pub x: [f64; 2], // position in simulation units
    #[serde(default)]
    pub v: [f64; 2], // velocity in simulation units per time unit
    pub m: f64, // mass
    #[serde(default)]
    pub radius: Option<f64>, // fixed radius; derived from mass when absent
    #[serde(default)]
    pub color: Option<[f32; 4]>, // RGBA, white when absent
}

/// A scripted spawn request
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SpawnConfig {
    pub step: u64, // queued before this tick runs
    pub x: [f64; 2],
    #[serde(default)]
    pub m: Option<f64>, // falls back to the live spawn mass
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub particles: Vec<ParticleConfig>,
    #[serde(default)]
    pub spawns: Vec<SpawnConfig>,
}
