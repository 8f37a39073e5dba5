//! Particle state and construction.
//!
//! A [`Particle`] is built from a plain [`ParticleParams`] record. Mass is
//! validated on the way in; after that the engine owns every mutable field.
//! Mass only changes through [`Particle::absorb_mass`] and
//! [`Particle::lose_mass`], which keep the radius in step with it.

use thiserror::Error;

use crate::simulation::vector::NVec2;

/// Radius scale factor `k` in `radius = k * mass^(1/3)`.
pub const RADIUS_SCALE_FACTOR: f64 = 2.0;

/// Opaque RGBA display tag. The engine never reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Color::rgba(r, g, b, a)
    }
}

/// How a particle's radius is determined. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Radius {
    /// `scale * cbrt(mass)`, recomputed whenever mass changes.
    FromMass { scale: f64 },
    /// Constant radius, independent of mass. Used for manual placement and tests.
    Fixed(f64),
}

impl Radius {
    fn for_mass(self, mass: f64) -> f64 {
        match self {
            Radius::FromMass { scale } => scale * mass.cbrt(),
            Radius::Fixed(r) => r,
        }
    }
}

impl Default for Radius {
    fn default() -> Self {
        Radius::FromMass {
            scale: RADIUS_SCALE_FACTOR,
        }
    }
}

/// Everything needed to construct a [`Particle`].
///
/// `mass` and `position` are required; use [`ParticleParams::new`] and
/// struct-update syntax for the rest:
///
/// ```
/// use stardust::{NVec2, Particle, ParticleParams};
///
/// let p = Particle::new(ParticleParams {
///     velocity: NVec2::new(0.0, 3.0),
///     ..ParticleParams::new(50.0, NVec2::new(10.0, 0.0))
/// })
/// .unwrap();
/// assert_eq!(p.mass(), 50.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleParams {
    pub mass: f64,
    pub position: NVec2,
    pub velocity: NVec2,
    pub acceleration: NVec2,
    pub color: Color,
    pub radius: Radius,
}

impl ParticleParams {
    pub fn new(mass: f64, position: NVec2) -> Self {
        Self {
            mass,
            position,
            velocity: NVec2::zeros(),
            acceleration: NVec2::zeros(),
            color: Color::WHITE,
            radius: Radius::default(),
        }
    }
}

/// Reasons a particle is refused admission to a population.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParticleError {
    #[error("particle mass must be positive, got {0}")]
    NonPositiveMass(f64),
    #[error("particle {0} must be finite")]
    NonFinite(&'static str),
    #[error("fixed particle radius must not be negative, got {0}")]
    NegativeRadius(f64),
    #[error("radius scale must be positive and finite, got {0}")]
    InvalidRadiusScale(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: NVec2,
    pub velocity: NVec2,
    pub acceleration: NVec2,
    mass: f64,
    radius: f64,
    radius_mode: Radius,
    color: Color,
}

impl Particle {
    pub fn new(params: ParticleParams) -> Result<Self, ParticleError> {
        let ParticleParams {
            mass,
            position,
            velocity,
            acceleration,
            color,
            radius,
        } = params;

        if !mass.is_finite() {
            return Err(ParticleError::NonFinite("mass"));
        }
        if mass <= 0.0 {
            return Err(ParticleError::NonPositiveMass(mass));
        }
        for (name, v) in [
            ("position", position),
            ("velocity", velocity),
            ("acceleration", acceleration),
        ] {
            if !(v.x.is_finite() && v.y.is_finite()) {
                return Err(ParticleError::NonFinite(name));
            }
        }
        match radius {
            Radius::FromMass { scale } if !(scale.is_finite() && scale > 0.0) => {
                return Err(ParticleError::InvalidRadiusScale(scale));
            }
            Radius::Fixed(r) if !r.is_finite() => return Err(ParticleError::NonFinite("radius")),
            Radius::Fixed(r) if r < 0.0 => return Err(ParticleError::NegativeRadius(r)),
            _ => {}
        }

        Ok(Self {
            position,
            velocity,
            acceleration,
            mass,
            radius: radius.for_mass(mass),
            radius_mode: radius,
            color,
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn radius_mode(&self) -> Radius {
        self.radius_mode
    }

    /// A particle with zero mass is dead and will be pruned at the end of the step.
    pub fn is_alive(&self) -> bool {
        self.mass > 0.0
    }

    pub fn momentum(&self) -> NVec2 {
        self.velocity * self.mass
    }

    pub fn absorb_mass(&mut self, amount: f64) {
        self.mass += amount;
        self.radius = self.radius_mode.for_mass(self.mass);
    }

    /// Remove up to `amount` of mass. Saturates at zero.
    pub fn lose_mass(&mut self, amount: f64) {
        self.mass = (self.mass - amount).max(0.0);
        self.radius = self.radius_mode.for_mass(self.mass);
    }
}
