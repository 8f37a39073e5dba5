//! Planar vector type used throughout the engine.
//!
//! Positions, velocities, accelerations, and forces are all `NVec2`
//! (`nalgebra::Vector2<f64>`), a `Copy` value type. nalgebra already provides
//! `magnitude`, `dot`, scaling with `*`, `+`, `-`, and the in-place
//! accumulate `+=`.
//! [`PlanarVector`] adds the two operations whose edge-case behavior the
//! engine depends on.

use nalgebra::Vector2;
use tracing::trace;

pub type NVec2 = Vector2<f64>;

/// Result of [`PlanarVector::checked_normalize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalized {
    /// Unit-length vector pointing the same way as the input.
    Unit(NVec2),
    /// The input had exactly zero magnitude and is returned unchanged.
    Degenerate(NVec2),
}

impl Normalized {
    /// The resulting vector: the unit vector, or the untouched zero input.
    pub fn vector(self) -> NVec2 {
        match self {
            Normalized::Unit(v) | Normalized::Degenerate(v) => v,
        }
    }

    pub fn is_degenerate(self) -> bool {
        matches!(self, Normalized::Degenerate(_))
    }
}

pub trait PlanarVector {
    /// Euclidean distance between two points. Never negative.
    fn distance_to(&self, other: &Self) -> f64;

    /// Divide by the magnitude.
    ///
    /// A zero-length vector cannot be normalized; instead of producing NaN it is
    /// handed back unchanged as [`Normalized::Degenerate`] so callers can treat
    /// it as "no direction".
    fn checked_normalize(&self) -> Normalized;
}

impl PlanarVector for NVec2 {
    fn distance_to(&self, other: &Self) -> f64 {
        (other - self).magnitude()
    }

    fn checked_normalize(&self) -> Normalized {
        let length = self.magnitude();
        if length == 0.0 {
            trace!("cannot normalize a zero vector");
            return Normalized::Degenerate(*self);
        }
        Normalized::Unit(self / length)
    }
}
