//! Force contributors for the particle engine
//!
//! A [`Force`] adds its contribution to a per-particle force buffer. The only
//! law the engine uses is [`NewtonianGravity`], a direct O(n²) pairwise sum.

use crate::simulation::particle::Particle;
use crate::simulation::vector::{NVec2, PlanarVector};

/// Counters gathered while accumulating forces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForceStats {
    /// Pairs too close for a finite force, exact overlap included (no force applied).
    pub coincident_pairs: usize,
}

/// A force source operating on a particle population.
/// Implementations add their contribution into `out[i]` for each particle.
pub trait Force {
    fn accumulate(&self, particles: &[Particle], out: &mut [NVec2], stats: &mut ForceStats);
}

/// Pairwise Newtonian attraction `F = G m_i m_j / d²`.
///
/// `softening` is added in quadrature to every separation. At zero softening
/// this is the plain inverse-square law; a pair at exactly the same position
/// then has no defined direction and contributes nothing. The same goes for a
/// pair so close that `G m_i m_j / d²` overflows to infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub gravitational_constant: f64,
    pub softening: f64,
}

impl Force for NewtonianGravity {
    fn accumulate(&self, particles: &[Particle], out: &mut [NVec2], stats: &mut ForceStats) {
        let n = particles.len();
        if n < 2 || self.gravitational_constant == 0.0 {
            return;
        }
        let soft2 = self.softening * self.softening;

        // Every unordered pair (i, j), i < j, once. Both sides get the same
        // magnitude with opposite sign, so the pair sum is exactly zero.
        for i in 0..n {
            let pi = &particles[i];
            for j in (i + 1)..n {
                let pj = &particles[j];

                // r points from i towards j: i is pulled along +r, j along -r
                let r = pj.position - pi.position;
                let d2 = r.magnitude_squared() + soft2;
                if d2 == 0.0 {
                    stats.coincident_pairs += 1;
                    continue;
                }

                let Some(direction) = unit_or_none(r) else {
                    // softened but coincident: magnitude is finite, direction is not
                    stats.coincident_pairs += 1;
                    continue;
                };

                let magnitude = self.gravitational_constant * pi.mass() * pj.mass() / d2;
                if !magnitude.is_finite() {
                    stats.coincident_pairs += 1;
                    continue;
                }
                let f = direction * magnitude;
                out[i] += f;
                out[j] -= f;
            }
        }
    }
}

fn unit_or_none(r: NVec2) -> Option<NVec2> {
    let n = r.checked_normalize();
    (!n.is_degenerate()).then(|| n.vector())
}
