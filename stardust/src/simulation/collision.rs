//! Contact detection and response
//!
//! Every unordered pair is tested once, in index order. Pairs are resolved
//! sequentially: a pair sees the masses, velocities and positions left behind
//! by the pairs resolved before it in the same pass.
//!
//! Contact always moves mass from the lighter particle to the heavier one.
//! If both survive that, the pair also gets a restitution impulse along the
//! contact normal and is pushed apart so it no longer overlaps.

use crate::simulation::engine::EngineConstants;
use crate::simulation::particle::Particle;
use crate::simulation::vector::{NVec2, PlanarVector};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionStats {
    /// Overlapping pairs found (each one absorbed mass).
    pub contacts: usize,
    /// Contacts that received an impulse.
    pub impulses: usize,
    /// Contacts skipped by the impulse step because the pair was already separating.
    pub separating: usize,
    /// Contacts whose normal could not be computed (exact overlap).
    pub degenerate_normals: usize,
}

/// Resolve every overlapping pair in `particles`.
pub fn resolve_collisions(particles: &mut [Particle], constants: &EngineConstants) -> CollisionStats {
    let mut stats = CollisionStats::default();
    let n = particles.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = particles.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            // Dead particles wait for pruning; a zero-radius one can still overlap.
            if !a.is_alive() || !b.is_alive() {
                continue;
            }

            let distance = a.position.distance_to(&b.position);
            let min_distance = a.radius() + b.radius();
            // NaN distance is never a contact
            let touching = distance < min_distance;
            if !touching {
                continue;
            }
            stats.contacts += 1;

            transfer_mass(a, b, constants.absorption_rate);
            if !(a.is_alive() && b.is_alive()) {
                continue;
            }

            let normal = (b.position - a.position).checked_normalize();
            if normal.is_degenerate() {
                stats.degenerate_normals += 1;
            }
            let normal = normal.vector();

            if apply_impulse(a, b, normal, constants.restitution) {
                stats.impulses += 1;
            } else {
                stats.separating += 1;
            }

            separate(a, b, normal, min_distance - distance);
        }
    }

    stats
}

/// Move `rate` of the lighter particle's mass into the heavier one.
///
/// On a tie `a` counts as the lighter. A remnant that would drop below the
/// smallest normal f64 is handed over whole, so repeated contact ends in an
/// exact zero instead of a subnormal mass that can no longer shrink.
fn transfer_mass(a: &mut Particle, b: &mut Particle, rate: f64) {
    let (larger, smaller) = if a.mass() > b.mass() { (a, b) } else { (b, a) };

    let mut amount = smaller.mass() * rate;
    if rate > 0.0 && smaller.mass() - amount < f64::MIN_POSITIVE {
        amount = smaller.mass();
    }

    larger.absorb_mass(amount);
    smaller.lose_mass(amount);
}

/// Returns false (and leaves velocities alone) if the pair is already moving apart.
fn apply_impulse(a: &mut Particle, b: &mut Particle, normal: NVec2, restitution: f64) -> bool {
    let relative_velocity = b.velocity - a.velocity;
    let normal_velocity = relative_velocity.dot(&normal);
    if normal_velocity > 0.0 {
        return false;
    }

    let j = -(1.0 + restitution) * normal_velocity / (1.0 / a.mass() + 1.0 / b.mass());
    let impulse = normal * j;

    a.velocity -= impulse / a.mass();
    b.velocity += impulse / b.mass();
    true
}

/// Close `overlap` along `normal`, each side moving by the other's share of the mass.
fn separate(a: &mut Particle, b: &mut Particle, normal: NVec2, overlap: f64) {
    let total = a.mass() + b.mass();
    let a_move = overlap * b.mass() / total;
    let b_move = overlap * a.mass() / total;

    a.position -= normal * a_move;
    b.position += normal * b_move;
}
