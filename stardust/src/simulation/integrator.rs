//! Fixed-step time integration for the particle population
//!
//! Semi-implicit (symplectic) Euler: acceleration from the net force, then
//! velocity from the new acceleration, then position from the new velocity.

use crate::simulation::particle::Particle;
use crate::simulation::vector::NVec2;

/// Advance every particle by `dt` given its net force.
///
/// `forces[i]` must have been computed for `particles[i]` before this call;
/// no force is re-evaluated here, so every particle sees the same snapshot.
pub fn semi_implicit_euler(particles: &mut [Particle], forces: &[NVec2], dt: f64) {
    debug_assert_eq!(particles.len(), forces.len());

    for (p, f) in particles.iter_mut().zip(forces) {
        // a = F / m
        let acceleration = f / p.mass();
        // v_n+1 = v_n + a dt
        let velocity = p.velocity + acceleration * dt;
        // x_n+1 = x_n + v_n+1 dt
        let position = p.position + velocity * dt;

        p.acceleration = acceleration;
        p.velocity = velocity;
        p.position = position;
    }
}
