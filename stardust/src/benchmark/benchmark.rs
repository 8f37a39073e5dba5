use std::time::Instant;

use tracing::warn;

use crate::simulation::engine::PhysicsEngine;
use crate::simulation::particle::{Particle, ParticleParams, Radius};
use crate::simulation::vector::NVec2;

/// Default population sizes for `stardust --bench`
pub const BENCH_SIZES: [usize; 6] = [50, 100, 200, 400, 800, 1600];

const BENCH_G: f64 = 0.1;
const BENCH_DT: f64 = 0.001;

/// Time `PhysicsEngine::step` for each population size in `ns`.
/// Prints `N,step_ms` rows (paste straight into a spreadsheet) and
/// returns the same pairs.
pub fn bench_step(ns: &[usize], steps: usize) -> Vec<(usize, f64)> {
    let steps = steps.max(1);
    let mut results = Vec::with_capacity(ns.len());

    println!("N,step_ms");

    for &n in ns {
        let template = make_particles(n);
        let mut engine = PhysicsEngine::default();

        // Warm-up
        let mut particles = template.clone();
        if let Err(e) = engine.step(&mut particles, BENCH_G, BENCH_DT) {
            warn!(n, error = %e, "warm-up step failed");
        }

        let mut particles = template;
        let t0 = Instant::now();
        for _ in 0..steps {
            if let Err(e) = engine.step(&mut particles, BENCH_G, BENCH_DT) {
                warn!(n, error = %e, "bench step failed");
            }
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
        results.push((n, ms));
    }

    results
}

/// Helper to build `n` small, well separated particles on a spiral.
/// Deterministic, no rand needed.
fn make_particles(n: usize) -> Vec<Particle> {
    (0..n)
        .filter_map(|i| {
            let i_f = i as f64;
            let r = 5.0 + i_f * 0.5;
            let position = NVec2::new((i_f * 0.37).cos() * r, (i_f * 0.37).sin() * r);
            Particle::new(ParticleParams {
                radius: Radius::Fixed(0.01),
                ..ParticleParams::new(1.0, position)
            })
            .ok()
        })
        .collect()
}
