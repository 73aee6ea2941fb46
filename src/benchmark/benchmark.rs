use std::time::Instant;
use crate::simulation::engine::BlinkingVortexSim;
use crate::simulation::integrator::rotation_substep;
use crate::simulation::params::Parameters;
use crate::simulation::vortex::Vortex;

/// Helper to build a seeded simulation of size `n`
fn make_sim(n: usize) -> BlinkingVortexSim {
    let params = Parameters {
        mu: 1.0,
        width: 2.0,
        height: 1.0,
        seed: 42,
    };
    BlinkingVortexSim::new(params, n).expect("benchmark parameters are valid")
}

/// Time a single rotation substep for a range of particle counts
pub fn bench_rotation() {
    // Different ensemble sizes to test
    let ns = [1_000, 10_000, 100_000, 1_000_000];
    let steps = 5; // substeps to average per size

    for n in ns {
        let mut sim = make_sim(n);

        let vortex = Vortex::right();
        let mu = sim.params.mu;
        let step = mu / 10.0;

        // Warm up
        rotation_substep(&mut sim.ensemble.left, &vortex, step, mu);
        rotation_substep(&mut sim.ensemble.right, &vortex, step, mu);

        let t0 = Instant::now();
        for _ in 0..steps {
            rotation_substep(&mut sim.ensemble.left, &vortex, step, mu);
            rotation_substep(&mut sim.ensemble.right, &vortex, step, mu);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("n = {n:8}, substep = {per_step:9.6} s");
    }
}

/// Substep timing across a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_rotation_curve() {
    println!("n,substep_ms");

    for n in (20_000..=200_000).step_by(20_000) {
        // Small n: more repeats to smooth noise
        let steps = if n <= 100_000 { 10 } else { 4 };

        let mut sim = make_sim(n);

        let vortex = Vortex::right();
        let mu = sim.params.mu;
        let step = mu / 10.0;

        // Warm up
        rotation_substep(&mut sim.ensemble.left, &vortex, step, mu);
        rotation_substep(&mut sim.ensemble.right, &vortex, step, mu);

        let t0 = Instant::now();
        for _ in 0..steps {
            rotation_substep(&mut sim.ensemble.left, &vortex, step, mu);
            rotation_substep(&mut sim.ensemble.right, &vortex, step, mu);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
    }
}
