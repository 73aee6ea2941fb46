//! The stateful simulation instance and its run drivers
//!
//! `BlinkingVortexSim` owns the particle ensemble, the recorded frame
//! sequence, and the cumulative substep counter. `run_simulation` drives
//! whole cycles (right half-cycle, then left); calling it again resumes
//! from the current state rather than resetting.

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::SimError;
use crate::simulation::integrator::rotation_substep;
use crate::simulation::params::{Parameters, RunOptions};
use crate::simulation::states::{Ensemble, Snapshot};
use crate::simulation::vortex::ActiveSide;

/// A blinking vortex simulation: two tracer groups advected by the
/// alternating vortices, with optional per-substep snapshot recording.
#[derive(Debug, Clone)]
pub struct BlinkingVortexSim {
    pub ensemble: Ensemble, // current particle positions
    pub frames: Vec<Snapshot>, // recorded history, append-only
    pub params: Parameters, // construction-time settings
    pub substeps_done: usize, // completed substeps across all runs
}

impl BlinkingVortexSim {
    /// Build a simulation with `num_particles` tracers scattered over the
    /// domain. Odd counts are truncated to the next-lower even number so
    /// the two groups stay equal-size.
    ///
    /// Fails with the degenerate-configuration error when `params.mu` is
    /// zero or non-finite; every rotation angle would be indeterminate.
    pub fn new(params: Parameters, num_particles: usize) -> Result<Self, SimError> {
        if params.mu == 0.0 || !params.mu.is_finite() {
            return Err(SimError::ZeroFlowParameter);
        }

        // Keep the particle count even; an odd request drops one particle
        let num_particles = (num_particles / 2) * 2;

        let mut rng = StdRng::seed_from_u64(params.seed);
        let ensemble = Ensemble::initialize(&mut rng, num_particles, params.width, params.height);

        Ok(Self {
            ensemble,
            frames: Vec::new(),
            params,
            substeps_done: 0,
        })
    }

    /// Total particle count across both groups.
    pub fn num_particles(&self) -> usize {
        self.ensemble.num_particles()
    }
}

/// Run one half-cycle: `substeps` rotation substeps with the same active
/// vortex and step size `mu / substeps`.
///
/// After every substep the coordinate arrays are scanned for non-finite
/// values; a hit aborts the run before the substep is counted as completed
/// or its state recorded. With recording on, a snapshot is appended per
/// substep. `substeps == 0` is a no-op.
pub fn rotate_half_cycle(
    sim: &mut BlinkingVortexSim,
    side: ActiveSide,
    substeps: usize,
    record: bool,
    bar: Option<&ProgressBar>,
) -> Result<(), SimError> {
    if substeps == 0 { // nothing to apply, return
        return Ok(());
    }

    let vortex = side.vortex();
    let mu = sim.params.mu;

    // The half-cycle is divided into equal substeps; the same step size is
    // applied every substep
    let step = mu / substeps as f64;

    for _ in 0..substeps {
        // Both groups rotate about the same active vortex, independently
        rotation_substep(&mut sim.ensemble.left, &vortex, step, mu);
        rotation_substep(&mut sim.ensemble.right, &vortex, step, mu);

        // A particle on the vortex center produces NaN; abort before the
        // substep is counted as completed or its state recorded
        if !sim.ensemble.all_finite() {
            return Err(SimError::NonFinitePosition {
                substep: sim.substeps_done + 1,
            });
        }

        sim.substeps_done += 1;

        if record {
            sim.frames.push(sim.ensemble.snapshot());
        }

        if let Some(b) = bar {
            b.inc(1);
        }
    }

    Ok(())
}

/// Run `cycles` full cycles of `substeps` substeps per half-cycle.
/// Every cycle activates the right vortex first, then the left.
///
/// Recording appends 2 * cycles * substeps snapshots. Repeated calls
/// continue from the current positions and counters.
pub fn run_simulation(
    sim: &mut BlinkingVortexSim,
    cycles: usize,
    substeps: usize,
    opts: &RunOptions,
) -> Result<(), SimError> {
    let total_substeps = 2 * cycles * substeps;

    let bar = if opts.progress && total_substeps > 0 {
        let b = ProgressBar::new(total_substeps as u64);
        b.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({eta}) {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        b.set_message("simulating");
        Some(b)
    } else {
        None
    };

    for _ in 0..cycles {
        rotate_half_cycle(sim, ActiveSide::Right, substeps, opts.record, bar.as_ref())?;
        rotate_half_cycle(sim, ActiveSide::Left, substeps, opts.record, bar.as_ref())?;
    }

    if let Some(b) = bar {
        b.finish_with_message("simulation complete");
    }

    Ok(())
}
