//! Scalar mixing quantifier over the recorded history
//!
//! Per snapshot: bin both groups, take the per-cell relative imbalance
//! |H_left - H_right| / (H_left + H_right) with empty cells counting as
//! fully unmixed (1.0), and average over all cells. Fully separated groups
//! score 1; a perfectly even interleaving approaches 0.

use nalgebra::DMatrix;

use crate::analysis::density::{histogram, GridSpec};
use crate::simulation::engine::BlinkingVortexSim;

/// Average per-cell imbalance of two count grids. Always in [0, 1].
pub fn mixing_fraction(h_left: &DMatrix<f64>, h_right: &DMatrix<f64>) -> f64 {
    let cells = (h_left.nrows() * h_left.ncols()) as f64;

    let sum: f64 = h_left
        .iter()
        .zip(h_right.iter())
        .map(|(&l, &r)| {
            let total = l + r;
            if total == 0.0 {
                // Empty cells count as unmixed by convention
                1.0
            } else {
                (l - r).abs() / total
            }
        })
        .sum();

    sum / cells
}

/// Lazy (cycle-position, mixing) series over the recorded frames.
///
/// Positions are evenly spaced from 0 to the cumulative completed-substep
/// count, which keeps growing across continued runs. The iterator is a
/// pure function of the stored snapshots; call again for a fresh pass.
pub fn mixing_series(sim: &BlinkingVortexSim) -> impl Iterator<Item = (f64, f64)> + '_ {
    let grid = GridSpec::for_particle_count(
        sim.num_particles(),
        sim.params.width,
        sim.params.height,
    );

    let count = sim.frames.len();
    let spacing = if count > 1 {
        sim.substeps_done as f64 / (count - 1) as f64
    } else {
        0.0
    };

    sim.frames.iter().enumerate().map(move |(i, frame)| {
        let h_left = histogram(&frame.left.x, &frame.left.y, &grid);
        let h_right = histogram(&frame.right.x, &frame.right.y, &grid);
        (i as f64 * spacing, mixing_fraction(&h_left, &h_right))
    })
}
