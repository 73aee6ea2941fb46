use bvsim::analysis::density::{density_difference, histogram, GridSpec};
use bvsim::analysis::mixing::{mixing_fraction, mixing_series};
use bvsim::error::SimError;
use bvsim::simulation::engine::{rotate_half_cycle, run_simulation, BlinkingVortexSim};
use bvsim::simulation::params::{Parameters, RunOptions};
use bvsim::simulation::states::{Group, NVec2, Snapshot};
use bvsim::simulation::vortex::{ActiveSide, Vortex};
use bvsim::visualization::colormap::diverging_rgba;
use bvsim::visualization::frame::{StateImage, FRAME_HEIGHT, FRAME_WIDTH};
use bvsim::visualization::plot::plot_mixing;
use bvsim::visualization::video::generate_video;

use nalgebra::DMatrix;

/// Default flow parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        mu: 1.0,
        width: 2.0,
        height: 1.0,
        seed: 42,
    }
}

/// Build a simulation of `n` particles with the default parameters
pub fn small_sim(n: usize) -> BlinkingVortexSim {
    BlinkingVortexSim::new(test_params(), n).expect("test parameters are valid")
}

/// Snapshot with one left particle and one right particle at given spots
pub fn two_particle_snapshot(left: (f64, f64), right: (f64, f64)) -> Snapshot {
    Snapshot {
        left: Group {
            x: vec![left.0],
            y: vec![left.1],
        },
        right: Group {
            x: vec![right.0],
            y: vec![right.1],
        },
    }
}

// ==================================================================================
// Construction tests
// ==================================================================================

#[test]
fn odd_particle_count_truncates_to_even() {
    let sim = small_sim(99);

    assert_eq!(sim.num_particles(), 98, "Odd count should round down");
    assert_eq!(sim.ensemble.left.len(), 49, "Left group should hold half");
    assert_eq!(sim.ensemble.right.len(), 49, "Right group should hold half");
}

#[test]
fn even_particle_count_is_kept() {
    let sim = small_sim(100);

    assert_eq!(sim.num_particles(), 100);
    assert_eq!(sim.ensemble.left.len(), 50);
    assert_eq!(sim.ensemble.right.len(), 50);
}

#[test]
fn zero_mu_is_rejected_at_construction() {
    let mut p = test_params();
    p.mu = 0.0;

    let err = BlinkingVortexSim::new(p, 100).unwrap_err();
    assert!(
        matches!(err, SimError::ZeroFlowParameter),
        "mu = 0 must be rejected, got {err:?}"
    );
}

#[test]
fn initialization_scatters_groups_over_their_half_planes() {
    let sim = small_sim(1000);

    assert!(
        sim.ensemble.left.x.iter().all(|&x| (-2.0..=0.0).contains(&x)),
        "Left-group x must start in (-width, 0]"
    );
    assert!(
        sim.ensemble.right.x.iter().all(|&x| (0.0..2.0).contains(&x)),
        "Right-group x must start in [0, width)"
    );
    assert!(
        sim.ensemble.left.y.iter().all(|&y| (-1.0..1.0).contains(&y)),
        "y must start in [-height, height)"
    );
}

#[test]
fn same_seed_reproduces_initial_positions() {
    let a = small_sim(64);
    let b = small_sim(64);

    assert_eq!(a.ensemble.left.x, b.ensemble.left.x, "Seeded init must be deterministic");
    assert_eq!(a.ensemble.right.y, b.ensemble.right.y, "Seeded init must be deterministic");
}

// ==================================================================================
// Rotation tests
// ==================================================================================

#[test]
fn rotation_preserves_distance_from_vortex() {
    let vortex = Vortex::right();
    let p = NVec2::new(0.3, -0.4);

    let r_before = (p - vortex.pos).norm();
    let q = vortex.rotate(p, 0.1, 1.5);
    let r_after = (q - vortex.pos).norm();

    assert!(
        (r_before - r_after).abs() < 1e-12,
        "Rotation changed the radius: {r_before} -> {r_after}"
    );
}

#[test]
fn rotation_round_trips_with_negated_step() {
    let vortex = Vortex::left();
    let p = NVec2::new(0.7, 0.2);

    let forward = vortex.rotate(p, 0.25, 1.0);
    let back = vortex.rotate(forward, -0.25, 1.0);

    assert!(
        (back - p).norm() < 1e-12,
        "Round trip drifted by {}",
        (back - p).norm()
    );
}

#[test]
fn positive_mu_rotates_counterclockwise() {
    let vortex = Vortex::right();
    // Directly right of the vortex; a positive angle should lift it
    let p = NVec2::new(2.0, 0.0);

    let q = vortex.rotate(p, 0.1, 1.0);

    assert!(q.y > 0.0, "Expected counterclockwise motion, got {q:?}");
}

// ==================================================================================
// Run and recording tests
// ==================================================================================

#[test]
fn run_records_two_frames_per_cycle_per_substep() {
    let mut sim = small_sim(100);

    run_simulation(&mut sim, 1, 4, &RunOptions::default()).unwrap();

    assert_eq!(sim.frames.len(), 8, "1 cycle x 4 substeps x 2 vortices");
    assert_eq!(sim.substeps_done, 8);
    for frame in &sim.frames {
        assert_eq!(frame.left.len(), 50, "Each snapshot keeps full groups");
        assert_eq!(frame.right.len(), 50);
    }
}

#[test]
fn recording_off_keeps_no_frames() {
    let mut sim = small_sim(100);
    let opts = RunOptions {
        record: false,
        progress: false,
    };

    run_simulation(&mut sim, 2, 3, &opts).unwrap();

    assert!(sim.frames.is_empty(), "Nothing should be recorded");
    assert_eq!(sim.substeps_done, 12, "Substeps still advance");
}

#[test]
fn second_run_continues_from_current_state() {
    let mut sim = small_sim(100);

    run_simulation(&mut sim, 1, 3, &RunOptions::default()).unwrap();
    let x_after_first = sim.ensemble.right.x[0];
    run_simulation(&mut sim, 2, 3, &RunOptions::default()).unwrap();

    assert_eq!(sim.frames.len(), 6 + 12, "Frames accumulate across runs");
    assert_eq!(sim.substeps_done, 18, "Substep counter accumulates");
    assert!(
        (sim.ensemble.right.x[0] - x_after_first).abs() > 0.0,
        "Second run must advance positions, not reset them"
    );
}

#[test]
fn half_cycle_records_one_frame_per_substep() {
    let mut sim = small_sim(100);

    rotate_half_cycle(&mut sim, ActiveSide::Right, 5, true, None).unwrap();

    assert_eq!(sim.frames.len(), 5, "One snapshot per substep");
    assert_eq!(sim.substeps_done, 5);
}

#[test]
fn zero_substeps_is_a_no_op() {
    let mut sim = small_sim(100);

    run_simulation(&mut sim, 3, 0, &RunOptions::default()).unwrap();

    assert!(sim.frames.is_empty());
    assert_eq!(sim.substeps_done, 0);
}

#[test]
fn particle_on_vortex_aborts_with_degenerate_configuration() {
    let mut sim = small_sim(10);
    // Park one particle exactly on the right vortex center
    sim.ensemble.left.x[0] = 1.0;
    sim.ensemble.left.y[0] = 0.0;

    let err = run_simulation(&mut sim, 1, 2, &RunOptions::default()).unwrap_err();

    match err {
        SimError::NonFinitePosition { substep } => {
            assert_eq!(substep, 1, "First substep already produces NaN");
        }
        other => panic!("Expected NonFinitePosition, got {other:?}"),
    }
    assert!(
        sim.frames.is_empty(),
        "The non-finite state must not be recorded"
    );
}

#[test]
fn aborted_run_does_not_count_the_rejected_substep() {
    let mut sim = small_sim(10);
    run_simulation(&mut sim, 1, 2, &RunOptions::default()).unwrap();
    assert_eq!(sim.substeps_done, 4);

    // Park one particle on the right vortex so the next substep blows up
    sim.ensemble.left.x[0] = 1.0;
    sim.ensemble.left.y[0] = 0.0;

    let err = run_simulation(&mut sim, 1, 2, &RunOptions::default()).unwrap_err();

    match err {
        SimError::NonFinitePosition { substep } => {
            assert_eq!(substep, 5, "Cumulative numbering continues across runs");
        }
        other => panic!("Expected NonFinitePosition, got {other:?}"),
    }
    assert_eq!(sim.substeps_done, 4, "A rejected substep is not completed");
    assert_eq!(sim.frames.len(), 4, "No frame is recorded for a rejected substep");
}

// ==================================================================================
// Density grid tests
// ==================================================================================

#[test]
fn grid_resolution_derives_from_particle_count() {
    // sqrt(100) = 10, 10 / 8 = 1  =>  2 x 1 bins
    let grid = GridSpec::for_particle_count(100, 2.0, 1.0);
    assert_eq!((grid.nx, grid.ny), (2, 1));
    assert_eq!((grid.x_min, grid.x_max), (-2.0, 2.0));
    assert_eq!((grid.y_min, grid.y_max), (-1.0, 1.0));

    // sqrt(40000) = 200, 200 / 8 = 25  =>  50 x 25 bins
    let grid = GridSpec::for_particle_count(40_000, 2.0, 1.0);
    assert_eq!((grid.nx, grid.ny), (50, 25));
}

#[test]
fn tiny_particle_counts_clip_to_one_y_bin() {
    // sqrt(16) = 4, 4 / 8 = 0, clipped to 1
    let grid = GridSpec::for_particle_count(16, 2.0, 1.0);
    assert_eq!((grid.nx, grid.ny), (2, 1));
}

#[test]
fn expanded_boundaries_rederive_grid_ranges_not_bin_counts() {
    let default = GridSpec::for_particle_count(100, 2.0, 1.0);
    let expanded = GridSpec::for_particle_count(100, 4.0, 2.0);

    assert_eq!((expanded.nx, expanded.ny), (default.nx, default.ny));
    assert_eq!((expanded.x_min, expanded.x_max), (-4.0, 4.0));
    assert_eq!((expanded.y_min, expanded.y_max), (-2.0, 2.0));
}

#[test]
fn histogram_drops_out_of_grid_points() {
    let grid = GridSpec::for_particle_count(100, 2.0, 1.0);

    let xs = [0.5, 5.0, -0.5];
    let ys = [0.0, 0.0, 3.0];
    let h = histogram(&xs, &ys, &grid);

    assert_eq!(h.sum(), 1.0, "Only the in-grid point should be counted");
}

#[test]
fn histogram_top_edge_falls_into_last_bin() {
    let grid = GridSpec::for_particle_count(100, 2.0, 1.0);

    assert_eq!(grid.cell_of(2.0, 1.0), Some((0, 1)), "Top edges belong to the last bin");
    assert_eq!(grid.cell_of(-2.0, -1.0), Some((0, 0)));
    assert_eq!(grid.cell_of(2.1, 0.0), None);
}

#[test]
fn density_difference_is_right_minus_left() {
    let grid = GridSpec::for_particle_count(100, 2.0, 1.0);
    let snap = two_particle_snapshot((-1.0, 0.0), (1.0, 0.0));

    let diff = density_difference(&snap, &grid);

    assert_eq!(diff[(0, 0)], -1.0, "Left-group surplus is negative");
    assert_eq!(diff[(0, 1)], 1.0, "Right-group surplus is positive");
}

// ==================================================================================
// Mixing tests
// ==================================================================================

#[test]
fn fully_separated_groups_score_one() {
    let h_left = DMatrix::from_row_slice(1, 2, &[4.0, 0.0]);
    let h_right = DMatrix::from_row_slice(1, 2, &[0.0, 4.0]);

    let m = mixing_fraction(&h_left, &h_right);
    assert!((m - 1.0).abs() < 1e-12, "Separated groups must score 1, got {m}");
}

#[test]
fn evenly_shared_cells_score_zero() {
    let h_left = DMatrix::from_row_slice(1, 2, &[3.0, 5.0]);
    let h_right = DMatrix::from_row_slice(1, 2, &[3.0, 5.0]);

    let m = mixing_fraction(&h_left, &h_right);
    assert!(m.abs() < 1e-12, "Identical histograms must score 0, got {m}");
}

#[test]
fn empty_cells_count_as_unmixed() {
    let h_left = DMatrix::from_row_slice(1, 2, &[0.0, 2.0]);
    let h_right = DMatrix::from_row_slice(1, 2, &[0.0, 2.0]);

    // One shared cell scores 0, the empty cell scores 1
    let m = mixing_fraction(&h_left, &h_right);
    assert!((m - 0.5).abs() < 1e-12, "Expected 0.5, got {m}");
}

#[test]
fn mixing_series_matches_frame_count_and_range() {
    let mut sim = small_sim(200);
    run_simulation(&mut sim, 1, 3, &RunOptions::default()).unwrap();

    let series: Vec<(f64, f64)> = mixing_series(&sim).collect();

    assert_eq!(series.len(), sim.frames.len());
    for &(pos, m) in &series {
        assert!((0.0..=1.0).contains(&m), "Mixing value {m} out of [0, 1]");
        assert!(pos >= 0.0 && pos <= sim.substeps_done as f64 + 1e-9);
    }
    assert_eq!(series.first().unwrap().0, 0.0, "Axis starts at 0");
    let last = series.last().unwrap().0;
    assert!(
        (last - sim.substeps_done as f64).abs() < 1e-9,
        "Axis ends at the cumulative substep count, got {last}"
    );
}

#[test]
fn mixing_series_is_restartable() {
    let mut sim = small_sim(200);
    run_simulation(&mut sim, 1, 2, &RunOptions::default()).unwrap();

    let first: Vec<(f64, f64)> = mixing_series(&sim).collect();
    let second: Vec<(f64, f64)> = mixing_series(&sim).collect();

    assert_eq!(first, second, "The series is a pure function of stored frames");
}

// ==================================================================================
// Rendering and video tests
// ==================================================================================

#[test]
fn state_image_has_fixed_raster_size() {
    let mut sim = small_sim(100);
    run_simulation(&mut sim, 1, 1, &RunOptions::default()).unwrap();

    let raster = sim.state_image(0).unwrap();
    assert_eq!(
        raster.len(),
        FRAME_WIDTH * FRAME_HEIGHT * 4,
        "Raster must be fixed-size RGBA"
    );
}

#[test]
fn state_image_rejects_out_of_range_index() {
    let mut sim = small_sim(100);
    run_simulation(&mut sim, 1, 1, &RunOptions::default()).unwrap();

    let err = sim.state_image(10).unwrap_err();
    assert!(
        matches!(err, SimError::FrameOutOfRange { index: 10, count: 2 }),
        "Got {err:?}"
    );
}

#[test]
fn video_without_recorded_state_is_an_error() {
    let sim = small_sim(100);
    let path = std::env::temp_dir().join("bvsim_no_state.mp4");

    let err = generate_video(&sim, &path, 10).unwrap_err();
    assert!(
        matches!(err, SimError::NoStateRecorded),
        "Fresh instance must report no recorded state, got {err:?}"
    );
    assert!(!path.exists(), "No output may be created on this error");
}

#[test]
fn mixing_plot_writes_a_png() {
    let mut sim = small_sim(200);
    run_simulation(&mut sim, 1, 2, &RunOptions::default()).unwrap();

    let series: Vec<(f64, f64)> = mixing_series(&sim).collect();
    let path = std::env::temp_dir().join("bvsim_mixing_plot.png");
    let _ = std::fs::remove_file(&path);

    plot_mixing(&series, &path).unwrap();

    let len = std::fs::metadata(&path).expect("plot file must exist").len();
    assert!(len > 0, "Plot file must not be empty");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn colormap_centers_on_near_white() {
    assert_eq!(diverging_rgba(0.0), [246, 246, 246, 255]);
    assert_eq!(diverging_rgba(-1.0), [8, 48, 140, 255]);
    assert_eq!(diverging_rgba(1.0), [140, 16, 24, 255]);

    // Out-of-range values clamp to the end stops
    assert_eq!(diverging_rgba(-3.0), diverging_rgba(-1.0));
    assert_eq!(diverging_rgba(3.0), diverging_rgba(1.0));
}
