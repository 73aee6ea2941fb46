//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the settings fixed at construction:
//! - flow strength `mu`,
//! - domain half-extents,
//! - the seed for particle placement
//!
//! `RunOptions` holds the per-run switches (recording, progress display).

#[derive(Debug, Clone)]
pub struct Parameters {
    pub mu: f64, // flow strength, must be nonzero
    pub width: f64, // domain half-extent in x
    pub height: f64, // domain half-extent in y
    pub seed: u64, // deterministic seed for particle placement
}

impl Parameters {
    /// Default domain half-extents, doubled when expanded boundaries are
    /// requested. The vortices sit at x = -1 and x = 1 either way.
    pub fn domain_extents(expand_boundaries: bool) -> (f64, f64) {
        if expand_boundaries {
            (4.0, 2.0)
        } else {
            (2.0, 1.0)
        }
    }
}

/// Per-run switches. Recording defaults on; the progress bar defaults off
/// and is switched on by the command-line front end.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub record: bool, // capture a snapshot after every substep
    pub progress: bool, // draw a progress bar over the whole run
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            record: true,
            progress: false,
        }
    }
}
