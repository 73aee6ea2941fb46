//! Density histograms over the simulation domain
//!
//! The analysis grid is derived from the particle count: with
//! N = round(sqrt(total)) / 8 (at least 1), the grid has 2N bins across x
//! and N bins across y, spanning the domain half-extents. Each group is
//! binned separately; their signed difference (right minus left) is the
//! renderable density map.

use nalgebra::DMatrix;

use crate::simulation::states::Snapshot;

/// Bin layout for the density histograms. Rows index y bins, columns x bins.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    pub nx: usize, // bins across x
    pub ny: usize, // bins across y
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl GridSpec {
    /// Derive the grid for a simulation of `total_particles` over the given
    /// domain half-extents. Resolution scales with sqrt of the particle
    /// count and never drops below a single y bin.
    pub fn for_particle_count(total_particles: usize, width: f64, height: f64) -> Self {
        let n = (((total_particles as f64).sqrt().round() as usize) / 8).max(1);

        Self {
            nx: 2 * n,
            ny: n,
            x_min: -width,
            x_max: width,
            y_min: -height,
            y_max: height,
        }
    }

    /// The (row, col) bin holding (x, y), or `None` when the point lies
    /// outside the grid. Points exactly on the top edge of a range fall
    /// into the last bin.
    pub fn cell_of(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if !(x.is_finite() && y.is_finite()) {
            return None;
        }
        if x < self.x_min || x > self.x_max || y < self.y_min || y > self.y_max {
            return None;
        }

        let col = ((x - self.x_min) / (self.x_max - self.x_min) * self.nx as f64) as usize;
        let row = ((y - self.y_min) / (self.y_max - self.y_min) * self.ny as f64) as usize;

        Some((row.min(self.ny - 1), col.min(self.nx - 1)))
    }
}

/// Count the points of one group per grid cell.
/// Out-of-grid points are dropped; rotation preserves distance to the
/// active vortex, so particles can legitimately leave the initial domain.
pub fn histogram(xs: &[f64], ys: &[f64], grid: &GridSpec) -> DMatrix<f64> {
    let mut counts = DMatrix::zeros(grid.ny, grid.nx);

    for (&x, &y) in xs.iter().zip(ys.iter()) {
        if let Some((row, col)) = grid.cell_of(x, y) {
            counts[(row, col)] += 1.0;
        }
    }

    counts
}

/// The signed density map of one snapshot: right-group counts minus
/// left-group counts, per cell.
pub fn density_difference(snap: &Snapshot, grid: &GridSpec) -> DMatrix<f64> {
    let h_left = histogram(&snap.left.x, &snap.left.y, grid);
    let h_right = histogram(&snap.right.x, &snap.right.y, grid);

    h_right - h_left
}
