//! Mixing-quantifier chart output
//!
//! Draws the (cycle-position, mixing) series as a line chart PNG. The
//! quantifier lives in [0, 1] so the y range is fixed; the x range follows
//! the recorded substep span.

use std::path::Path;

use plotters::prelude::*;

use crate::error::SimError;

const PLOT_SIZE: (u32, u32) = (800, 600);

/// Write the mixing series as a PNG line chart at `path`.
pub fn plot_mixing(series: &[(f64, f64)], path: &Path) -> Result<(), SimError> {
    let x_max = series.last().map(|p| p.0).unwrap_or(0.0).max(1.0);

    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| SimError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Mixing quantifier", ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(56)
        .build_cartesian_2d(0.0..x_max, 0.0..1.0)
        .map_err(|e| SimError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("substeps")
        .y_desc("mixing quantifier")
        .draw()
        .map_err(|e| SimError::Plot(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(series.iter().copied(), &BLUE))
        .map_err(|e| SimError::Plot(e.to_string()))?;

    root.present().map_err(|e| SimError::Plot(e.to_string()))?;
    Ok(())
}
