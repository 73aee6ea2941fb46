//! Snapshot-to-raster rendering
//!
//! `StateImage` is the one seam the video writer needs: produce a
//! fixed-size RGBA raster for snapshot `i`. The simulation type implements
//! it by rendering the snapshot's density-difference map through the
//! diverging colormap, with a title line on top.

use nalgebra::DMatrix;

use crate::analysis::density::{density_difference, GridSpec};
use crate::error::SimError;
use crate::simulation::engine::BlinkingVortexSim;
use crate::visualization::colormap::diverging_rgba;
use crate::visualization::font::{draw_text, text_width, FONT_HEIGHT};

pub const FRAME_WIDTH: usize = 640;
pub const FRAME_HEIGHT: usize = 480;

const TITLE_BAND: usize = 36; // vertical space reserved for the title
const MARGIN: usize = 16; // blank border around the map
const TITLE_SCALE: usize = 2;

/// Produce a raster for snapshot `i`. The one capability the video writer
/// requires of a simulation.
pub trait StateImage {
    /// Number of recorded snapshots available.
    fn frame_count(&self) -> usize;

    /// Render snapshot `index` as an RGBA buffer of
    /// `FRAME_WIDTH * FRAME_HEIGHT * 4` bytes.
    fn state_image(&self, index: usize) -> Result<Vec<u8>, SimError>;
}

impl StateImage for BlinkingVortexSim {
    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn state_image(&self, index: usize) -> Result<Vec<u8>, SimError> {
        let count = self.frames.len();
        let snap = self
            .frames
            .get(index)
            .ok_or(SimError::FrameOutOfRange { index, count })?;

        let grid = GridSpec::for_particle_count(
            self.num_particles(),
            self.params.width,
            self.params.height,
        );
        let map = density_difference(snap, &grid);

        let title = format!("BLINKING VORTEX MU={:.2}", self.params.mu);
        let aspect = self.params.width / self.params.height;

        Ok(render_density_frame(&map, aspect, &title))
    }
}

/// Render a signed density map into a fixed 640x480 RGBA raster.
///
/// The map is normalized symmetrically (so zero difference stays at the
/// colormap center), drawn with nearest-neighbor sampling into the largest
/// rectangle of the domain's aspect ratio that fits under the title band,
/// smallest-y row at the top.
pub fn render_density_frame(map: &DMatrix<f64>, domain_aspect: f64, title: &str) -> Vec<u8> {
    // White background, opaque alpha
    let mut buf = vec![255u8; FRAME_WIDTH * FRAME_HEIGHT * 4];

    let max_abs = map.iter().fold(0.0f64, |m, &v| m.max(v.abs()));

    let avail_w = FRAME_WIDTH - 2 * MARGIN;
    let avail_h = FRAME_HEIGHT - TITLE_BAND - MARGIN;

    // Largest rect of the domain's aspect ratio inside the available area
    let (map_w, map_h) = if (avail_w as f64) / domain_aspect <= avail_h as f64 {
        (avail_w, ((avail_w as f64) / domain_aspect) as usize)
    } else {
        (((avail_h as f64) * domain_aspect) as usize, avail_h)
    };

    let x0 = (FRAME_WIDTH - map_w) / 2;
    let y0 = TITLE_BAND + (avail_h - map_h) / 2;

    let (ny, nx) = (map.nrows(), map.ncols());

    for py in 0..map_h {
        let row = py * ny / map_h;
        for px in 0..map_w {
            let col = px * nx / map_w;

            let v = if max_abs > 0.0 {
                map[(row, col)] / max_abs
            } else {
                0.0
            };
            let color = diverging_rgba(v);

            let offset = ((y0 + py) * FRAME_WIDTH + x0 + px) * 4;
            buf[offset..offset + 4].copy_from_slice(&color);
        }
    }

    // Title centered in the band above the map
    let tx = (FRAME_WIDTH.saturating_sub(text_width(title, TITLE_SCALE))) / 2;
    let ty = (TITLE_BAND - FONT_HEIGHT * TITLE_SCALE) / 2;
    draw_text(
        &mut buf,
        FRAME_WIDTH,
        tx,
        ty,
        title,
        TITLE_SCALE,
        [0, 0, 0, 255],
    );

    buf
}
