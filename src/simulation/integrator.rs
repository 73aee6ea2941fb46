//! Fixed-step advection for the particle groups
//!
//! One substep rotates every particle of a group about the active vortex
//! with the same step size. Substeps are strictly sequential (each depends
//! on the previous one's output); within a substep the particles are
//! independent of each other.

use super::states::{Group, NVec2};
use super::vortex::Vortex;

/// Advance one group by a single substep about `vortex`.
/// Rewrites the parallel coordinate arrays in place, preserving order.
pub fn rotation_substep(group: &mut Group, vortex: &Vortex, step: f64, mu: f64) {
    let n = group.len();
    if n == 0 { // no particles, return
        return;
    }

    for i in 0..n {
        // rotate each particle about the active vortex, store back in place
        let p = NVec2::new(group.x[i], group.y[i]);
        let q = vortex.rotate(p, step, mu);
        group.x[i] = q.x;
        group.y[i] = q.y;
    }
}
