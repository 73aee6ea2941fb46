//! The two blinking vortices and the closed-form rotation about them
//!
//! Exactly two point vortices exist, fixed at (-1, 0) and (1, 0) for the
//! lifetime of a simulation. Only one is active at a time; `ActiveSide`
//! names which, in the fixed alternation order (right first, then left).

use crate::simulation::states::NVec2;

/// A fixed point vortex in the plane.
#[derive(Debug, Clone, Copy)]
pub struct Vortex {
    pub pos: NVec2, // vortex center, immutable
}

impl Vortex {
    pub fn left() -> Self {
        Self {
            pos: NVec2::new(-1.0, 0.0),
        }
    }

    pub fn right() -> Self {
        Self {
            pos: NVec2::new(1.0, 0.0),
        }
    }

    /// Rotate one point about this vortex by the closed-form blinking
    /// vortex angle for step size `step` and flow strength `mu`.
    ///
    /// This is exact analytic advection for a single active point vortex
    /// over a time interval proportional to `step`; no discretization error
    /// comes from this formula itself.
    pub fn rotate(&self, p: NVec2, step: f64, mu: f64) -> NVec2 {
        // Offset from the vortex center
        let rel = p - self.pos;

        // Squared distance to the vortex:
        // d = (x - vx)^2 + (y - vy)^2
        //
        // A particle sitting exactly on the vortex gives d = 0 and an
        // infinite angle below; the engine's post-step scan catches the
        // resulting non-finite coordinates.
        let d = rel.norm_squared();

        // Rotation angle falls off with squared distance:
        // theta = (step * mu) / d
        let theta = (step * mu) / d;

        let (sin_t, cos_t) = theta.sin_cos();

        // Standard rotation of the offset, shifted back to the vortex frame:
        // x' = cos(theta) (x - vx) - sin(theta) (y - vy) + vx
        // y' = sin(theta) (x - vx) + cos(theta) (y - vy) + vy
        NVec2::new(
            cos_t * rel.x - sin_t * rel.y + self.pos.x,
            sin_t * rel.x + cos_t * rel.y + self.pos.y,
        )
    }
}

/// Which vortex is currently active. Within every cycle the right vortex
/// runs its half-cycle before the left one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveSide {
    Right,
    Left,
}

impl ActiveSide {
    /// The vortex this side refers to.
    pub fn vortex(self) -> Vortex {
        match self {
            ActiveSide::Right => Vortex::right(),
            ActiveSide::Left => Vortex::left(),
        }
    }
}
