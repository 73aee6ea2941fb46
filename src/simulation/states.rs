//! Core state types for the blinking vortex simulation.
//!
//! Defines the particle storage and its captured history:
//! - `Group`    – one tracer population as parallel x/y coordinate arrays
//! - `Ensemble` – the left and right groups together
//! - `Snapshot` – an immutable copy of both groups at one substep
//!
//! Particles have no identity beyond array position; array order is
//! insertion order from initialization and is preserved across steps.

use nalgebra::Vector2;
use rand::Rng;

pub type NVec2 = Vector2<f64>;

/// One tracer population stored as parallel coordinate arrays.
/// `x[i]` and `y[i]` belong to the same particle.
#[derive(Debug, Clone)]
pub struct Group {
    pub x: Vec<f64>, // x coordinates
    pub y: Vec<f64>, // y coordinates
}

impl Group {
    /// Number of particles in the group.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// True if every coordinate in the group is finite.
    pub fn all_finite(&self) -> bool {
        self.x.iter().all(|v| v.is_finite()) && self.y.iter().all(|v| v.is_finite())
    }
}

/// The full particle state: two equal-size groups named for the half-plane
/// they start in.
#[derive(Debug, Clone)]
pub struct Ensemble {
    pub left: Group,  // started in x <= 0
    pub right: Group, // started in x >= 0
}

impl Ensemble {
    /// Scatter `num_particles` tracers uniformly over the domain, half per
    /// group. `num_particles` must already be even; the caller truncates.
    ///
    /// Left-group x lands in (-width, 0], right-group x in [0, width),
    /// and both groups' y in [-height, height).
    pub fn initialize<R: Rng>(
        rng: &mut R,
        num_particles: usize,
        width: f64,
        height: f64,
    ) -> Self {
        let per_group = num_particles / 2;

        let left = Group {
            x: (0..per_group).map(|_| -width * rng.gen::<f64>()).collect(),
            y: (0..per_group)
                .map(|_| height * (2.0 * rng.gen::<f64>() - 1.0))
                .collect(),
        };
        let right = Group {
            x: (0..per_group).map(|_| width * rng.gen::<f64>()).collect(),
            y: (0..per_group)
                .map(|_| height * (2.0 * rng.gen::<f64>() - 1.0))
                .collect(),
        };

        Self { left, right }
    }

    /// Total particle count across both groups.
    pub fn num_particles(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn all_finite(&self) -> bool {
        self.left.all_finite() && self.right.all_finite()
    }

    /// Capture an immutable copy of all four coordinate arrays.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

/// An immutable copy of both groups at one substep. Snapshots accumulate
/// append-only in the simulation's frame sequence and are read-only to the
/// analysis side.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub left: Group,  // left group at capture time
    pub right: Group, // right group at capture time
}
