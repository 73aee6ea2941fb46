//! Error types for the blinking vortex simulator
//!
//! `SimError` covers the two failure classes the engine can actually hit
//! (degenerate configuration, video requested before any state was recorded)
//! plus the ambient I/O and rendering failures of the output writers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// A zero (or non-finite) flow parameter makes every rotation angle
    /// indeterminate; rejected at construction.
    #[error("degenerate configuration: flow parameter mu must be nonzero and finite")]
    ZeroFlowParameter,

    /// A particle landed on (or numerically at) the active vortex and the
    /// rotation produced NaN/Inf. Reported with the cumulative 1-based
    /// substep at which the scan caught it; the rejected substep is neither
    /// counted as completed nor recorded.
    #[error("degenerate configuration: non-finite particle position after substep {substep}")]
    NonFinitePosition { substep: usize },

    /// Video output was requested but the frame sequence is empty.
    #[error("no state recorded: run the simulation with recording enabled before generating video")]
    NoStateRecorded,

    /// Snapshot index outside the recorded range.
    #[error("frame index {index} out of range ({count} frames recorded)")]
    FrameOutOfRange { index: usize, count: usize },

    /// The encoder process could not be driven to completion.
    #[error("video encoder failed: {0}")]
    VideoEncoder(String),

    /// The plot backend refused to draw.
    #[error("plot rendering failed: {0}")]
    Plot(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
