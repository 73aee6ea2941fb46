//! Diverging colormap for the signed density-difference map
//!
//! Input is the normalized difference in [-1, 1]: negative (left-group
//! surplus) renders blue, zero renders near-white, positive (right-group
//! surplus) renders red.

/// Color stops from -1 (deep blue) through 0 (near white) to +1 (deep red).
const DIVERGING_STOPS: [(f64, f64, f64); 5] = [
    (8.0, 48.0, 140.0),    // deep blue    (-1.0)
    (96.0, 144.0, 224.0),  // medium blue  (-0.5)
    (246.0, 246.0, 246.0), // near white    (0.0)
    (224.0, 96.0, 80.0),   // medium red   (+0.5)
    (140.0, 16.0, 24.0),   // deep red     (+1.0)
];

/// Map a normalized signed value in [-1, 1] to an RGBA color.
/// Values outside the range clamp to the end stops.
pub fn diverging_rgba(v: f64) -> [u8; 4] {
    // Shift [-1, 1] onto the stop table's [0, 1] span
    let t = ((v.clamp(-1.0, 1.0)) + 1.0) / 2.0;

    let seg = t * 4.0;
    let i = (seg as usize).min(3);
    let s = seg - i as f64;

    let (r0, g0, b0) = DIVERGING_STOPS[i];
    let (r1, g1, b1) = DIVERGING_STOPS[i + 1];

    [
        (r0 + s * (r1 - r0)) as u8,
        (g0 + s * (g1 - g0)) as u8,
        (b0 + s * (b1 - b0)) as u8,
        255,
    ]
}
