use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::CoreError;

/// Squared escape radius. An orbit has escaped once `|z|² > 4`,
/// i.e. `|z| > 2` without the square root.
const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Parameters controlling escape-time iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldParams {
    /// Iteration budget per point. Points that never escape within the
    /// budget record `max_iterations - 1`.
    pub max_iterations: u32,
}

impl FieldParams {
    /// Matches the "level of detail" slider default in the demo.
    pub const DEFAULT_MAX_ITERATIONS: u32 = 10;

    pub fn new(max_iterations: u32) -> crate::Result<Self> {
        if max_iterations < 1 {
            return Err(CoreError::InvalidMaxIterations(max_iterations));
        }
        Ok(Self { max_iterations })
    }
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Iterate `z ↦ z² + c` from `z0` and report the escape count.
///
/// The returned value always lies in `[0, max_iterations - 1]`. It lags
/// the detection index by one: when the magnitude check trips on iteration
/// `i`, the recorded count is `i - 1` (clamped at 0), the index of the last
/// iterate computed while the orbit was still bounded. Points whose orbit
/// stays bounded for the whole budget record `max_iterations - 1`. The
/// grayscale ramp of the rendered frames depends on this exact schedule,
/// so it is part of the contract, not an artifact.
///
/// Pure and total: no input can fail, and equal inputs always produce
/// equal counts.
#[inline]
pub fn escape_time(z0: Complex, c: Complex, params: FieldParams) -> u32 {
    let mut z = z0;
    for i in 0..params.max_iterations {
        if z.norm_sq() > ESCAPE_RADIUS_SQ {
            return if i > 0 { i - 1 } else { 0 };
        }
        z = z * z + c;
    }
    params.max_iterations - 1
}
