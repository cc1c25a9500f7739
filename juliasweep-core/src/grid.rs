use tracing::debug;

use crate::complex::Complex;
use crate::error::CoreError;

/// The fixed rectangular lattice of complex sample points.
///
/// A grid is an immutable pair of one-dimensional axes: `xs` (length `W`)
/// spanning `[-extent_x, extent_x]` and `ys` (length `H`) spanning
/// `[-extent_y, extent_y]`, both endpoint-inclusive. The sample at
/// `(row, col)` is `xs[col] + ys[row]·i`. The lattice never changes for a
/// fixed configuration, so one grid is built per sweep and reused for
/// every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Grid {
    /// Build a `height × width` lattice over
    /// `[-extent_x, extent_x] × [-extent_y, extent_y]`.
    pub fn new(width: u32, height: u32, extent_x: f64, extent_y: f64) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidResolution { width, height });
        }
        if extent_x <= 0.0 || !extent_x.is_finite() {
            return Err(CoreError::InvalidExtent {
                axis: "x",
                value: extent_x,
            });
        }
        if extent_y <= 0.0 || !extent_y.is_finite() {
            return Err(CoreError::InvalidExtent {
                axis: "y",
                value: extent_y,
            });
        }
        debug!(width, height, extent_x, extent_y, "Built lattice");
        Ok(Self {
            xs: linspace(-extent_x, extent_x, width as usize),
            ys: linspace(-extent_y, extent_y, height as usize),
        })
    }

    /// The reference visualization's lattice: extents are pixel dimensions
    /// divided by a fixed sample density (960×640 at 400 samples per unit
    /// spans `[-2.4, 2.4] × [-1.6, 1.6]`).
    pub fn reference_demo(width: u32, height: u32, samples_per_unit: f64) -> crate::Result<Self> {
        if samples_per_unit <= 0.0 || !samples_per_unit.is_finite() {
            return Err(CoreError::InvalidExtent {
                axis: "sample density",
                value: samples_per_unit,
            });
        }
        Self::new(
            width,
            height,
            width as f64 / samples_per_unit,
            height as f64 / samples_per_unit,
        )
    }

    /// Number of samples along the real axis (`W`).
    #[inline]
    pub fn width(&self) -> u32 {
        self.xs.len() as u32
    }

    /// Number of samples along the imaginary axis (`H`).
    #[inline]
    pub fn height(&self) -> u32 {
        self.ys.len() as u32
    }

    /// The sample point `xs[col] + ys[row]·i`.
    #[inline]
    pub fn point(&self, row: u32, col: u32) -> Complex {
        Complex::new(self.xs[col as usize], self.ys[row as usize])
    }

    /// The real-axis sample values, ascending.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The imaginary-axis sample values, ascending.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }
}

/// `num` evenly spaced values over `[start, stop]`, endpoints included.
///
/// A single-sample axis collapses to `start`, and the final value is pinned
/// to `stop` exactly rather than accumulated from the step.
fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    if num == 1 {
        return vec![start];
    }
    let step = (stop - start) / (num - 1) as f64;
    let mut values: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
    values[num - 1] = stop;
    values
}
