use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::CoreError;

/// Total angle covered by one sweep: two full turns of the parameter circle.
pub const SWEEP_ANGLE: f64 = 4.0 * std::f64::consts::PI;

/// The per-frame parameter schedule.
///
/// Frame `k` of `N` uses the parameter `c = separation · e^{iθ}` with
/// `θ = k · 4π / (N − 1)`, so a sweep starts at `θ = 0` and ends exactly
/// at `θ = 4π` on the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepParams {
    /// Radius of the parameter circle.
    pub separation: f64,

    /// Number of frames in the sweep.
    pub frames: u32,
}

/// One entry of the schedule: frame index, angle, and the derived parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub frame: u32,
    pub theta: f64,
    pub c: Complex,
}

impl SweepParams {
    /// Matches the "separation" slider default in the demo.
    pub const DEFAULT_SEPARATION: f64 = 0.7885;
    pub const DEFAULT_FRAMES: u32 = 100;

    pub fn new(separation: f64, frames: u32) -> crate::Result<Self> {
        if separation <= 0.0 || !separation.is_finite() {
            return Err(CoreError::InvalidSeparation(separation));
        }
        if frames < 1 {
            return Err(CoreError::InvalidFrameCount(frames));
        }
        Ok(Self { separation, frames })
    }

    /// The angle for a frame index. A single-frame sweep stays at `θ = 0`.
    #[inline]
    pub fn theta(&self, frame: u32) -> f64 {
        if self.frames == 1 {
            return 0.0;
        }
        frame as f64 * SWEEP_ANGLE / (self.frames - 1) as f64
    }

    /// The complex parameter for a frame index.
    #[inline]
    pub fn parameter(&self, frame: u32) -> Complex {
        Complex::from_polar(self.separation, self.theta(frame))
    }

    /// Iterate the full schedule in frame order.
    pub fn points(&self) -> impl Iterator<Item = SweepPoint> + '_ {
        (0..self.frames).map(move |frame| SweepPoint {
            frame,
            theta: self.theta(frame),
            c: self.parameter(frame),
        })
    }
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            separation: Self::DEFAULT_SEPARATION,
            frames: Self::DEFAULT_FRAMES,
        }
    }
}
