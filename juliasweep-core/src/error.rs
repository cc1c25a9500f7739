use thiserror::Error;

/// Errors originating from the core sweep engine.
///
/// All of these are parameter-validation failures: the escape-time
/// computation itself is total over complex inputs and cannot fail.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid grid resolution: {width}×{height} (both dimensions must be >= 1)")]
    InvalidResolution { width: u32, height: u32 },

    #[error("invalid {axis} extent: {value} (must be > 0.0 and finite)")]
    InvalidExtent { axis: &'static str, value: f64 },

    #[error("invalid max iterations: {0} (must be >= 1)")]
    InvalidMaxIterations(u32),

    #[error("invalid separation: {0} (must be > 0.0 and finite)")]
    InvalidSeparation(f64),

    #[error("invalid frame count: {0} (must be >= 1)")]
    InvalidFrameCount(u32),
}
