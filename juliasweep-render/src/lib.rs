pub mod error;
pub mod export;
pub mod field;
pub mod normalize;
pub mod progress;
pub mod renderer;

pub use error::RenderError;
pub use export::{export_frame, FrameMetadata};
pub use field::Field;
pub use normalize::{normalize, to_grayscale};
pub use progress::SweepProgress;
pub use renderer::compute_field;

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
