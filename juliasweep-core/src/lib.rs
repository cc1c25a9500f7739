pub mod complex;
pub mod error;
pub mod escape;
pub mod grid;
pub mod sweep;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use error::CoreError;
pub use escape::{escape_time, FieldParams};
pub use grid::Grid;
pub use sweep::{SweepParams, SweepPoint};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
