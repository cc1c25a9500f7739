use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("pixel buffer length {got} does not match {width}×{height}")]
    BufferMismatch {
        got: usize,
        width: u32,
        height: u32,
    },

    #[error("failed to create frame file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode frame: {0}")]
    Png(#[from] png::EncodingError),

    #[error(transparent)]
    Core(#[from] juliasweep_core::CoreError),
}
