use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the command-line driver.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read preset {path}: {source}")]
    PresetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse preset {path}: {source}")]
    PresetParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write preset {path}: {source}")]
    PresetWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize preset: {0}")]
    PresetSerialize(#[from] serde_json::Error),

    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Core(#[from] juliasweep_core::CoreError),

    #[error(transparent)]
    Render(#[from] juliasweep_render::RenderError),
}
