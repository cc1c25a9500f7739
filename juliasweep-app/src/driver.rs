use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use juliasweep_core::{FieldParams, Grid, SweepParams};
use juliasweep_render::{
    compute_field, export_frame, normalize, to_grayscale, FrameMetadata, SweepProgress,
};

use crate::error::AppError;
use crate::preset::SweepPreset;

/// Fully resolved settings for one sweep run.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub width: u32,
    pub height: u32,
    pub samples_per_unit: f64,
    pub field: FieldParams,
    pub sweep: SweepParams,
    pub out_dir: PathBuf,
}

impl SweepConfig {
    /// The settings in preset form, for `--save-preset`.
    pub fn as_preset(&self) -> SweepPreset {
        SweepPreset {
            width: self.width,
            height: self.height,
            samples_per_unit: self.samples_per_unit,
            detail: self.field.max_iterations,
            separation: self.sweep.separation,
            frames: self.sweep.frames,
        }
    }
}

/// What a sweep run produced.
#[derive(Debug)]
pub struct SweepSummary {
    pub frames_written: u32,
    pub cancelled: bool,
    pub elapsed: Duration,
}

/// Run the animation loop: one field, one normalization pass, and one PNG
/// per frame, in strict frame order.
///
/// The grid is built once and reused for every frame — only the parameter
/// `c` changes as the sweep walks the circle. Cancellation is checked
/// between frames, so the sweep stops only on a completed frame boundary.
pub fn run_sweep(config: &SweepConfig, progress: &SweepProgress) -> Result<SweepSummary, AppError> {
    let start = Instant::now();

    std::fs::create_dir_all(&config.out_dir).map_err(|source| AppError::OutputDir {
        path: config.out_dir.clone(),
        source,
    })?;

    let grid = Grid::reference_demo(config.width, config.height, config.samples_per_unit)?;
    let generation = progress.start(config.sweep.frames as usize);

    info!(
        width = config.width,
        height = config.height,
        frames = config.sweep.frames,
        max_iter = config.field.max_iterations,
        separation = config.sweep.separation,
        "Starting sweep"
    );

    let mut frames_written = 0u32;
    let mut cancelled = false;

    for point in config.sweep.points() {
        if progress.is_cancelled(generation) {
            cancelled = true;
            break;
        }

        let field = compute_field(&grid, point.c, config.field);
        let pixels = to_grayscale(&normalize(&field));
        let path = config.out_dir.join(format!("frame_{:04}.png", point.frame));
        let metadata = FrameMetadata {
            frame: point.frame,
            frames_total: config.sweep.frames,
            theta: point.theta,
            c: point.c,
            separation: config.sweep.separation,
            max_iterations: config.field.max_iterations,
            width: grid.width(),
            height: grid.height(),
        };
        export_frame(&pixels, grid.width(), grid.height(), &path, &metadata)?;

        frames_written += 1;
        progress.frame_done();
        info!("Frame {}/{}", point.frame + 1, config.sweep.frames);
    }

    let elapsed = start.elapsed();
    debug!(
        frames_written,
        cancelled,
        elapsed_ms = elapsed.as_millis() as u64,
        "Sweep finished"
    );

    Ok(SweepSummary {
        frames_written,
        cancelled,
        elapsed,
    })
}
