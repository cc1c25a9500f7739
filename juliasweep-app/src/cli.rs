use std::path::PathBuf;

use clap::Parser;

use juliasweep_core::{FieldParams, SweepParams};

use crate::driver::SweepConfig;
use crate::error::AppError;
use crate::preset::SweepPreset;

/// Render an animated escape-time sweep of the quadratic family
/// `z ↦ z² + c`, with `c` circling at a fixed separation radius, to a
/// directory of grayscale PNG frames.
#[derive(Debug, Parser)]
#[command(name = "juliasweep", version)]
pub struct Cli {
    /// Frame width in samples [default: 960]
    #[arg(long)]
    pub width: Option<u32>,

    /// Frame height in samples [default: 640]
    #[arg(long)]
    pub height: Option<u32>,

    /// Lattice samples per complex-plane unit [default: 400]
    #[arg(long)]
    pub samples_per_unit: Option<f64>,

    /// Iteration budget per point ("level of detail") [default: 10]
    #[arg(long)]
    pub detail: Option<u32>,

    /// Radius of the parameter circle [default: 0.7885]
    #[arg(long)]
    pub separation: Option<f64>,

    /// Number of frames in the sweep [default: 100]
    #[arg(long)]
    pub frames: Option<u32>,

    /// Directory to write frame PNGs into
    #[arg(long, default_value = "frames")]
    pub out: PathBuf,

    /// Load sweep settings from a JSON preset; explicit flags override it
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Write the resolved settings to a JSON preset and continue
    #[arg(long)]
    pub save_preset: Option<PathBuf>,
}

impl Cli {
    /// Merge explicit flags over the preset and validate the result.
    pub fn resolve(&self, preset: SweepPreset) -> Result<SweepConfig, AppError> {
        let merged = SweepPreset {
            width: self.width.unwrap_or(preset.width),
            height: self.height.unwrap_or(preset.height),
            samples_per_unit: self.samples_per_unit.unwrap_or(preset.samples_per_unit),
            detail: self.detail.unwrap_or(preset.detail),
            separation: self.separation.unwrap_or(preset.separation),
            frames: self.frames.unwrap_or(preset.frames),
        };
        Ok(SweepConfig {
            width: merged.width,
            height: merged.height,
            samples_per_unit: merged.samples_per_unit,
            field: FieldParams::new(merged.detail)?,
            sweep: SweepParams::new(merged.separation, merged.frames)?,
            out_dir: self.out.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_preset() {
        let cli = Cli::parse_from(["juliasweep", "--separation", "1.5", "--frames", "12"]);
        let config = cli.resolve(SweepPreset::default()).unwrap();
        assert_eq!(config.sweep.separation, 1.5);
        assert_eq!(config.sweep.frames, 12);
        // Untouched settings keep the preset values.
        assert_eq!(config.width, 960);
        assert_eq!(config.field.max_iterations, 10);
    }

    #[test]
    fn preset_values_survive_when_no_flags_given() {
        let cli = Cli::parse_from(["juliasweep"]);
        let preset = SweepPreset {
            detail: 18,
            frames: 7,
            ..SweepPreset::default()
        };
        let config = cli.resolve(preset).unwrap();
        assert_eq!(config.field.max_iterations, 18);
        assert_eq!(config.sweep.frames, 7);
    }

    #[test]
    fn invalid_merged_settings_are_rejected() {
        let cli = Cli::parse_from(["juliasweep", "--detail", "0"]);
        assert!(cli.resolve(SweepPreset::default()).is_err());

        let cli = Cli::parse_from(["juliasweep", "--separation=-2.0"]);
        assert!(cli.resolve(SweepPreset::default()).is_err());
    }

    #[test]
    fn out_dir_default() {
        let cli = Cli::parse_from(["juliasweep"]);
        let config = cli.resolve(SweepPreset::default()).unwrap();
        assert_eq!(config.out_dir, PathBuf::from("frames"));
    }
}
