mod cli;
mod driver;
mod error;
mod preset;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use juliasweep_render::SweepProgress;

use cli::Cli;
use error::AppError;
use preset::SweepPreset;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    info!("Starting JuliaSweep");

    let preset = match &cli.preset {
        Some(path) => SweepPreset::load(path)?,
        None => SweepPreset::default(),
    };
    let config = cli.resolve(preset)?;

    if let Some(path) = &cli.save_preset {
        config.as_preset().save(path)?;
    }

    let progress = SweepProgress::new();
    let summary = driver::run_sweep(&config, &progress)?;

    if summary.cancelled {
        info!(
            frames = summary.frames_written,
            "Sweep cancelled after {} frames", summary.frames_written
        );
    } else {
        info!(
            frames = summary.frames_written,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Sweep complete: frames written to {}",
            config.out_dir.display()
        );
    }
    Ok(())
}
