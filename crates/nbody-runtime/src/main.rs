use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use nbody::body::BodyKind;
use nbody_runtime::{RuntimeConfig, SimulationHandle};
use system_generator::Preset;

/// Runs a preset headless in real time and reports on it
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Preset to load (overrides the config file)
    #[arg(short, long)]
    preset: Option<String>,

    /// JSON runtime configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for generation and debris (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Wall-clock seconds to run for
    #[arg(long, default_value_t = 10.0)]
    seconds: f64,

    /// Seconds between two status lines
    #[arg(long, default_value_t = 1.0)]
    report_every: f64,

    /// Write the final snapshot to this file as JSON
    #[arg(long)]
    dump: Option<PathBuf>,

    /// Print the preset names and exit
    #[arg(long)]
    list_presets: bool,
}

fn load_config(args: &Args) -> Result<RuntimeConfig> {
    let mut config = match &args.config {
        Some(path) => RuntimeConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => RuntimeConfig::default(),
    };
    if let Some(preset) = &args.preset {
        config.preset = preset.clone();
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    nbody_runtime::logging::init();
    let args = Args::parse();

    if args.list_presets {
        for preset in Preset::ALL {
            println!("{}", preset);
        }
        return Ok(());
    }

    let config = load_config(&args)?;
    let run_for = Duration::try_from_secs_f64(args.seconds).context("invalid --seconds")?;
    let report_every =
        Duration::try_from_secs_f64(args.report_every.max(0.01)).context("invalid --report-every")?;

    let handle = SimulationHandle::spawn(config)?;
    let start = Instant::now();
    while start.elapsed() < run_for {
        thread::sleep(report_every.min(run_for.saturating_sub(start.elapsed())));
        let snapshot = handle.snapshot();
        info!(
            "t={:.3} steps={} massive={} asteroids={} debris={}",
            snapshot.time,
            snapshot.steps,
            snapshot.count_kind(BodyKind::Massive),
            snapshot.count_kind(BodyKind::Asteroid),
            snapshot.count_kind(BodyKind::Debris),
        );
    }

    let snapshot = handle.snapshot();
    drop(handle);

    if let Some(path) = &args.dump {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), snapshot.as_ref())?;
        info!("wrote snapshot to {}", path.display());
    }

    Ok(())
}
