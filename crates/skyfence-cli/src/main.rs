//! Headless scenario runner.
//!
//! Loads a scenario file, runs the engagement to completion, and prints
//! the end-of-run report. With `--snapshots` it also streams one world
//! snapshot per frame as JSON lines, which is the feed a renderer or an
//! offline analysis script consumes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use skyfence_sim::scenario::Scenario;
use skyfence_sim::SimulationEngine;

#[derive(Parser, Debug)]
#[clap(name = "skyfence")]
struct Arguments {
    /// Scenario file (JSON)
    scenario: PathBuf,

    /// Override the scenario's random seed
    #[clap(short, long)]
    seed: Option<u64>,

    /// Override the simulated duration in seconds
    #[clap(short, long)]
    duration: Option<f64>,

    /// Write one snapshot per frame to this file (JSON lines)
    #[clap(long)]
    snapshots: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Arguments::parse();

    let mut scenario = Scenario::load(&args.scenario)
        .with_context(|| format!("failed to load scenario {}", args.scenario.display()))?;
    if let Some(seed) = args.seed {
        scenario.settings.seed = seed;
    }
    if let Some(duration) = args.duration {
        scenario.settings.simulation_time = duration;
    }
    // Overrides can invalidate a scenario that loaded cleanly.
    scenario.validate()?;

    let mut engine = SimulationEngine::new(&scenario);

    if let Some(path) = &args.snapshots {
        let file = File::create(path)
            .with_context(|| format!("failed to create snapshot file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        while !engine.complete() {
            let snapshot = engine.step();
            serde_json::to_writer(&mut writer, &snapshot)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
    } else {
        engine.run();
    }

    log::info!("run complete after {} frames", engine.time().frame);
    println!("{}", engine.report());
    Ok(())
}
