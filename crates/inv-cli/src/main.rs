//! alien-invasion — run an invasion over a map file, or generate a map.
//!
//! ```text
//! alien-invasion run maps/small.txt 4 --iterations 500 --seed 7
//! alien-invasion generate --out grid.txt --width 10 --height 10
//! ```
//!
//! Load errors (unreadable file, redefined city, one-way road, …) abort with
//! a non-zero exit status before any alien is deployed.

mod cli;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use inv_core::SimConfig;
use inv_output::{CsvWriter, EventLogObserver, TracingObserver};
use inv_sim::SimBuilder;

use cli::{Cli, Command, GenerateArgs, RunArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.debug);

    match cli.command {
        Command::Run(args)      => run(args),
        Command::Generate(args) => generate(args),
    }
}

/// `INFO` by default, `DEBUG` with `--verbose`, `TRACE` with `--debug`.
/// `RUST_LOG` wins over both flags.
fn init_tracing(verbose: bool, debug: bool) {
    let level = if debug {
        "trace"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

// ── run ───────────────────────────────────────────────────────────────────────

fn run(args: RunArgs) -> Result<()> {
    let graph = inv_map::load_file(&args.map)
        .with_context(|| format!("failed to load map {}", args.map.display()))?;
    info!(cities = graph.len(), roads = graph.road_count(), "loaded {}", args.map.display());

    let mut config = SimConfig::new(args.aliens).with_iterations(args.iterations);
    config.seed = args.seed;

    let mut sim = SimBuilder::new(config, graph)
        .build()
        .context("cannot start simulation")?;
    info!(seed = sim.rng.seed(), "starting invasion");

    let csv = match &args.events_csv {
        Some(dir) => Some(EventLogObserver::new(
            CsvWriter::new(dir)
                .with_context(|| format!("cannot create event log in {}", dir.display()))?,
        )),
        None => None,
    };

    let mut sinks = (TracingObserver::new(), csv);
    sim.run(&mut sinks);

    if let Some(err) = sinks.1.as_mut().and_then(|o| o.take_error()) {
        return Err(err).context("failed to write event log");
    }

    if args.print_map {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        inv_map::write_map(sim.graph(), &mut out).context("failed to print remaining map")?;
        out.flush()?;
    }

    Ok(())
}

// ── generate ──────────────────────────────────────────────────────────────────

fn generate(args: GenerateArgs) -> Result<()> {
    let lines = inv_map::grid_lines(args.width, args.height);

    let file = File::create(&args.out)
        .with_context(|| format!("unable to open {}", args.out.display()))?;
    let mut out = BufWriter::new(file);
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    info!("written {} lines into {}", lines.len(), args.out.display());
    Ok(())
}
