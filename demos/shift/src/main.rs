//! shift: run one collection shift over a district and write the results.
//!
//! Without `--points` the built-in sample district is used.  Output lands in
//! `--out` as `timeline.csv`, `ticks.csv` and `summary.csv`; the run report
//! is printed to stdout.  Set `RUST_LOG=debug` for per-tick scheduler logs.

mod network;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use wc_core::{Minute, PointId, SimConfig};
use wc_graph::{load_graph_path, CollectionGraph};
use wc_output::{render_report, CsvWriter, OutputWriter, SimOutputObserver};
use wc_sim::{RunReport, SimBuilder, SimObserver, TimelineEvent};

use network::build_sample;

/// Waste-collection and stray-animal shift simulation
#[derive(Parser, Debug)]
#[command(name = "shift")]
#[command(about = "Simulate one waste-collection shift and report the crew it needed")]
struct Args {
    /// Point-list file (`N`, then `<waste_m3> [<neighbor> <cost>]...` per line)
    #[arg(long)]
    points: Option<PathBuf>,

    /// Landfill point id (defaults to 0, or the sample's landfill)
    #[arg(long)]
    landfill: Option<u32>,

    /// Shelter point id (defaults to the landfill, or the sample's shelter)
    #[arg(long)]
    shelter: Option<u32>,

    /// JSON file with `SimConfig` fields; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the CSV output
    #[arg(long, default_value = "output/shift")]
    out: PathBuf,

    /// Override the spawn seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the shift length in minutes
    #[arg(long)]
    budget: Option<u64>,

    /// Never add trucks during the shift
    #[arg(long)]
    fixed_fleet: bool,

    /// Echo every timeline line to stdout
    #[arg(long, short = 'v')]
    verbose: bool,
}

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct EchoObserver<W: OutputWriter> {
    inner:   SimOutputObserver<W>,
    echo:    bool,
    events:  usize,
    ticks:   usize,
}

impl<W: OutputWriter> EchoObserver<W> {
    fn new(inner: SimOutputObserver<W>, echo: bool) -> Self {
        Self { inner, echo, events: 0, ticks: 0 }
    }
}

impl<W: OutputWriter> SimObserver for EchoObserver<W> {
    fn on_tick_start(&mut self, tick: u64, now: Minute) {
        self.inner.on_tick_start(tick, now);
    }

    fn on_event(&mut self, event: &TimelineEvent) {
        self.events += 1;
        if self.echo {
            println!("{event}");
        }
        self.inner.on_event(event);
    }

    fn on_tick_end(&mut self, tick: u64, now: Minute) {
        self.ticks += 1;
        self.inner.on_tick_end(tick, now);
    }

    fn on_sim_end(&mut self, report: &RunReport) {
        self.inner.on_sim_end(report);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<SimConfig>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(budget) = args.budget {
        config.budget_minutes = budget;
    }
    if args.fixed_fleet {
        config.elastic_fleet = false;
    }
    config.validate()?;
    Ok(config)
}

fn load_district(args: &Args) -> Result<(CollectionGraph, PointId, PointId)> {
    let (graph, landfill, shelter) = match &args.points {
        Some(path) => {
            let graph = load_graph_path(path)
                .with_context(|| format!("loading points from {}", path.display()))?;
            let landfill = PointId(args.landfill.unwrap_or(0));
            (graph, landfill, landfill)
        }
        None => build_sample()?,
    };
    let landfill = args.landfill.map(PointId).unwrap_or(landfill);
    let shelter = args.shelter.map(PointId).unwrap_or(shelter);
    Ok((graph, landfill, shelter))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let (graph, landfill, shelter) = load_district(&args)?;

    println!("=== shift: waste collection ===");
    println!(
        "Points: {}  |  Directed edges: {}  |  Waste: {}  |  Budget: {} min  |  Seed: {}",
        graph.point_count(),
        graph.edge_count(),
        graph.total_initial_waste(),
        config.budget_minutes,
        config.seed,
    );
    println!("Landfill: {landfill}  |  Shelter: {shelter}");
    println!();

    let mut sim = SimBuilder::new(config, graph)
        .landfill(landfill)
        .shelter(shelter)
        .build()?;
    tracing::info!(
        trucks = sim.trucks.len(),
        capture_vehicles = sim.captures.len(),
        animals = sim.store.animal_totals().total(),
        "district ready"
    );

    let writer = CsvWriter::new(&args.out)
        .with_context(|| format!("opening output in {}", args.out.display()))?;
    let mut obs = EchoObserver::new(SimOutputObserver::new(writer), args.verbose);

    let t0 = Instant::now();
    let report = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    if args.verbose {
        println!();
    }
    print!("{}", render_report(&report));
    println!();
    println!("Simulated in {:.3} s", elapsed.as_secs_f64());
    println!("  timeline.csv : {} rows", obs.events);
    println!("  ticks.csv    : {} rows", obs.ticks);
    println!("  summary.csv  : {} rows", report.metrics().len());
    println!("Output written to {}", args.out.display());

    Ok(())
}
