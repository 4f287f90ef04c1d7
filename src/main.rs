#![forbid(unsafe_code)]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use u_taskqueue::scheduler::{SchedulerSimulation, SimulationConfig, SimulationError};
use u_taskqueue::validation::{validate_config, ValidationError};

#[derive(Debug, Parser)]
#[command(
    name = "u-taskqueue",
    about = "Run a priority-queue task scheduling simulation",
    version
)]
struct Cli {
    /// Number of random tasks to generate.
    #[arg(short = 'n', long, default_value_t = 5)]
    tasks: usize,

    /// Seed for reproducible runs. Drawn from OS entropy when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with simulation parameters.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the per-task service time (seconds).
    #[arg(long)]
    service_time: Option<f64>,

    /// Print a JSON report instead of the text trace.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {}", join_messages(.0))]
    Config(Vec<ValidationError>),

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<SimulationConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => SimulationConfig::default(),
    };
    if let Some(service_time) = cli.service_time {
        config = config.with_service_time(service_time);
    }
    validate_config(&config).map_err(CliError::Config)?;
    Ok(config)
}

fn run(cli: Cli) -> Result<(), CliError> {
    init_tracing(cli.verbose);
    let config = load_config(&cli)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut sim = SchedulerSimulation::new(config);
    sim.generate_tasks(cli.tasks, &mut rng)?;
    sim.run()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &sim.report())?;
        writeln!(out)?;
    } else {
        sim.print_trace(&mut out)?;
        sim.print_summary(&mut out)?;
    }
    Ok(())
}

fn main() {
    if let Err(error) = run(Cli::parse()) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
