//! Experiment runner binary.
//!
//! # Usage
//!
//! ```bash
//! # Run with defaults (results appended to data/results.csv)
//! ellsberg-runner
//!
//! # Reproducible run with JSON-lines output
//! ellsberg-runner --seed 42 --results out/results.jsonl --format json
//!
//! # Override the permitted urn sizes
//! ellsberg-runner --urn-sizes 10,50,100
//! ```

use std::{io, path::PathBuf};

use clap::Parser;
use ellsberg_core::ExperimentConfig;
use ellsberg_runner::{
    FileSink, FlowTexts, RecordFormat, RunnerError, SeededEnv, SystemEnv, run_flow,
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Urn-choice experiment runner
#[derive(Parser, Debug)]
#[command(name = "ellsberg-runner")]
#[command(about = "Interactive urn-choice experiment session")]
#[command(version)]
struct Args {
    /// Results file to append to
    #[arg(short, long, default_value = "data/results.csv")]
    results: PathBuf,

    /// Results format (csv or json)
    #[arg(long, default_value = "csv")]
    format: String,

    /// Permitted urn sizes, comma separated (defaults to 10,100)
    #[arg(long, value_delimiter = ',')]
    urn_sizes: Vec<u32>,

    /// RNG seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Consent text file (built-in text if omitted)
    #[arg(long)]
    consent_text: Option<PathBuf>,

    /// Debrief text file (built-in text if omitted)
    #[arg(long)]
    debrief_text: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    let mut config = ExperimentConfig::default();
    if !args.urn_sizes.is_empty() {
        config.urn_sizes = args.urn_sizes.clone();
    }
    config.validate().map_err(|e| RunnerError::Config(e.to_string()))?;

    let format: RecordFormat = args.format.parse().map_err(RunnerError::Config)?;
    let mut sink = FileSink::open(&args.results, format)?;
    let texts = FlowTexts::load(args.consent_text.as_deref(), args.debrief_text.as_deref())?;

    tracing::info!(results = %args.results.display(), "experiment session starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let saved = match args.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded environment");
            let env = SeededEnv::with_seed(seed);
            run_flow(&config, &texts, &env, &mut input, &mut output, &mut sink)?
        },
        None => {
            let env = SystemEnv::new();
            run_flow(&config, &texts, &env, &mut input, &mut output, &mut sink)?
        },
    };

    match saved {
        Some(record) => tracing::info!(line = %record.to_line(), "session saved"),
        None => tracing::info!("no record saved"),
    }

    Ok(())
}
