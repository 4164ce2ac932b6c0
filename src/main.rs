use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use aoc2025::days::DayCommand;
use aoc2025::parallel::DEFAULT_PARALLELISM;
use aoc2025::RunConfig;

/// Advent of Code 2025: reads puzzle input on stdin, prints the answer on stdout
#[derive(Parser, Debug)]
#[command(name = "aoc2025", version)]
struct Args {
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Units of work a day may run concurrently
    #[arg(
        short = 'j',
        long,
        env = "AOC_PARALLELISM",
        default_value_t = DEFAULT_PARALLELISM,
        global = true
    )]
    parallelism: usize,

    #[command(subcommand)]
    day: DayCommand,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = RunConfig::default().with_parallelism(args.parallelism);
    let cancel = config.cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            return;
        }
        warn!("interrupted, cancelling; press Ctrl-C again to abort");
        cancel.cancel();
        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(130);
        }
    });

    info!(day = args.day.name(), parallelism = config.parallelism, "running");
    args.day
        .run(&config, tokio::io::stdin(), tokio::io::stdout())
        .await
        .with_context(|| format!("{} failed", args.day.name()))?;
    Ok(())
}

fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("aoc2025=debug,warn")
        } else {
            EnvFilter::new("aoc2025=info,warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
