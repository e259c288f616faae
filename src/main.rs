use std::io::{stderr, stdout};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use cybersource_client::batch::{write_outcomes, BatchRunner};
use cybersource_client::{CyberSource, CyberSourceConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cybersource-client [input].csv [log_level:optional] > [output].csv");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    //NOTE: Credentials come from ./.cybersource or ~/.cybersource, environment variables win over the file
    let config = match CyberSourceConfig::discover() {
        Ok(config) => config.with_env_overrides(),
        Err(error) => {
            eprintln!("Unable to load configuration: {error}");
            exit(1);
        }
    };

    let client = match CyberSource::new(config) {
        Ok(client) => client,
        Err(error) => {
            eprintln!("{error}");
            exit(1);
        }
    };

    let runner = BatchRunner::new(client);

    let timer = Instant::now();
    let outcomes = runner.run(path).await?;
    let duration = timer.elapsed();

    info!("Processed transactions in: {duration:?}");

    write_outcomes(stdout().lock(), &outcomes)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the outcome CSV, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
