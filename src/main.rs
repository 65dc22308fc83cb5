//! CLI entry point for the TOPSIS ranker.
//!
//! Usage: `topsis <InputDataFile> <Weights> <Impacts> <ResultFileName>`
//!
//! Every failure prints a message and exits with status 1; no result file is
//! written unless ranking succeeds.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use topsis_rank::adapters::{CsvTableReader, CsvTableWriter};
use topsis_rank::application::{RankAlternativesCommand, RankAlternativesHandler};
use topsis_rank::config::{AppConfig, LogFormat, LoggingConfig};

const USAGE: &str = "Usage: topsis <InputDataFile> <Weights> <Impacts> <ResultFileName>";

#[derive(Parser, Debug)]
#[command(name = "topsis")]
#[command(version)]
#[command(about = "Rank alternatives with TOPSIS", long_about = None)]
#[command(
    after_help = "EXAMPLE:\n    topsis data.csv \"1,1,1,2\" \"+,+,-,+\" result.csv\n\n    The first column of the input is a label; every other column is a numeric criterion."
)]
struct Cli {
    /// CSV file with a header row; first column is the alternative label
    #[arg(value_name = "InputDataFile")]
    input: PathBuf,

    /// Comma-separated positive weights, one per criterion column
    #[arg(value_name = "Weights", allow_hyphen_values = true)]
    weights: String,

    /// Comma-separated impacts, '+' (benefit) or '-' (cost), one per criterion column
    #[arg(value_name = "Impacts", allow_hyphen_values = true)]
    impacts: String,

    /// Output CSV: the input table plus score and rank columns
    #[arg(value_name = "ResultFileName", allow_hyphen_values = true)]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging);

    match run(&cli, &config) {
        Ok(()) => {
            println!(
                "TOPSIS Score and Rank Updated and saved to the output file = {}",
                cli.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<AppConfig> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter())
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

fn run(cli: &Cli, config: &AppConfig) -> Result<()> {
    debug!(input = %cli.input.display(), output = %cli.output.display(), "Starting ranking");

    let handler = RankAlternativesHandler::new(
        Arc::new(CsvTableReader::new(&cli.input)),
        Arc::new(CsvTableWriter::new(&cli.output)),
    )
    .with_engine_config(config.engine.clone())
    .with_output_config(config.output.clone());

    handler.handle(RankAlternativesCommand::new(
        cli.weights.clone(),
        cli.impacts.clone(),
    ))?;

    Ok(())
}
