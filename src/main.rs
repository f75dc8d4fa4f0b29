//! SAHAL Ledger CLI
//!
//! Command-line interface for analyzing exported SAHAL notifications.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- export.txt
//! cargo run -- --csv transactions.csv --json analysis.json export.txt
//! cargo run -- --strategy async --batch-size 512 --max-concurrent 8 export.txt
//! cargo run -- --config sahal.toml --sign-convention owed-to-me -v export.txt
//! ```
//!
//! The program reads the export file, runs it through the selected
//! processing strategy, prints a summary to stdout and writes any requested
//! export files. Logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, invalid input, invalid configuration, etc.)

use sahal_ledger::cli::{self, CliArgs};
use sahal_ledger::core::Analysis;
use sahal_ledger::io::{
    write_analysis_json, write_counterparties_csv, write_summary, write_transactions_csv,
    write_unmatched,
};
use sahal_ledger::strategy;
use sahal_ledger::types::AnalysisError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse_args();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), AnalysisError> {
    let config = args.to_analysis_config()?;
    let batch = matches!(args.strategy, cli::StrategyType::Async).then(|| args.to_batch_config());
    let strategy = strategy::create_strategy(args.strategy, config, batch);

    let analysis = strategy.process(&args.input_file)?;
    write_outputs(args, &analysis)?;

    let mut stdout = std::io::stdout().lock();
    write_summary(&analysis.report, &mut stdout)
}

fn write_outputs(args: &CliArgs, analysis: &Analysis) -> Result<(), AnalysisError> {
    if let Some(path) = &args.transactions_csv {
        write_file(path, |w| write_transactions_csv(&analysis.transactions, w))?;
    }
    if let Some(path) = &args.counterparties_csv {
        write_file(path, |w| write_counterparties_csv(&analysis.counterparties, w))?;
    }
    if let Some(path) = &args.json {
        write_file(path, |w| write_analysis_json(analysis, w))?;
    }
    if let Some(path) = &args.unmatched {
        write_file(path, |w| write_unmatched(&analysis.unmatched, w))?;
    }
    Ok(())
}

fn write_file<F>(path: &Path, write: F) -> Result<(), AnalysisError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), AnalysisError>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    let out: &mut dyn Write = &mut writer;
    write(out)?;
    writer.flush()?;
    info!(path = %path.display(), "wrote export");
    Ok(())
}
