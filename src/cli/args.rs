use crate::io::read_input;
use crate::strategy::BatchConfig;
use crate::types::{AnalysisConfig, AnalysisError, RoundingMode, SignConvention};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Extract transactions and balances from a SAHAL notification export
#[derive(Parser, Debug)]
#[command(name = "sahal-ledger")]
#[command(
    about = "Extract transactions and per-counterparty balances from a SAHAL notification export",
    long_about = None
)]
pub struct CliArgs {
    /// Input text file containing delimiter-separated notifications
    #[arg(value_name = "INPUT", help = "Path to the exported notification text")]
    pub input_file: PathBuf,

    /// Processing strategy used for block classification
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Processing strategy: 'sync' for single-threaded or 'async' for batched multi-threaded"
    )]
    pub strategy: StrategyType,

    /// Number of blocks per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of blocks per batch (default: 256)"
    )]
    pub batch_size: Option<usize>,

    /// Number of worker threads (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Maximum number of batches classified concurrently (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,

    /// TOML configuration file; flags below override its values
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Block delimiter marker
    #[arg(long = "delimiter", value_name = "TEXT")]
    pub delimiter: Option<String>,

    /// Length of each ranking list
    #[arg(long = "top-n", value_name = "N")]
    pub top_n: Option<usize>,

    /// Rounding mode for amounts and the average
    #[arg(long = "rounding", value_name = "MODE")]
    pub rounding: Option<RoundingMode>,

    /// Meaning of a positive balance
    #[arg(long = "sign-convention", value_name = "CONVENTION")]
    pub sign_convention: Option<SignConvention>,

    /// Write transactions as CSV to this path
    #[arg(long = "csv", value_name = "PATH")]
    pub transactions_csv: Option<PathBuf>,

    /// Write per-counterparty balances as CSV to this path
    #[arg(long = "counterparties-csv", value_name = "PATH")]
    pub counterparties_csv: Option<PathBuf>,

    /// Write the full analysis as JSON to this path
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Write unmatched blocks to this path for review
    #[arg(long = "unmatched", value_name = "PATH")]
    pub unmatched: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// Available processing strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Missing values fall back to the defaults; zero values fall back with a
    /// warning.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.max_concurrent_batches.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.max_concurrent_batches
                    .unwrap_or(default.max_concurrent_batches),
            )
        } else {
            BatchConfig::default()
        }
    }

    /// Resolve the analysis configuration
    ///
    /// Starts from the `--config` file when given (or the defaults), applies
    /// every explicit flag on top, then validates the result.
    pub fn to_analysis_config(&self) -> Result<AnalysisConfig, AnalysisError> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_toml(&read_input(path)?)?,
            None => AnalysisConfig::default(),
        };

        if let Some(delimiter) = &self.delimiter {
            config.delimiter = delimiter.clone();
        }
        if let Some(top_n) = self.top_n {
            config.top_n = top_n;
        }
        if let Some(rounding) = self.rounding {
            config.rounding = rounding;
        }
        if let Some(sign_convention) = self.sign_convention {
            config.sign_convention = sign_convention;
        }

        config.validate()?;
        Ok(config)
    }

    /// Default tracing filter directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
