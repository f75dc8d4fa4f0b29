//! Processing strategy module for notification analysis
//!
//! This module defines the Strategy pattern for complete analysis pipelines,
//! from reading the export file through block classification to the final
//! reduction. Different implementations (synchronous, asynchronous batch)
//! can be selected at runtime and always produce the same `Analysis`.

use crate::cli::StrategyType;
use crate::core::Analysis;
use crate::io::read_input;
use crate::types::{AnalysisConfig, AnalysisError};
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete analysis pipelines
///
/// Implementations differ only in how per-block classification is scheduled.
/// Aggregation is always a single reduction over the re-ordered outcomes, so
/// every strategy yields identical results for the same input and config.
pub trait ProcessingStrategy: Send + Sync {
    /// Analyze already-decoded export text
    ///
    /// # Errors
    ///
    /// Returns an error only when the strategy itself cannot run (e.g. the
    /// async runtime fails to start or a worker panics). Unmatched and
    /// undated blocks are reported in the `Analysis`, never as errors.
    fn analyze(&self, input: &str) -> Result<Analysis, AnalysisError>;

    /// Read an export file and analyze it
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (file not found, permission denied)
    /// - The file content is not valid UTF-8
    /// - `analyze` fails
    fn process(&self, input_path: &Path) -> Result<Analysis, AnalysisError> {
        let input = read_input(input_path)?;
        self.analyze(&input)
    }
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Analysis configuration shared by every strategy
/// * `batch` - Optional batch configuration (ignored for sync)
pub fn create_strategy(
    strategy_type: StrategyType,
    config: AnalysisConfig,
    batch: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(config)),
        StrategyType::Async => {
            let batch = batch.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config, batch))
        }
    }
}
