//! Asynchronous batch processing strategy
//!
//! This module provides a multi-threaded implementation of the
//! ProcessingStrategy trait. Blocks are classified in contiguous batches on a
//! tokio multi-threaded runtime and reduced once at the end.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── BatchProcessor (contiguous partitioning + tokio tasks)
//!     └── Arc<AnalysisEngine> (read-only, shared by every task)
//! ```
//!
//! # Ordering
//!
//! Batch results are gathered in spawn order and the engine re-sorts
//! outcomes by block index before folding, so rankings and first-seen
//! display names never depend on which task finished first.

use crate::core::{Analysis, AnalysisEngine, BatchProcessor};
use crate::strategy::ProcessingStrategy;
use crate::types::{AnalysisConfig, AnalysisError};
use std::sync::Arc;
use tracing::{debug, warn};

/// Default number of blocks per batch
pub const DEFAULT_BATCH_SIZE: usize = 256;

/// Configuration for batch processing
///
/// Controls how blocks are batched and the number of worker threads used to
/// classify batches in parallel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of blocks per batch
    pub batch_size: usize,
    /// Number of worker threads classifying batches concurrently
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// Zero values fall back to the defaults with a warning.
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            warn!(
                "invalid batch_size ({}), using default ({})",
                batch_size, default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            warn!(
                "invalid max_concurrent_batches ({}), using default ({})",
                max_concurrent_batches, default.max_concurrent_batches
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch processing strategy
///
/// The strategy owns its engine; each call to `analyze` builds a dedicated
/// runtime sized by `max_concurrent_batches`, so it must not be called from
/// inside another tokio runtime.
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    engine: Arc<AnalysisEngine>,
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(analysis: AnalysisConfig, config: BatchConfig) -> Self {
        Self {
            engine: Arc::new(AnalysisEngine::new(analysis)),
            config,
        }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn analyze(&self, input: &str) -> Result<Analysis, AnalysisError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(|e| AnalysisError::worker_failed(&format!("failed to start runtime: {}", e)))?;

        let blocks = self.engine.split(input);
        debug!(
            blocks = blocks.len(),
            batch_size = self.config.batch_size,
            workers = self.config.max_concurrent_batches,
            "classifying blocks in batches"
        );

        let processor = BatchProcessor::new(Arc::clone(&self.engine));
        let outcomes =
            runtime.block_on(processor.process_blocks(blocks, self.config.batch_size))?;

        Ok(self.engine.finish(outcomes))
    }
}
