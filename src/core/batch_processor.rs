//! Order-preserving batch processing across worker tasks
//!
//! This module provides the `BatchProcessor` struct, which classifies blocks
//! concurrently and hands back the outcomes in original block order.
//!
//! # Design
//!
//! Blocks are partitioned into contiguous batches. Each batch is classified
//! on its own tokio task; tasks share the engine read-only through an `Arc`.
//! Task results are gathered in spawn order, which is block order, so no
//! locks or shared mutable state are needed. Aggregation is left to the
//! caller as one reduction after every batch has finished.
//!
//! # Architecture
//!
//! ```text
//! BatchProcessor
//!     └── Arc<AnalysisEngine>  (shared, read-only)
//! ```

use std::sync::Arc;

use futures::future::join_all;

use super::engine::AnalysisEngine;
use crate::types::{AnalysisError, BlockOutcome, RawBlock};

/// Batch processor with contiguous, order-preserving partitioning
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    /// Shared extraction engine
    engine: Arc<AnalysisEngine>,
}

impl BatchProcessor {
    pub fn new(engine: Arc<AnalysisEngine>) -> Self {
        Self { engine }
    }

    /// Partition blocks into contiguous batches of at most `batch_size`
    ///
    /// # Guarantees
    ///
    /// - Each block appears in exactly one batch
    /// - Concatenating the batches yields the input order
    /// - A zero `batch_size` is treated as 1
    pub fn partition(&self, blocks: Vec<RawBlock>, batch_size: usize) -> Vec<Vec<RawBlock>> {
        let batch_size = batch_size.max(1);
        let mut batches = Vec::with_capacity(blocks.len().div_ceil(batch_size));
        let mut current = Vec::with_capacity(batch_size);

        for block in blocks {
            current.push(block);
            if current.len() == batch_size {
                batches.push(std::mem::replace(
                    &mut current,
                    Vec::with_capacity(batch_size),
                ));
            }
        }
        if !current.is_empty() {
            batches.push(current);
        }

        batches
    }

    /// Classify one batch sequentially
    pub fn process_batch(&self, batch: Vec<RawBlock>) -> Vec<BlockOutcome> {
        batch
            .into_iter()
            .map(|block| self.engine.build(block))
            .collect()
    }

    /// Classify all blocks across tokio tasks, one task per batch
    ///
    /// Returns outcomes in block order. A panicked worker aborts the run
    /// with an error rather than silently dropping its blocks.
    pub async fn process_blocks(
        &self,
        blocks: Vec<RawBlock>,
        batch_size: usize,
    ) -> Result<Vec<BlockOutcome>, AnalysisError> {
        let block_count = blocks.len();
        let tasks: Vec<_> = self
            .partition(blocks, batch_size)
            .into_iter()
            .map(|batch| {
                let processor = self.clone();
                tokio::spawn(async move { processor.process_batch(batch) })
            })
            .collect();

        let mut outcomes = Vec::with_capacity(block_count);
        for joined in join_all(tasks).await {
            let batch_outcomes = joined.map_err(|e| AnalysisError::worker_failed(&e.to_string()))?;
            outcomes.extend(batch_outcomes);
        }

        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnalysisConfig;

    fn processor() -> BatchProcessor {
        BatchProcessor::new(Arc::new(AnalysisEngine::new(AnalysisConfig::default())))
    }

    fn blocks(n: usize) -> Vec<RawBlock> {
        (0..n)
            .map(|i| RawBlock::new(i, format!("${}.00 ayaad u dirtay Person {}(", i + 1, i)))
            .collect()
    }

    #[test]
    fn test_partition_empty() {
        assert!(processor().partition(Vec::new(), 4).is_empty());
    }

    #[test]
    fn test_partition_sizes() {
        let batches = processor().partition(blocks(10), 4);
        let sizes: Vec<_> = batches.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![4, 4, 2]);
    }

    #[test]
    fn test_partition_preserves_order_without_loss() {
        let batches = processor().partition(blocks(7), 3);
        let indices: Vec<_> = batches.into_iter().flatten().map(|b| b.index).collect();
        assert_eq!(indices, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn test_partition_zero_batch_size() {
        let batches = processor().partition(blocks(3), 0);
        assert_eq!(batches.len(), 3);
    }

    #[test]
    fn test_processor_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BatchProcessor>();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_process_blocks_returns_block_order() {
        let outcomes = processor().process_blocks(blocks(50), 3).await.unwrap();
        let indices: Vec<_> = outcomes.iter().map(BlockOutcome::block_index).collect();
        assert_eq!(indices, (0..50).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_process_blocks_matches_sequential() {
        let p = processor();
        let parallel = p.process_blocks(blocks(20), 6).await.unwrap();
        let sequential = p.process_batch(blocks(20));
        assert_eq!(parallel, sequential);
    }
}
