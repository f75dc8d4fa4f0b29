//! Synchronous processing strategy
//!
//! This module provides a single-threaded implementation of the
//! ProcessingStrategy trait. Every block is split, classified and dated on
//! the calling thread, then folded once by the engine.

use crate::core::{Analysis, AnalysisEngine};
use crate::strategy::ProcessingStrategy;
use crate::types::{AnalysisConfig, AnalysisError};

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use sahal_ledger::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use sahal_ledger::types::AnalysisConfig;
/// use std::path::Path;
///
/// let strategy = SyncProcessingStrategy::new(AnalysisConfig::default());
/// let analysis = strategy.process(Path::new("sahal_export.txt"))
///     .expect("Processing failed");
/// println!("{} transactions", analysis.report.transaction_count);
/// ```
#[derive(Debug)]
pub struct SyncProcessingStrategy {
    engine: AnalysisEngine,
}

impl SyncProcessingStrategy {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            engine: AnalysisEngine::new(config),
        }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    fn analyze(&self, input: &str) -> Result<Analysis, AnalysisError> {
        Ok(self.engine.analyze(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary export file for testing
    fn create_temp_export(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content).expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_sync_strategy_processes_file() {
        let file = create_temp_export(b"[SAHAL]\nWaxaad $10.00 ugu shubtay 252907123456\n");
        let strategy = SyncProcessingStrategy::new(AnalysisConfig::default());

        let analysis = strategy.process(file.path()).unwrap();
        assert_eq!(analysis.transactions.len(), 1);
        assert_eq!(
            analysis.transactions[0].counterparty().display(),
            "252907123456"
        );
    }

    #[test]
    fn test_sync_strategy_handles_missing_file() {
        let strategy = SyncProcessingStrategy::new(AnalysisConfig::default());
        let result = strategy.process(Path::new("nonexistent.txt"));
        assert!(matches!(result, Err(AnalysisError::FileNotFound { .. })));
    }

    #[test]
    fn test_sync_strategy_rejects_binary_input() {
        let file = create_temp_export(&[b'[', 0xC3, 0x28, b']']);
        let strategy = SyncProcessingStrategy::new(AnalysisConfig::default());
        let result = strategy.process(file.path());
        assert!(matches!(
            result,
            Err(AnalysisError::InvalidInput { offset: 1, .. })
        ));
    }

    #[test]
    fn test_sync_strategy_continues_past_unmatched_blocks() {
        let file = create_temp_export(
            b"[SAHAL]\n$5.00 ayaad u dirtay Ali(\n[SAHAL]\ngarbage $$$\n[SAHAL]\nWaxaad $2.00 ka heshay Omar(",
        );
        let strategy = SyncProcessingStrategy::new(AnalysisConfig::default());

        let analysis = strategy.process(file.path()).unwrap();
        assert_eq!(analysis.transactions.len(), 2);
        assert_eq!(analysis.unmatched.len(), 1);
        assert_eq!(analysis.unmatched[0].index, 1);
    }

    #[test]
    fn test_sync_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SyncProcessingStrategy>();
    }
}
