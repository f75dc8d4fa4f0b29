//! Analysis engine
//!
//! This module provides the AnalysisEngine that orchestrates one analysis run
//! by coordinating the splitter, the record builder and the aggregator.
//!
//! The data flow is strictly:
//!
//! ```text
//! split_blocks → RecordBuilder (classifier ∥ date extractor) → Extraction → Aggregator
//! ```
//!
//! Per-block work (`build`) is a pure function of block text and may run on
//! any thread. Aggregation (`finish`) is a single reduction over the complete,
//! re-ordered outcome list.

use crate::core::aggregator::Aggregator;
use crate::core::builder::{Extraction, RecordBuilder};
use crate::core::classifier::PatternClassifier;
use crate::core::dates::DateExtractor;
use crate::core::splitter::split_blocks;
use crate::types::{
    AnalysisConfig, AnalysisReport, BlockOutcome, LedgerEntry, RawBlock, Transaction,
    UnmatchedBlock,
};
use serde::Serialize;
use tracing::info;

/// Complete output of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub report: AnalysisReport,

    /// Ledger entries in first-seen order
    pub counterparties: Vec<LedgerEntry>,

    /// Transactions in source block order
    pub transactions: Vec<Transaction>,

    /// Unmatched blocks in source block order
    pub unmatched: Vec<UnmatchedBlock>,
}

/// Extraction and aggregation engine
///
/// Holds no per-run state, so one engine can serve any number of runs.
#[derive(Debug)]
pub struct AnalysisEngine {
    config: AnalysisConfig,
    builder: RecordBuilder,
    aggregator: Aggregator,
}

impl AnalysisEngine {
    /// Create an engine with the standard SAHAL rules and date patterns
    pub fn new(config: AnalysisConfig) -> Self {
        Self::with_components(
            config,
            PatternClassifier::standard(),
            DateExtractor::standard(),
        )
    }

    /// Create an engine with a custom classifier and date extractor
    pub fn with_components(
        config: AnalysisConfig,
        classifier: PatternClassifier,
        dates: DateExtractor,
    ) -> Self {
        let rounding = config.rounding.strategy();
        let builder = RecordBuilder::new(classifier, dates, rounding);
        let aggregator = Aggregator::new(config.sign_convention, rounding, config.top_n);
        AnalysisEngine {
            config,
            builder,
            aggregator,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Split input text on the configured delimiter
    pub fn split(&self, input: &str) -> Vec<RawBlock> {
        split_blocks(input, &self.config.delimiter)
    }

    /// Classify and date one block
    pub fn build(&self, block: RawBlock) -> BlockOutcome {
        self.builder.build(block)
    }

    /// Aggregate a complete set of block outcomes into an analysis
    ///
    /// Outcomes may be in any order; they are put back into block order
    /// before anything is folded.
    pub fn finish(&self, outcomes: Vec<BlockOutcome>) -> Analysis {
        let block_count = outcomes.len();
        let Extraction {
            transactions,
            unmatched,
        } = Extraction::from_outcomes(outcomes);

        let (ledger, report) = self.aggregator.aggregate(&transactions, unmatched.len());

        info!(
            blocks = block_count,
            transactions = transactions.len(),
            unmatched = unmatched.len(),
            undated = report.undated_count,
            counterparties = report.unique_counterparties,
            "analysis complete"
        );

        Analysis {
            report,
            counterparties: ledger.into_entries(),
            transactions,
            unmatched,
        }
    }

    /// Run the whole pipeline on one input text, single-threaded
    pub fn analyze(&self, input: &str) -> Analysis {
        let blocks = self.split(input);
        let outcomes = self.builder.build_all(blocks);
        self.finish(outcomes)
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
