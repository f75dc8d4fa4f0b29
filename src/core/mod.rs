//! Core extraction logic module
//!
//! This module contains the notification processing components:
//! - `splitter` - Block splitting on the export delimiter
//! - `dates` - Timestamp extraction from block text
//! - `classifier` - Ordered transaction-pattern rules
//! - `builder` - Per-block transaction or unmatched outcome
//! - `aggregator` - Ledger and report reduction
//! - `engine` - Pipeline orchestration
//! - `batch_processor` - Order-preserving parallel classification
//! - `traits` - Trait abstractions for interchangeable rules and patterns

// Lazily compiled regex, built once on first use
macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static Regex {
            static R: OnceLock<Regex> = OnceLock::new();
            R.get_or_init(|| Regex::new($pat).expect("invalid regex"))
        }
    };
}

pub mod aggregator;
pub mod batch_processor;
pub mod builder;
pub mod classifier;
pub mod dates;
pub mod engine;
pub mod splitter;
pub mod traits;

pub use aggregator::{Aggregator, Ledger};
pub use batch_processor::BatchProcessor;
pub use builder::{Extraction, RecordBuilder};
pub use classifier::{parse_amount, PatternClassifier, PhraseRule};
pub use dates::{DateExtractor, FullTextualDate, ShortNumericDate};
pub use engine::{Analysis, AnalysisEngine};
pub use splitter::split_blocks;
pub use traits::{ClassificationRule, DatePattern};
