//! SAHAL Ledger Library
//! # Overview
//!
//! This library extracts structured transactions from exported SAHAL
//! mobile-money notifications and folds them into per-counterparty balances
//! and an aggregate report. Processing can run single-threaded or as an
//! order-preserving batch computation across worker threads.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, LedgerEntry, AnalysisReport, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Extraction pipeline:
//!   - [`core::splitter`] - Splits the export into blocks
//!   - [`core::dates`] - Finds a timestamp in a block
//!   - [`core::classifier`] - Matches a block against the notification phrasings
//!   - [`core::builder`] - Turns each block into a transaction or an unmatched block
//!   - [`core::aggregator`] - Builds the ledger and the report
//! - [`strategy`] - Runtime-selectable sync and async processing
//! - [`io`] - File reading and CSV/JSON/text output
//!
//! # Transaction Kinds
//!
//! - **SentToPerson**: "$50.00 ayaad u dirtay John Doe(" (sent)
//! - **ReceivedFromPerson**: "Waxaad $25.00 ka heshay Jane Smith(" (received)
//! - **SentToNumber**: "Waxaad $10.00 ugu shubtay 252907123456" (sent)
//! - **AirtimeReceived**: "You have received airtime of $5.00 from 252908123456" (received)
//!
//! # Example
//!
//! ```
//! use sahal_ledger::{AnalysisConfig, AnalysisEngine};
//!
//! let engine = AnalysisEngine::new(AnalysisConfig::default());
//! let analysis = engine.analyze("[SAHAL]\nWaxaad $25.00 ka heshay Jane Smith(");
//! assert_eq!(analysis.report.transaction_count, 1);
//! assert_eq!(analysis.report.total_received.to_string(), "25.00");
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{Analysis, AnalysisEngine, DateExtractor, PatternClassifier};
pub use io::{write_analysis_json, write_summary, write_transactions_csv};
pub use types::{
    AnalysisConfig, AnalysisError, AnalysisReport, CounterpartyId, LedgerEntry, SignConvention,
    Transaction, TransactionKind,
};
