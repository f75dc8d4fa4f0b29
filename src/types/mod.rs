//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Blocks, kinds, amounts, counterparties and transactions
//! - `ledger`: Per-counterparty ledger entries and ranking rows
//! - `report`: The aggregate analysis report
//! - `config`: Engine configuration
//! - `error`: Error types for the analyzer

pub mod config;
pub mod error;
pub mod ledger;
pub mod report;
pub mod transaction;

pub use config::{AnalysisConfig, RoundingMode, SignConvention};
pub use error::AnalysisError;
pub use ledger::{KindTotal, LedgerEntry, RankedCounterparty};
pub use report::{AnalysisReport, DateRangeSummary};
pub use transaction::{
    Amount, BlockIndex, BlockOutcome, Classification, CounterpartyId, Direction, RawBlock,
    Transaction, TransactionKind, UnmatchedBlock,
};
