//! I/O module
//!
//! Handles reading export files and writing analysis results.
//!
//! # Components
//!
//! - `reader` - Export file loading and UTF-8 decoding
//! - `csv_format` - Transactions and per-counterparty CSV output
//! - `json_format` - Full analysis as a JSON document
//! - `text_format` - Terminal summary and unmatched-block dump

pub mod csv_format;
pub mod json_format;
pub mod reader;
pub mod text_format;

pub use csv_format::{write_counterparties_csv, write_transactions_csv};
pub use json_format::write_analysis_json;
pub use reader::{decode_input, read_input};
pub use text_format::{write_summary, write_unmatched};
