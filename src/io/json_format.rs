//! JSON export of a complete analysis
//!
//! The document has four top-level keys: `report`, `counterparties`,
//! `transactions` and `unmatched`. Decimal values are serialized as strings
//! so no precision is lost.

use crate::core::Analysis;
use crate::types::AnalysisError;
use std::io::Write;

/// Write an analysis as a pretty-printed JSON document
pub fn write_analysis_json(
    analysis: &Analysis,
    output: &mut dyn Write,
) -> Result<(), AnalysisError> {
    serde_json::to_writer_pretty(&mut *output, analysis)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
