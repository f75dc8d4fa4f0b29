//! Error types for the SAHAL ledger
//!
//! Only run-level failures are errors. A block that matches no rule, an
//! undated block, or a malformed amount are ordinary data and never surface
//! here.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Input Errors**: Input bytes that are not valid UTF-8 text
//! - **Configuration Errors**: Unreadable TOML, empty delimiter, zero top-N
//! - **Output Errors**: Failed CSV/JSON serialization
//! - **Worker Errors**: A batch task that panicked in the async strategy

use thiserror::Error;

/// Main error type for the analyzer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Input is not decodable as text
    ///
    /// Reported before any block is processed.
    #[error("Invalid input: {message} (at byte {offset})")]
    InvalidInput {
        /// Byte offset of the first undecodable sequence
        offset: usize,
        /// Description of the decoding failure
        message: String,
    },

    /// Configuration could not be loaded or failed validation
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration problem
        message: String,
    },

    /// Report serialization failed
    #[error("Output error: {message}")]
    OutputError {
        /// Description of the serialization failure
        message: String,
    },

    /// A classification worker panicked or was cancelled
    #[error("Worker failed: {message}")]
    WorkerFailed {
        /// Description of the join failure
        message: String,
    },
}

impl From<std::io::Error> for AnalysisError {
    fn from(error: std::io::Error) -> Self {
        AnalysisError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for AnalysisError {
    fn from(error: csv::Error) -> Self {
        AnalysisError::OutputError {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(error: serde_json::Error) -> Self {
        AnalysisError::OutputError {
            message: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for AnalysisError {
    fn from(error: toml::de::Error) -> Self {
        AnalysisError::InvalidConfig {
            message: error.message().to_string(),
        }
    }
}

impl From<std::string::FromUtf8Error> for AnalysisError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        let utf8 = error.utf8_error();
        AnalysisError::invalid_input(utf8.valid_up_to(), &utf8.to_string())
    }
}

// Helper functions for creating common errors

impl AnalysisError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        AnalysisError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(offset: usize, message: &str) -> Self {
        AnalysisError::InvalidInput {
            offset,
            message: message.to_string(),
        }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(message: &str) -> Self {
        AnalysisError::InvalidConfig {
            message: message.to_string(),
        }
    }

    /// Create an OutputError error
    pub fn output(message: &str) -> Self {
        AnalysisError::OutputError {
            message: message.to_string(),
        }
    }

    /// Create a WorkerFailed error
    pub fn worker_failed(message: &str) -> Self {
        AnalysisError::WorkerFailed {
            message: message.to_string(),
        }
    }
}
