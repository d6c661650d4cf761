//! Error types for the export pipeline.
//!
//! Every failure the tool can hit maps to one variant of [`ExportError`],
//! so callers can branch on cause instead of parsing diagnostic text.
//! The empty-table condition gets its own variant: it is an expected but
//! unsuccessful outcome, not a generic error.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Database could not be opened (missing file, lock, incompatible format)
    #[error("Database connection failed: {context}")]
    Connection {
        /// Human-readable description of what failed
        context: String,
        /// Underlying driver error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Query execution failed (table missing, malformed statement)
    #[error("Query failed: {context}")]
    Query {
        /// Human-readable description of what failed
        context: String,
        /// Underlying driver error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Query succeeded but the table holds zero rows
    #[error("Table {table} is empty")]
    EmptyTable {
        /// Name of the empty table
        table: String,
    },

    /// Arrow IPC serialization failed
    #[error("Serialization failed for {}: {source}", path.display())]
    Serialization {
        /// Destination path being written
        path: PathBuf,
        /// Underlying Arrow error
        #[source]
        source: arrow::error::ArrowError,
    },

    /// I/O operation failed
    #[error("I/O operation failed: {context}")]
    Io {
        /// Human-readable description of what failed
        context: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration or validation error
    #[error("Configuration error: {message}")]
    Configuration {
        /// What was invalid
        message: String,
    },
}

/// Convenience type alias for Results with `ExportError`.
pub type Result<T> = std::result::Result<T, ExportError>;

impl ExportError {
    /// Creates a connection error with context.
    pub fn connection_failed<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Connection {
            context: context.into(),
            source: Box::new(error),
        }
    }

    /// Creates a query error with an underlying driver error.
    pub fn query_failed<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Query {
            context: context.into(),
            source: Some(Box::new(error)),
        }
    }

    /// Creates a query error with no underlying source (e.g. missing table).
    pub fn query_rejected(context: impl Into<String>) -> Self {
        Self::Query {
            context: context.into(),
            source: None,
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for the empty-table condition, which the CLI reports as a
    /// warning rather than an error.
    #[must_use]
    pub fn is_empty_table(&self) -> bool {
        matches!(self, Self::EmptyTable { .. })
    }
}
