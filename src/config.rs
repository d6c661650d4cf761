//! Database path resolution and table identifier handling.
//!
//! The database location resolves in a documented order: `--db` flag, then
//! the `KIDSIGHTS_DB_PATH` environment variable, then a fixed default
//! relative to the working directory. The flag/env layering itself is done
//! by clap; this module owns the default and the identifier rules.

use crate::error::{ExportError, Result};

/// Default location of the local DuckDB database, relative to the
/// repository root the pipeline runs from.
pub const DEFAULT_DB_PATH: &str = "data/duckdb/kidsights_local.duckdb";

/// Environment variable consulted when `--db` is not passed.
pub const DB_PATH_ENV: &str = "KIDSIGHTS_DB_PATH";

/// Validates a table name before it is spliced into a query.
///
/// The name is caller-trusted in the sense that any existing table may be
/// exported, but it must be a plausible identifier: non-empty, no embedded
/// NUL, and short enough to be a real catalog entry. Everything else is
/// handled by quoting.
///
/// # Errors
/// Returns a configuration error for an empty or malformed name.
pub fn validate_table_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ExportError::configuration("Table name must not be empty"));
    }
    if name.contains('\0') {
        return Err(ExportError::configuration(
            "Table name must not contain NUL bytes",
        ));
    }
    if name.len() > 256 {
        return Err(ExportError::configuration(
            "Table name exceeds 256 characters",
        ));
    }
    Ok(())
}

/// Quotes a table name as a DuckDB identifier.
///
/// Double quotes delimit identifiers in DuckDB; embedded quotes are doubled.
/// Combined with the existence pre-check this closes the injection hole of
/// interpolating the raw name into `SELECT * FROM ...`.
#[must_use]
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
