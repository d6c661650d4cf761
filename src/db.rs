//! Read-only DuckDB connection handling.
//!
//! DuckDB is an embedded, file-based engine, so connection handling is a
//! single handle rather than a pool. Every handle this module hands out is
//! opened with `AccessMode::ReadOnly`: the export path must never be able
//! to mutate the source database.

use crate::error::{ExportError, Result};
use duckdb::{AccessMode, Config, Connection, params};
use std::path::Path;

/// Opens a read-only connection to the database file at `path`.
///
/// # Errors
/// Returns a connection error if the file does not exist or DuckDB cannot
/// open it (locked, corrupt, version mismatch).
pub fn open_read_only(path: &Path) -> Result<Connection> {
    if !path.is_file() {
        return Err(ExportError::Connection {
            context: format!("Database file not found: {}", path.display()),
            source: Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                path.display().to_string(),
            )),
        });
    }

    let config = Config::default()
        .access_mode(AccessMode::ReadOnly)
        .map_err(|e| ExportError::connection_failed("Invalid connection config", e))?;

    Connection::open_with_flags(path, config).map_err(|e| {
        ExportError::connection_failed(
            format!("Failed to open {} read-only", path.display()),
            e,
        )
    })
}

/// Verifies basic connectivity with a trivial query.
///
/// # Errors
/// Returns a query error if `SELECT 1` cannot be executed.
pub fn test_connection(conn: &Connection) -> Result<()> {
    let result: i32 = conn
        .query_row("SELECT 1", [], |row| row.get(0))
        .map_err(|e| ExportError::query_failed("Connectivity check failed", e))?;

    if result != 1 {
        return Err(ExportError::query_rejected(
            "Connectivity check returned unexpected result",
        ));
    }

    Ok(())
}

/// Checks whether `table` names an existing table or view in the `main`
/// schema, the schema the unqualified export query resolves against.
///
/// The lookup is parameterized, so the raw name never reaches the SQL text.
///
/// # Errors
/// Returns a query error if the catalog cannot be read.
pub fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM information_schema.tables \
             WHERE table_schema = 'main' AND table_name = ?",
            params![table],
            |row| row.get(0),
        )
        .map_err(|e| ExportError::query_failed("Failed to query table catalog", e))?;

    Ok(count > 0)
}

/// Lists all tables and views in the database, sorted by name.
///
/// # Errors
/// Returns a query error if the catalog cannot be read.
pub fn list_tables(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT table_name FROM information_schema.tables \
             WHERE table_schema = 'main' ORDER BY table_name",
        )
        .map_err(|e| ExportError::query_failed("Failed to query table catalog", e))?;

    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| ExportError::query_failed("Failed to query table catalog", e))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| ExportError::query_failed("Failed to read table names", e))?;

    Ok(names)
}
