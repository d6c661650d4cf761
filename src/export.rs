//! The export operation: one table, one Feather file.
//!
//! The result set is materialized as Arrow record batches straight from
//! DuckDB, the connection is dropped, and the batches are written to the
//! Arrow IPC file format (Feather v2). The output is self-describing:
//! column names and types travel with the data, so R or Python can read it
//! without linking DuckDB.
//!
//! Known limitation: if the write fails partway, a truncated file may be
//! left at the output path. Nothing cleans it up.

use crate::config::{quote_identifier, validate_table_name};
use crate::db;
use crate::error::{ExportError, Result};
use arrow::datatypes::SchemaRef;
use arrow::ipc::writer::FileWriter;
use arrow::record_batch::RecordBatch;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a successful export.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Table the rows came from
    pub table: String,
    /// Number of rows written
    pub rows: usize,
    /// Destination file
    pub output: PathBuf,
}

/// Exports every row and column of `table` to a Feather file at `output`.
///
/// The source database is opened read-only and the connection is released
/// before serialization begins, so no lock is held while the file is
/// written. An empty table is reported as [`ExportError::EmptyTable`] and
/// no file is created.
///
/// # Errors
/// Returns a variant of [`ExportError`] for every failure mode: connection,
/// missing table, empty table, serialization, or I/O.
pub fn export(table: &str, output: &Path, db_path: &Path) -> Result<ExportSummary> {
    validate_table_name(table)?;

    info!("Exporting table '{}' from {}", table, db_path.display());

    let conn = db::open_read_only(db_path)?;

    if !db::table_exists(&conn, table)? {
        return Err(ExportError::query_rejected(format!(
            "Table '{table}' does not exist in {}",
            db_path.display()
        )));
    }

    let (schema, batches) = fetch_table(&conn, table)?;

    // Release the database before touching the filesystem. The batches are
    // fully materialized at this point.
    drop(conn);

    let rows: usize = batches.iter().map(RecordBatch::num_rows).sum();
    debug!("Materialized {} rows in {} batches", rows, batches.len());

    if rows == 0 {
        return Err(ExportError::EmptyTable {
            table: table.to_string(),
        });
    }

    write_feather(output, &schema, &batches)?;

    info!("Wrote {} rows to {}", rows, output.display());

    Ok(ExportSummary {
        table: table.to_string(),
        rows,
        output: output.to_path_buf(),
    })
}

/// Runs `SELECT *` against the table and materializes all record batches.
fn fetch_table(conn: &duckdb::Connection, table: &str) -> Result<(SchemaRef, Vec<RecordBatch>)> {
    let sql = format!("SELECT * FROM {}", quote_identifier(table));

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| ExportError::query_failed(format!("Failed to prepare query for '{table}'"), e))?;

    let arrow = stmt
        .query_arrow([])
        .map_err(|e| ExportError::query_failed(format!("Failed to query table '{table}'"), e))?;

    let schema = arrow.get_schema();
    let batches: Vec<RecordBatch> = arrow.collect();

    Ok((schema, batches))
}

/// Writes the batches to `output` in the Arrow IPC file format.
fn write_feather(output: &Path, schema: &SchemaRef, batches: &[RecordBatch]) -> Result<()> {
    let file = File::create(output).map_err(|e| ExportError::Io {
        context: format!("Failed to create {}", output.display()),
        source: e,
    })?;

    let mut writer = FileWriter::try_new(file, schema).map_err(|e| ExportError::Serialization {
        path: output.to_path_buf(),
        source: e,
    })?;

    for batch in batches {
        writer.write(batch).map_err(|e| ExportError::Serialization {
            path: output.to_path_buf(),
            source: e,
        })?;
    }

    writer.finish().map_err(|e| ExportError::Serialization {
        path: output.to_path_buf(),
        source: e,
    })
}
