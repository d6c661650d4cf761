//! Export crosswalk tables from the local Kidsights DuckDB database to
//! Feather (Arrow IPC) files.
//!
//! The statistical side of the pipeline runs in R and must not link
//! against DuckDB directly, so this crate does the handoff: it opens the
//! database read-only, materializes one table, and writes it to a
//! self-describing columnar file that `arrow::read_feather()` or
//! `pyarrow` can load as-is.
//!
//! # Guarantees
//! - The source database is only ever opened with `AccessMode::ReadOnly`.
//! - The written file mirrors the table exactly: every row, every column,
//!   original column order, no renaming.
//! - An empty table is a failure, not a trivial export; no file is written.
//!
//! # Example
//! ```rust,no_run
//! use std::path::Path;
//!
//! let summary = kidsights_export::export(
//!     "geo_zip_to_puma",
//!     Path::new("temp.feather"),
//!     Path::new("data/duckdb/kidsights_local.duckdb"),
//! )?;
//! println!("exported {} rows", summary.rows);
//! # Ok::<(), kidsights_export::ExportError>(())
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod logging;

pub use config::{DB_PATH_ENV, DEFAULT_DB_PATH};
pub use error::{ExportError, Result};
pub use export::{ExportSummary, export};
pub use logging::init_logging;
