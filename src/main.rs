//! Command-line entry point for the table exporter.
//!
//! One invocation exports one table. All failures collapse to exit code 1;
//! stderr text distinguishes the empty-table warning from real errors.

use clap::{Args, Parser, Subcommand};
use kidsights_export::{DB_PATH_ENV, DEFAULT_DB_PATH, ExportError, db, export, init_logging};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "kidsights-export")]
#[command(about = "Export a DuckDB table to a Feather file")]
#[command(version)]
#[command(long_about = "
Kidsights table exporter

Exports one table from the local DuckDB database to a Feather (Arrow IPC)
file so the R side of the pipeline can read it without a DuckDB driver.

The database is always opened read-only. The export mirrors the table
exactly: every row, every column, original order.

EXAMPLES:
  kidsights-export --table geo_zip_to_puma --output temp.feather
  kidsights-export --table ne25_raw --output ne25.feather --db /data/local.duckdb
  kidsights-export list-tables
")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Command>,

    /// Table to export
    #[arg(long, help = "Name of the table or view to export")]
    table: Option<String>,

    /// Destination file path
    #[arg(
        short,
        long,
        help = "Output file path (.feather); parent directory must exist"
    )]
    output: Option<PathBuf>,

    /// Database file path (flag > env > default)
    #[arg(
        long,
        env = DB_PATH_ENV,
        default_value = DEFAULT_DB_PATH,
        help = "Path to the DuckDB database file"
    )]
    db: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Export a table to a Feather file
    Export(ExportArgs),
    /// Test that the database can be opened read-only
    Test,
    /// List tables and views in the database
    ListTables,
}

#[derive(Args)]
struct ExportArgs {
    /// Table to export
    #[arg(long)]
    table: String,

    /// Destination file path
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct GlobalArgs {
    /// Increase verbosity
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv)"
    )]
    verbose: u8,

    /// Suppress output
    #[arg(short, long, help = "Suppress all diagnostics except errors")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.global.verbose, cli.global.quiet) {
        eprintln!("ERROR: {e}");
        return ExitCode::FAILURE;
    }

    let result = match &cli.command {
        Some(Command::Export(args)) => run_export(&args.table, &args.output, &cli.db),
        Some(Command::Test) => run_test(&cli.db),
        Some(Command::ListTables) => run_list_tables(&cli.db),
        None => match (&cli.table, &cli.output) {
            (Some(table), Some(output)) => run_export(table, output, &cli.db),
            _ => {
                eprintln!("ERROR: --table and --output are required");
                eprintln!("Use --help for usage information");
                return ExitCode::FAILURE;
            }
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the export and prints the contracted success line.
fn run_export(table: &str, output: &Path, db_path: &Path) -> Result<(), ExportError> {
    let summary = export(table, output, db_path)?;

    println!(
        "SUCCESS: Exported {} rows from {} to {}",
        summary.rows,
        summary.table,
        summary.output.display()
    );

    Ok(())
}

/// Opens the database read-only and runs a trivial query.
fn run_test(db_path: &Path) -> Result<(), ExportError> {
    let conn = db::open_read_only(db_path)?;
    db::test_connection(&conn)?;

    println!("Connection to {} successful", db_path.display());

    Ok(())
}

/// Prints all table and view names, one per line.
fn run_list_tables(db_path: &Path) -> Result<(), ExportError> {
    let conn = db::open_read_only(db_path)?;
    let tables = db::list_tables(&conn)?;

    for table in tables {
        println!("{table}");
    }

    Ok(())
}

/// Prints the contracted stderr line for a failed run.
///
/// The empty-table condition is a warning; everything else is an error.
fn report_failure(e: &ExportError) {
    if e.is_empty_table() {
        eprintln!("WARNING: {e}");
    } else {
        debug!("Export failed: {e}");
        eprintln!("ERROR: {e}");
    }
}
