//! The `analyze` command: load, report, export.

use std::io::Write;

use jobscope_analysis::{analyze, export_csv, write_report, ReportOptions};
use jobscope_core::AppConfig;
use sqlx::SqlitePool;

/// Loads every stored listing, prints the report and writes the CSV export.
///
/// # Errors
///
/// Returns an error if the table cannot be read, stdout cannot be written,
/// or the export file cannot be created.
pub(crate) async fn run_analyze(
    pool: &SqlitePool,
    config: &AppConfig,
    charts: bool,
) -> anyhow::Result<()> {
    let rows = jobscope_db::list_listings(pool).await?;
    tracing::info!(rows = rows.len(), "listings loaded");

    let report = analyze(rows);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &report, ReportOptions { charts })?;

    let written = export_csv(&config.export_path, &report.listings)?;
    tracing::info!(
        rows = written,
        path = %config.export_path.display(),
        "export written"
    );
    writeln!(out, "\nAnalysis complete.")?;
    out.flush()?;

    Ok(())
}
