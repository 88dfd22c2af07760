//! CSV export of the report tables.
//!
//! Writes the three tables with the dashboard's header vocabulary
//! (`Date`, `Ticker`, `Close`, `Pct_Change`, ...); `None` fields
//! serialize as empty cells.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use insights_core::{Error, Result};

use crate::pipeline::Report;

/// File name of the normalized observation table.
pub const RAW_DATA_FILE: &str = "raw_data.csv";
/// File name of the metric table.
pub const METRICS_FILE: &str = "metrics.csv";
/// File name of the summary table.
pub const SUMMARY_FILE: &str = "summary.csv";

/// Write all three tables into `out_dir`, creating it if needed.
///
/// Returns the paths written, in table order.
pub fn write_tables(report: &Report, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    let raw_path = out_dir.join(RAW_DATA_FILE);
    let metrics_path = out_dir.join(METRICS_FILE);
    let summary_path = out_dir.join(SUMMARY_FILE);

    write_csv(&raw_path, &report.observations)?;
    write_csv(&metrics_path, &report.metrics)?;
    write_csv(&summary_path, &report.summary)?;

    info!(out_dir = %out_dir.display(), "report tables written");
    Ok(vec![raw_path, metrics_path, summary_path])
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| Error::export(format!("{}: {e}", path.display())))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
