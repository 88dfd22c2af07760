//! Price series normalization.
//!
//! Turns raw tabular sources into clean per-ticker series: resolves
//! the required columns per source, coerces cell types, drops rows
//! that fail coercion, groups observations by ticker, sorts each group
//! by date, and collapses duplicate dates.
//!
//! Dropped rows and skipped sources are expected input conditions, not
//! errors; the only fatal case is zero usable sources.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, warn};

use insights_core::{Error, Observation, Result, Series};

use crate::source::{resolve_columns, RawTable, REQUIRED_COLUMNS};

/// Date formats accepted during coercion.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Statistics about a normalization pass.
#[derive(Debug, Clone, Default)]
pub struct IngestStats {
    /// Sources that carried all required columns.
    pub sources_used: usize,
    /// Sources skipped for missing required columns.
    pub sources_skipped: usize,
    /// Rows seen across usable sources.
    pub rows_read: usize,
    /// Rows dropped for an unparseable date, ticker, or close.
    pub rows_dropped: usize,
    /// Rows removed as duplicate dates within a ticker.
    pub rows_deduplicated: usize,
}

impl IngestStats {
    /// Fraction of rows dropped during coercion.
    pub fn dropped_frac(&self) -> f64 {
        if self.rows_read > 0 {
            self.rows_dropped as f64 / self.rows_read as f64
        } else {
            0.0
        }
    }
}

/// Normalizer output: per-ticker series plus pass statistics.
#[derive(Debug, Clone)]
pub struct NormalizedData {
    /// Series in alphabetical ticker order, each date ascending.
    pub series: Vec<Series>,
    /// What happened on the way in.
    pub stats: IngestStats,
}

/// Parse a date cell, trying each accepted format in order.
pub fn parse_date(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(cell, format).ok())
}

/// Parse a close cell. Prices must be finite and non-negative.
fn parse_close(cell: &str) -> Option<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|close| close.is_finite() && *close >= 0.0)
}

/// Normalize raw sources into per-ticker series.
///
/// Fails with [`Error::NoValidInput`] only when no source carries all
/// of `Date`/`Ticker`/`Close`; everything else degrades row by row.
pub fn normalize(tables: &[RawTable]) -> Result<NormalizedData> {
    let mut stats = IngestStats::default();
    let mut groups: BTreeMap<String, Vec<Observation>> = BTreeMap::new();

    for table in tables {
        let Some(cols) = resolve_columns(&table.columns) else {
            warn!(
                source = %table.name,
                "skipping source without Date/Ticker/Close columns"
            );
            stats.sources_skipped += 1;
            continue;
        };
        stats.sources_used += 1;

        for row in &table.rows {
            stats.rows_read += 1;

            let date = row.get(cols.date).and_then(|cell| parse_date(cell));
            let close = row.get(cols.close).and_then(|cell| parse_close(cell));
            let ticker = row
                .get(cols.ticker)
                .map(|cell| cell.trim())
                .filter(|ticker| !ticker.is_empty());

            let (Some(date), Some(close), Some(ticker)) = (date, close, ticker) else {
                stats.rows_dropped += 1;
                continue;
            };

            groups.entry(ticker.to_string()).or_default().push(Observation {
                date,
                ticker: ticker.to_string(),
                close,
            });
        }
    }

    if stats.sources_used == 0 {
        return Err(Error::no_valid_input(format!(
            "no source with columns {}",
            REQUIRED_COLUMNS.join("/")
        )));
    }

    let mut series = Vec::with_capacity(groups.len());
    for (ticker, mut observations) in groups {
        observations.sort_by_key(|obs| obs.date);

        // Duplicate dates: keep the last occurrence. The sort is
        // stable, so reversing makes the winner the first of each run.
        let before = observations.len();
        observations.reverse();
        observations.dedup_by_key(|obs| obs.date);
        observations.reverse();
        stats.rows_deduplicated += before - observations.len();

        debug!(ticker = %ticker, points = observations.len(), "normalized series");
        series.push(Series {
            ticker,
            observations,
        });
    }

    debug!(
        sources_used = stats.sources_used,
        sources_skipped = stats.sources_skipped,
        rows_read = stats.rows_read,
        rows_dropped = stats.rows_dropped,
        "normalization complete"
    );

    Ok(NormalizedData { series, stats })
}
