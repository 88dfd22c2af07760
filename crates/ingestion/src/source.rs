//! Raw tabular record sources.
//!
//! A [`RawTable`] is a fully materialized source: a name, its column
//! headers as they appeared, and rows of unparsed string cells. CSV
//! files are the usual origin, but the normalizer only ever sees the
//! table, so the embedding system is free to construct tables from
//! anything else that satisfies the column contract.

use std::fs::File;
use std::path::Path;

use insights_core::Result;

/// Required column names in canonical (title-cased) form.
pub const REQUIRED_COLUMNS: [&str; 3] = ["Date", "Ticker", "Close"];

/// A raw tabular record source.
#[derive(Debug, Clone)]
pub struct RawTable {
    /// Source name (file stem for CSV-backed tables).
    pub name: String,
    /// Column headers as they appeared in the source.
    pub columns: Vec<String>,
    /// Rows of unparsed cells, in source order.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Load a table from a CSV file.
    ///
    /// Cells are trimmed during parsing; ragged rows are accepted here
    /// and resolved per-row by the normalizer.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            name,
            columns,
            rows,
        })
    }
}

/// Indices of the required columns within a table.
#[derive(Debug, Clone, Copy)]
pub struct ColumnIndices {
    pub date: usize,
    pub ticker: usize,
    pub close: usize,
}

/// Canonicalize a header for comparison: trim surrounding whitespace
/// and title-case each word.
fn canonical_column(name: &str) -> String {
    name.trim()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve the required `Date`/`Ticker`/`Close` columns.
///
/// Matching is case/whitespace-insensitive. Returns `None` if any of
/// the three is missing, in which case the source is unusable.
pub fn resolve_columns(columns: &[String]) -> Option<ColumnIndices> {
    let find = |wanted: &str| {
        columns
            .iter()
            .position(|c| canonical_column(c) == wanted)
    };

    Some(ColumnIndices {
        date: find("Date")?,
        ticker: find("Ticker")?,
        close: find("Close")?,
    })
}

/// Discover CSV files in a directory and load each as a [`RawTable`].
///
/// The extension match is case-insensitive and results are ordered by
/// file name so repeated runs see sources in the same order.
pub fn discover_csv_tables(dir: &Path) -> Result<Vec<RawTable>> {
    let mut paths: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("csv"))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();

    paths.iter().map(|path| RawTable::from_csv_path(path)).collect()
}
