//! Data ingestion and normalization for the market-insights pipeline.
//!
//! This crate handles:
//! - CSV source discovery and loading
//! - Required-column resolution (case/whitespace-insensitive)
//! - Row-level type coercion and filtering
//! - Grouping observations into ordered per-ticker series

pub mod normalizer;
pub mod source;

pub use normalizer::{normalize, IngestStats, NormalizedData};
pub use source::{
    discover_csv_tables, resolve_columns, ColumnIndices, RawTable, REQUIRED_COLUMNS,
};
