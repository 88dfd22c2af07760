//! Reporting for the market-insights pipeline.
//!
//! This crate provides:
//! - The per-ticker summary reduction
//! - The pipeline entry point producing the three output tables
//! - CSV export of those tables

pub mod export;
pub mod pipeline;
pub mod summary;

pub use export::{write_tables, METRICS_FILE, RAW_DATA_FILE, SUMMARY_FILE};
pub use pipeline::{build_report, Report};
pub use summary::{summarize_all, summarize_ticker, RETURN_LOOKBACK};
