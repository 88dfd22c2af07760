//! Pipeline entry point.
//!
//! Wires the normalizer, the metrics engine, and the summary reducer
//! into a single synchronous run over a set of raw sources. The run is
//! stateless: each invocation loads its input, computes, and returns
//! the output tables.

use tracing::info;

use insights_core::{MetricPoint, Observation, Result, SummaryRow};
use insights_ingestion::{normalize, IngestStats, RawTable};
use insights_metrics::compute_all;

use crate::summary::summarize_all;

/// The three tables a pipeline run produces, plus ingest statistics.
///
/// Consumers treat these as opaque tabular inputs; ordering is
/// deterministic (ticker alphabetical, dates ascending within each
/// ticker).
#[derive(Debug, Clone)]
pub struct Report {
    /// Normalized observations.
    pub observations: Vec<Observation>,
    /// Derived metrics, same rows and order as `observations`.
    pub metrics: Vec<MetricPoint>,
    /// One summary row per ticker.
    pub summary: Vec<SummaryRow>,
    /// What ingestion kept and dropped.
    pub stats: IngestStats,
}

/// Run the full pipeline over a set of raw sources.
///
/// Fails only when no source satisfies the column contract; all other
/// input anomalies degrade to dropped rows or `None` fields.
pub fn build_report(tables: &[RawTable]) -> Result<Report> {
    let normalized = normalize(tables)?;

    let metrics = compute_all(&normalized.series);
    let summary = summarize_all(&metrics);

    let observations: Vec<Observation> = normalized
        .series
        .into_iter()
        .flat_map(|series| series.observations)
        .collect();

    info!(
        observations = observations.len(),
        tickers = summary.len(),
        "report built"
    );

    Ok(Report {
        observations,
        metrics,
        summary,
        stats: normalized.stats,
    })
}
