//! Core data types for the market-insights pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single normalized price observation.
///
/// Produced by the normalizer, which guarantees `close` is finite and
/// non-negative and that dates within a ticker are unique and strictly
/// increasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar date of the observation (no time-of-day).
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Ticker identifier.
    #[serde(rename = "Ticker")]
    pub ticker: String,
    /// Closing price.
    #[serde(rename = "Close")]
    pub close: f64,
}

/// One ticker's ordered price series, date ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Ticker identifier.
    pub ticker: String,
    /// Observations, sorted by date ascending.
    pub observations: Vec<Observation>,
}

impl Series {
    /// Create an empty series for a ticker.
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            observations: Vec::new(),
        }
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the series has no observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

/// Derived metrics for one observation.
///
/// `None` means the value is not computable at this point (warm-up or
/// no prior observation), which is a routine state rather than an
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    /// Calendar date of the underlying observation.
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Ticker identifier.
    #[serde(rename = "Ticker")]
    pub ticker: String,
    /// Closing price.
    #[serde(rename = "Close")]
    pub close: f64,
    /// Period-over-period return; `None` at the first observation.
    #[serde(rename = "Pct_Change")]
    pub pct_change: Option<f64>,
    /// 10-period moving average of close.
    #[serde(rename = "MA_10")]
    pub ma_10: Option<f64>,
    /// 30-period moving average of close.
    #[serde(rename = "MA_30")]
    pub ma_30: Option<f64>,
    /// Annualized rolling volatility of returns over 10 periods.
    #[serde(rename = "Vol_10")]
    pub vol_10: Option<f64>,
}

/// Per-ticker point statistics reduced from a metric series.
///
/// Computed once per pipeline run and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Ticker identifier.
    #[serde(rename = "Ticker")]
    pub ticker: String,
    /// Return over the whole series (`last/first - 1`).
    #[serde(rename = "Total_Return")]
    pub total_return: Option<f64>,
    /// Return over the trailing five positions.
    #[serde(rename = "Return_5D")]
    pub return_5d: Option<f64>,
    /// Most recent defined rolling volatility.
    #[serde(rename = "Vol_10")]
    pub vol_10: Option<f64>,
    /// Final closing price.
    #[serde(rename = "Last_Close")]
    pub last_close: Option<f64>,
}

impl SummaryRow {
    /// A summary with the ticker set and every statistic undefined,
    /// the correct reduction of an empty metric sequence.
    pub fn empty(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            total_return: None,
            return_5d: None,
            vol_10: None,
            last_close: None,
        }
    }
}
