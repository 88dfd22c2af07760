//! Metric computation for the market-insights pipeline.
//!
//! This crate turns a ticker's normalized price series into a
//! same-length series of derived metrics:
//! - Period-over-period percent change
//! - Short and long moving averages
//! - Annualized rolling volatility of returns

pub mod engine;
pub mod rolling;

pub use engine::{
    compute_all, compute_metrics, LONG_MA_WINDOW, SHORT_MA_WINDOW, TRADING_PERIODS_PER_YEAR,
    VOL_WINDOW,
};
pub use rolling::{RollingMean, RollingStdDev};
