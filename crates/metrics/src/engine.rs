//! Per-ticker metric computation.
//!
//! Each ticker's series is processed independently; nothing reads
//! state across series, so callers may handle tickers in any order
//! (or in parallel) with identical results.

use tracing::debug;

use insights_core::{MetricPoint, Series};

use crate::rolling::{RollingMean, RollingStdDev};

/// Short moving-average window, in observations.
pub const SHORT_MA_WINDOW: usize = 10;
/// Long moving-average window, in observations.
pub const LONG_MA_WINDOW: usize = 30;
/// Rolling volatility window, in observations.
pub const VOL_WINDOW: usize = 10;
/// Trading periods per year, used to annualize volatility.
pub const TRADING_PERIODS_PER_YEAR: f64 = 252.0;

/// Compute the derived metric series for one ticker.
///
/// The output has the same length and order as the input series.
/// Warm-up positions carry `None`; a series of zero or one
/// observations yields no defined derived values at all.
pub fn compute_metrics(series: &Series) -> Vec<MetricPoint> {
    let mut ma_short = RollingMean::new(SHORT_MA_WINDOW);
    let mut ma_long = RollingMean::new(LONG_MA_WINDOW);
    let mut returns = RollingStdDev::new(VOL_WINDOW);
    let mut prev_close: Option<f64> = None;

    let mut points = Vec::with_capacity(series.len());
    for (i, obs) in series.observations.iter().enumerate() {
        let pct_change = prev_close.map(|prev| obs.close / prev - 1.0);
        if let Some(ret) = pct_change {
            returns.push(ret);
        }
        ma_short.push(obs.close);
        ma_long.push(obs.close);

        // The volatility window counts observation slots, not defined
        // returns: the first slot never holds a return, so the window
        // is warmed up once VOL_WINDOW observations have been seen.
        let vol_10 = if i + 1 >= VOL_WINDOW {
            returns
                .std_dev()
                .map(|sigma| sigma * TRADING_PERIODS_PER_YEAR.sqrt())
        } else {
            None
        };

        points.push(MetricPoint {
            date: obs.date,
            ticker: obs.ticker.clone(),
            close: obs.close,
            pct_change,
            ma_10: ma_short.mean(),
            ma_30: ma_long.mean(),
            vol_10,
        });

        prev_close = Some(obs.close);
    }

    points
}

/// Compute metrics for every series and concatenate the results.
///
/// Input order is preserved, so series sorted by ticker produce a
/// ticker-then-date ordered table.
pub fn compute_all(series: &[Series]) -> Vec<MetricPoint> {
    let mut points = Vec::with_capacity(series.iter().map(Series::len).sum());
    for s in series {
        points.extend(compute_metrics(s));
    }
    debug!(
        tickers = series.len(),
        points = points.len(),
        "metrics computed"
    );
    points
}
