//! Per-ticker summary reduction.
//!
//! Reduces a ticker's complete metric sequence to point statistics.
//! Every statistic degrades to `None` rather than failing: an empty
//! sequence, a short series, and a zero divisor are all expected
//! states.

use insights_core::{MetricPoint, SummaryRow};

/// Trailing lookback, in positions, for the short-window return.
pub const RETURN_LOOKBACK: usize = 5;

/// Reduce one ticker's ordered metric sequence to a summary row.
pub fn summarize_ticker(ticker: &str, points: &[MetricPoint]) -> SummaryRow {
    let Some(last) = points.last() else {
        return SummaryRow::empty(ticker);
    };
    let last_close = last.close;

    let total_return = if points.len() >= 2 {
        let first_close = points[0].close;
        (first_close != 0.0).then(|| last_close / first_close - 1.0)
    } else {
        None
    };

    let return_5d = if points.len() > RETURN_LOOKBACK {
        let base = points[points.len() - 1 - RETURN_LOOKBACK].close;
        (base != 0.0).then(|| last_close / base - 1.0)
    } else {
        None
    };

    let vol_10 = points.iter().rev().find_map(|point| point.vol_10);

    SummaryRow {
        ticker: ticker.to_string(),
        total_return,
        return_5d,
        vol_10,
        last_close: Some(last_close),
    }
}

/// Summarize a concatenated metric table.
///
/// The table must be grouped by ticker (the pipeline produces it that
/// way); row order follows the order tickers appear in the table.
pub fn summarize_all(metrics: &[MetricPoint]) -> Vec<SummaryRow> {
    metrics
        .chunk_by(|a, b| a.ticker == b.ticker)
        .map(|chunk| summarize_ticker(&chunk[0].ticker, chunk))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use insights_core::Series;
    use insights_metrics::compute_metrics;

    fn points(ticker: &str, closes: &[f64]) -> Vec<MetricPoint> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let series = Series {
            ticker: ticker.to_string(),
            observations: closes
                .iter()
                .enumerate()
                .map(|(i, &close)| insights_core::Observation {
                    date: start + chrono::Days::new(i as u64),
                    ticker: ticker.to_string(),
                    close,
                })
                .collect(),
        };
        compute_metrics(&series)
    }

    #[test]
    fn test_empty_sequence() {
        let row = summarize_ticker("XYZ", &[]);
        assert_eq!(row, SummaryRow::empty("XYZ"));
    }

    #[test]
    fn test_flat_round_trip() {
        // 10.0 -> 11.0 -> 9.9 -> 10.0: flat overall, too short for 5d
        let row = summarize_ticker("AAPL", &points("AAPL", &[10.0, 11.0, 9.9, 10.0]));

        assert_relative_eq!(row.total_return.unwrap(), 0.0, epsilon = 1e-12);
        assert!(row.return_5d.is_none());
        assert!(row.vol_10.is_none());
        assert_relative_eq!(row.last_close.unwrap(), 10.0);
    }

    #[test]
    fn test_single_point() {
        let row = summarize_ticker("AAPL", &points("AAPL", &[42.0]));

        assert!(row.total_return.is_none());
        assert!(row.return_5d.is_none());
        assert_relative_eq!(row.last_close.unwrap(), 42.0);
    }

    #[test]
    fn test_total_return_zero_first_close() {
        let row = summarize_ticker("AAPL", &points("AAPL", &[0.0, 10.0, 20.0]));
        assert!(row.total_return.is_none());
        assert_relative_eq!(row.last_close.unwrap(), 20.0);
    }

    #[test]
    fn test_return_5d_boundary() {
        // five points: one short of the six needed
        let row = summarize_ticker("AAPL", &points("AAPL", &[1.0, 2.0, 3.0, 4.0, 5.0]));
        assert!(row.return_5d.is_none());

        // six points: looks back exactly five positions, to the first
        let row = summarize_ticker("AAPL", &points("AAPL", &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
        assert_relative_eq!(row.return_5d.unwrap(), 5.0, epsilon = 1e-12);

        // seven points: the base moves to the second point
        let row =
            summarize_ticker("AAPL", &points("AAPL", &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]));
        assert_relative_eq!(row.return_5d.unwrap(), 7.0 / 2.0 - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_vol_latest_scans_backward() {
        // 12 constant closes: vol defined from index 9 on, all zero
        let row = summarize_ticker("AAPL", &points("AAPL", &[50.0; 12]));
        assert_relative_eq!(row.vol_10.unwrap(), 0.0);

        // 9 closes: never warmed up, so no latest volatility
        let row = summarize_ticker("AAPL", &points("AAPL", &[50.0; 9]));
        assert!(row.vol_10.is_none());
    }

    #[test]
    fn test_summarize_all_grouping() {
        let mut table = points("AAPL", &[10.0, 11.0]);
        table.extend(points("SPY", &[400.0, 404.0, 410.0]));

        let rows = summarize_all(&table);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].ticker, "AAPL");
        assert_eq!(rows[1].ticker, "SPY");
        assert_relative_eq!(rows[1].last_close.unwrap(), 410.0);
    }
}
