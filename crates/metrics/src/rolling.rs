//! Rolling-window accumulators.
//!
//! Bounded-deque statistics over the most recent `window` values.

use std::collections::VecDeque;

use statrs::statistics::Statistics;

/// Rolling arithmetic mean over a fixed window.
///
/// Yields `None` until the window is full; a partially filled window
/// is a warm-up state, not an error.
pub struct RollingMean {
    /// Window size in observations.
    window: usize,
    /// Recent values, newest at the back.
    values: VecDeque<f64>,
    /// Running sum of the current window.
    sum: f64,
}

impl RollingMean {
    /// Create a new rolling mean over `window` observations.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            values: VecDeque::with_capacity(window),
            sum: 0.0,
        }
    }

    /// Add an observation, evicting the oldest once the window is full.
    pub fn push(&mut self, value: f64) {
        if self.values.len() >= self.window {
            if let Some(old) = self.values.pop_front() {
                self.sum -= old;
            }
        }
        self.values.push_back(value);
        self.sum += value;
    }

    /// Mean of the current window, once it is full.
    pub fn mean(&self) -> Option<f64> {
        if self.values.len() >= self.window {
            Some(self.sum / self.window as f64)
        } else {
            None
        }
    }

    /// Get the number of observations currently held.
    pub fn count(&self) -> usize {
        self.values.len()
    }
}

/// Rolling sample standard deviation over a fixed window.
///
/// Unlike [`RollingMean`], this yields a value as soon as two
/// observations exist; the caller decides when the window counts as
/// warmed up.
pub struct RollingStdDev {
    /// Window size in observations.
    window: usize,
    /// Recent values, newest at the back.
    values: VecDeque<f64>,
}

impl RollingStdDev {
    /// Create a new rolling standard deviation over `window` observations.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            values: VecDeque::with_capacity(window),
        }
    }

    /// Add an observation, evicting the oldest once the window is full.
    pub fn push(&mut self, value: f64) {
        if self.values.len() >= self.window {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    /// Sample (n-1 denominator) standard deviation of the held values.
    pub fn std_dev(&self) -> Option<f64> {
        if self.values.len() < 2 {
            return None;
        }
        Some(self.values.iter().std_dev())
    }

    /// Get the number of observations currently held.
    pub fn count(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_warm_up() {
        let mut mean = RollingMean::new(3);
        mean.push(1.0);
        mean.push(2.0);
        assert!(mean.mean().is_none());

        mean.push(3.0);
        assert_relative_eq!(mean.mean().unwrap(), 2.0);
    }

    #[test]
    fn test_mean_evicts_oldest() {
        let mut mean = RollingMean::new(3);
        for value in [1.0, 2.0, 3.0, 4.0] {
            mean.push(value);
        }
        assert_eq!(mean.count(), 3);
        // window is now [2, 3, 4]
        assert_relative_eq!(mean.mean().unwrap(), 3.0);
    }

    #[test]
    fn test_std_dev_needs_two_values() {
        let mut std = RollingStdDev::new(5);
        assert!(std.std_dev().is_none());
        std.push(1.0);
        assert!(std.std_dev().is_none());
        std.push(1.0);
        assert_relative_eq!(std.std_dev().unwrap(), 0.0);
    }

    #[test]
    fn test_std_dev_sample_convention() {
        let mut std = RollingStdDev::new(4);
        for value in [2.0, 4.0, 4.0, 6.0] {
            std.push(value);
        }
        // mean 4, squared deviations 4 + 0 + 0 + 4, sample variance 8/3
        assert_relative_eq!(std.std_dev().unwrap(), (8.0f64 / 3.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_std_dev_window() {
        let mut std = RollingStdDev::new(2);
        for value in [100.0, 1.0, 1.0, 1.0] {
            std.push(value);
        }
        assert_eq!(std.count(), 2);
        // the outlier was evicted
        assert_relative_eq!(std.std_dev().unwrap(), 0.0);
    }
}
