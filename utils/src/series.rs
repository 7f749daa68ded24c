//! Time-series helpers for historical API data.
//!
//! Providers return points newest-first; a point with no value means the
//! bucket had no completed sample (typically the still-forming current
//! period). Absent points are excluded from every computation, never
//! treated as zero. An empty window yields `None` ("no data").

/// One historical sample. `value` is `None` when the provider had no
/// completed value for the bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    /// Unix timestamp in seconds
    pub timestamp: i64,
    /// Sampled value, if the bucket completed
    pub value: Option<f64>,
}

impl SeriesPoint {
    pub fn new(timestamp: i64, value: Option<f64>) -> Self {
        Self { timestamp, value }
    }
}

/// Change from the oldest present point of a window to the current value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delta {
    /// `current - oldest`
    pub absolute: f64,
    /// `(current - oldest) / oldest`, as a fraction
    pub relative: f64,
}

/// Computes the change from the oldest present point to `current`.
///
/// Returns `None` when the window has no present point, or when the oldest
/// present value is zero (the relative change is undefined there).
pub fn window_delta(current: f64, series: &[SeriesPoint]) -> Option<Delta> {
    // Newest-first ordering: the oldest present point is the last `Some`.
    let oldest = series.iter().rev().find_map(|p| p.value)?;
    if oldest == 0.0 {
        return None;
    }
    let absolute = current - oldest;
    Some(Delta {
        absolute,
        relative: absolute / oldest,
    })
}

/// Arithmetic mean of all present points, or `None` if none are present.
///
/// Used to smooth a noisy instantaneous rate over a window; not to be used
/// for cumulative quantities, which go through [`window_delta`].
pub fn window_average(series: &[SeriesPoint]) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in series.iter().filter_map(|p| p.value) {
        sum += value;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
