use serde::{Deserialize, Serialize};

/// Descriptive statistics summarizing a sequence of integers.
///
/// All fields other than `count` are only meaningful when `count > 0`.
/// For an empty sequence every field is zero (see [`StatsResult::default`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsResult {
    /// The number of values in the sequence.
    pub count: usize,
    /// The minimum value in the sequence.
    pub min: i64,
    /// The maximum value in the sequence.
    pub max: i64,
    /// The sum of all values.
    ///
    /// Accumulated in `i128`, so it cannot overflow for any slice of `i64`
    /// that fits in memory.
    pub total: i128,
    /// The arithmetic mean of the sequence.
    pub mean: f64,
    /// The median of the sequence.
    ///
    /// For an even count this is the average of the two middle values.
    pub median: f64,
    /// The population standard deviation of the sequence.
    pub std_dev: f64,
}

impl StatsResult {
    /// Computes descriptive statistics for `values`.
    ///
    /// Equivalent to [`analyze`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use list_analyzer_stats::analysis::StatsResult;
    /// let stats = StatsResult::new(&[5, 2, 4, 1, 3]);
    /// assert_eq!(stats.min, 1);
    /// assert_eq!(stats.max, 5);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new(values: &[i64]) -> Self {
        analyze(values)
    }

    /// Returns `true` if the statistics were computed over an empty sequence.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Computes descriptive statistics for a sequence of integers.
///
/// The input is never reordered; the median is taken from a sorted copy.
/// An empty sequence yields [`StatsResult::default`].
///
/// # Examples
///
/// ```
/// use list_analyzer_stats::analysis::analyze;
///
/// let values = [5, 9, 2, 4, 11, 13];
/// let stats = analyze(&values);
///
/// assert_eq!(stats.count, 6);
/// assert_eq!(stats.total, 44);
/// assert_eq!(stats.median, 7.0);
/// assert_eq!(values, [5, 9, 2, 4, 11, 13]);
/// ```
#[must_use]
pub fn analyze(values: &[i64]) -> StatsResult {
    let Some(&first) = values.first() else {
        return StatsResult::default();
    };

    let count = values.len();
    let mut min = first;
    let mut max = first;
    let mut total = 0_i128;
    for &value in values {
        total += i128::from(value);
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }

    let mean = mean(values, min, max);
    let std_dev = population_std_dev(values, mean);
    let median = median(values);

    StatsResult {
        count,
        min,
        max,
        total,
        mean,
        median,
        std_dev,
    }
}

/// Mean taken as an offset from `min`.
///
/// `total` near `±2^63 * count` is not exactly representable in `f64`, so
/// dividing it directly can land outside `[min, max]`.
#[expect(clippy::cast_precision_loss)]
fn mean(values: &[i64], min: i64, max: i64) -> f64 {
    let spread = values
        .iter()
        .map(|&v| i128::from(v) - i128::from(min))
        .sum::<i128>();
    let mean = min as f64 + spread as f64 / values.len() as f64;
    mean.clamp(min as f64, max as f64)
}

#[expect(clippy::cast_precision_loss)]
fn population_std_dev(values: &[i64], mean: f64) -> f64 {
    let variance = values
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// `values` must be non-empty.
#[expect(clippy::cast_precision_loss)]
fn median(values: &[i64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        // Average in f64; the i64 sum of the two middle values may overflow
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}
