use crate::EmptyInputError;

/// Descriptive statistics summarizing a sample set.
///
/// Variance and standard deviation are sample estimates (denominator `n - 1`)
/// and are `0.0` when the sample set holds a single value.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// The number of values in the sample set.
    pub count: usize,
    /// The minimum value in the sample set.
    pub min: f64,
    /// The maximum value in the sample set.
    pub max: f64,
    /// The arithmetic mean of the sample set.
    pub mean: f64,
    /// The median of the sample set.
    ///
    /// For an even number of values this is the average of the two middle values.
    pub median: f64,
    /// The sample variance of the sample set.
    pub variance: f64,
    /// The sample standard deviation of the sample set.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// The values are collected and sorted internally.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] if `values` yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gasstat_stats::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.count, 5);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.variance, 2.5);
    /// ```
    pub fn new<I>(values: I) -> Result<Self, EmptyInputError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// Use this when the data is already sorted to skip the sorting step.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] if `sorted_values` is empty.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gasstat_stats::DescriptiveStats;
    /// let mut values = [4.0, 1.0, 3.0, 2.0];
    /// values.sort_by(f64::total_cmp);
    /// let stats = DescriptiveStats::from_sorted(&values).unwrap();
    /// assert_eq!(stats.median, 2.5);
    /// ```
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, EmptyInputError> {
        debug_assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first().ok_or(EmptyInputError)?;
        let max = *sorted_values.last().ok_or(EmptyInputError)?;
        let mean = mean(sorted_values)?;
        let median = sorted_median(sorted_values).ok_or(EmptyInputError)?;
        let variance = sample_variance(sorted_values, mean);

        Ok(Self {
            count: sorted_values.len(),
            min,
            max,
            mean,
            median,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}

/// Computes the arithmetic mean.
///
/// # Errors
///
/// Returns [`EmptyInputError`] if `values` is empty.
///
/// # Examples
///
/// ```
/// # use gasstat_stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Ok(2.0));
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> Result<f64, EmptyInputError> {
    if values.is_empty() {
        return Err(EmptyInputError);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Computes the median.
///
/// The input does not need to be sorted. For an even number of values the
/// two middle values are averaged.
///
/// # Errors
///
/// Returns [`EmptyInputError`] if `values` is empty.
///
/// # Examples
///
/// ```
/// # use gasstat_stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
/// ```
pub fn median(values: &[f64]) -> Result<f64, EmptyInputError> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted_median(&sorted).ok_or(EmptyInputError)
}

/// Computes the sample variance (denominator `n - 1`).
///
/// Returns `0.0` for a single value.
///
/// # Errors
///
/// Returns [`EmptyInputError`] if `values` is empty.
///
/// # Examples
///
/// ```
/// # use gasstat_stats::variance;
/// assert_eq!(variance(&[1.0, 2.0, 3.0, 4.0]), Ok(5.0 / 3.0));
/// assert_eq!(variance(&[42.0]), Ok(0.0));
/// ```
pub fn variance(values: &[f64]) -> Result<f64, EmptyInputError> {
    let mean = mean(values)?;
    Ok(sample_variance(values, mean))
}

/// Computes the sample standard deviation (square root of [`variance`]).
///
/// Returns `0.0` for a single value.
///
/// # Errors
///
/// Returns [`EmptyInputError`] if `values` is empty.
pub fn std_dev(values: &[f64]) -> Result<f64, EmptyInputError> {
    variance(values).map(f64::sqrt)
}

fn sorted_median(sorted_values: &[f64]) -> Option<f64> {
    let len = sorted_values.len();
    if len == 0 {
        return None;
    }
    let mid = len / 2;
    if len % 2 == 1 {
        Some(sorted_values[mid])
    } else {
        Some(f64::midpoint(sorted_values[mid - 1], sorted_values[mid]))
    }
}

#[expect(clippy::cast_precision_loss)]
fn sample_variance(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    sum_sq / (values.len() - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} (±{tolerance}), got {actual}"
        );
    }

    #[test]
    fn test_mean_and_median_of_small_sets() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Ok(2.0));
        assert_eq!(median(&[1.0, 2.0, 3.0]), Ok(2.0));
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
    }

    #[test]
    fn test_median_ignores_source_order() {
        assert_eq!(median(&[9.0, 1.0, 5.0]), Ok(5.0));
        assert_eq!(median(&[10.0, -2.0, 7.0, 3.0]), Ok(5.0));
    }

    #[test]
    fn test_std_dev_uses_sample_denominator() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // sum of squared deviations is 32, divided by n - 1 = 7
        assert_close(variance(&values).unwrap(), 32.0 / 7.0, 1e-12);
        assert_close(std_dev(&values).unwrap(), 2.14, 0.005);
    }

    #[test]
    fn test_variance_is_square_of_std_dev() {
        let sets: [&[f64]; 4] = [
            &[1.0, 2.0],
            &[21_000.0, 21_000.0, 43_512.0, 51_877.0],
            &[0.5, -3.25, 8.0, 1e6, 7.0],
            &[12.0, 15.0, 11.0, 14.0, 13.0, 12.0, 18.0],
        ];
        for values in sets {
            let var = variance(values).unwrap();
            let sd = std_dev(values).unwrap();
            assert_close(var, sd * sd, var.abs() * 1e-12);
        }
    }

    #[test]
    fn test_single_value_has_zero_spread() {
        assert_eq!(variance(&[7.0]), Ok(0.0));
        assert_eq!(std_dev(&[7.0]), Ok(0.0));

        let stats = DescriptiveStats::new([7.0]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 7.0);
        assert_eq!(stats.median, 7.0);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(mean(&[]), Err(EmptyInputError));
        assert_eq!(median(&[]), Err(EmptyInputError));
        assert_eq!(variance(&[]), Err(EmptyInputError));
        assert_eq!(std_dev(&[]), Err(EmptyInputError));
        assert_eq!(
            DescriptiveStats::new(Vec::<f64>::new()),
            Err(EmptyInputError)
        );
        assert_eq!(DescriptiveStats::from_sorted(&[]), Err(EmptyInputError));
    }

    #[test]
    fn test_summary_matches_free_functions() {
        let values = [31_337.0, 29_871.0, 30_002.0, 45_110.0, 29_871.0, 30_500.0];
        let stats = DescriptiveStats::new(values).unwrap();

        assert_eq!(stats.count, values.len());
        assert_eq!(stats.min, 29_871.0);
        assert_eq!(stats.max, 45_110.0);
        assert_close(stats.mean, mean(&values).unwrap(), 1e-9);
        assert_eq!(stats.median, median(&values).unwrap());
        assert_close(stats.variance, variance(&values).unwrap(), 1e-6);
        assert_close(stats.std_dev, std_dev(&values).unwrap(), 1e-9);
    }

    #[test]
    #[should_panic(expected = "values must be sorted in ascending order")]
    #[cfg(debug_assertions)]
    fn test_from_sorted_rejects_unsorted_input() {
        let _ = DescriptiveStats::from_sorted(&[3.0, 1.0, 2.0]);
    }
}
