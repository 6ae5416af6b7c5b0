//! Descriptive statistics for benchmark sample sets.
//!
//! This crate provides the numeric side of `gasstat`:
//!
//! - **Free functions**: [`mean`], [`median`], [`variance`] and [`std_dev`]
//!   for one-off computations
//! - **Summary**: [`DescriptiveStats`], which computes everything at once
//!   from a single sort
//!
//! Variance and standard deviation use the sample (Bessel-corrected, `n - 1`)
//! estimator. Sample sets with fewer than two values have a variance and
//! standard deviation of `0.0`.
//!
//! # Examples
//!
//! ```
//! use gasstat_stats::DescriptiveStats;
//!
//! let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 5.0);
//! assert_eq!(stats.median, 4.5);
//! assert!((stats.std_dev - 2.138).abs() < 1e-3);
//! ```
//!
//! Empty input is an error rather than `NaN`:
//!
//! ```
//! use gasstat_stats::{EmptyInputError, mean};
//!
//! assert!(matches!(mean(&[]), Err(EmptyInputError)));
//! ```

pub use self::descriptive::{DescriptiveStats, mean, median, std_dev, variance};

pub mod descriptive;

/// Returned when a statistic is requested for a sample set with no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cannot compute statistics of an empty sample set")]
pub struct EmptyInputError;
