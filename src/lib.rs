//! Descriptive statistics for newline-delimited numbers.
//!
//! [`Stats::compute`] turns a sample into quartiles, moments, outliers, a
//! trimmed mean and one-line histogram/trendline encodings. The remaining
//! modules read input, render the report and plot densities for the `stats`
//! binary.

pub mod config;
pub mod error;
pub mod formatting;
pub mod kde;
pub mod moments;
pub mod outliers;
pub mod parsing;
pub mod sparkline;
pub mod stats;
pub mod transform;
pub mod trim;

pub use config::Config;
pub use error::{ConfigError, StatsError};
pub use stats::{CustomPercentile, Stats, percentile};
