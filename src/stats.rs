use std::collections::HashMap;

use tracing::debug;

use crate::config::Config;
use crate::error::StatsError;
use crate::{moments, outliers, sparkline, trim};

/// Descriptive statistics for one sample, built once by [`Stats::compute`].
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    /// Every value tied for the highest frequency, ascending. Empty when no value repeats.
    pub mode: Vec<f64>,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation (divisor `n - 1`).
    pub std_dev: f64,
    pub variance: f64,
    pub q1: f64,
    pub q3: f64,
    pub p95: f64,
    pub p99: f64,
    pub iqr: f64,
    /// Multiplier used for the IQR fences.
    pub iqr_multiplier: f64,
    /// Values outside the IQR fences, ascending.
    pub outliers: Vec<f64>,
    /// Threshold used for Z-score detection; 0 when disabled.
    pub z_score_threshold: f64,
    /// Values beyond the Z-score threshold, ascending. `None` when disabled.
    pub z_score_outliers: Option<Vec<f64>>,
    pub skewness: f64,
    /// Excess kurtosis.
    pub kurtosis: f64,
    /// Coefficient of variation in percent. `None` when the mean is too close to zero.
    pub cv: Option<f64>,
    /// Some input value is negative, so the CV is of limited use.
    pub has_negative_data: bool,
    /// Percent trimmed from each end; 0 when disabled.
    pub trim_percent: f64,
    /// `None` when trimming was not requested.
    pub trimmed_mean: Option<f64>,
    /// Requested percentiles, ascending by rank, with duplicates collapsed.
    pub custom_percentiles: Vec<CustomPercentile>,
    pub histogram: String,
    pub trendline: String,
}

/// A caller-requested percentile and its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomPercentile {
    /// Rank in percent, `[0, 100]`.
    pub rank: f64,
    pub value: f64,
}

impl Stats {
    /// Compute every statistic for `data` under `config`.
    ///
    /// `data` is left untouched; order matters only for the trendline.
    pub fn compute(data: &[f64], config: &Config) -> Result<Self, StatsError> {
        let count = data.len();
        if count == 0 {
            return Err(StatsError::EmptyInput);
        }

        debug!(
            count,
            bins = config.bins,
            iqr_multiplier = config.iqr_multiplier,
            z_score_threshold = config.z_score_threshold,
            trim_percent = config.trim_percent,
            "computing statistics"
        );

        let mut sorted = data.to_vec();
        sorted.sort_by(f64::total_cmp);

        // Fail before computing anything else if the trim leaves no data
        let trimmed_mean = if config.trim_enabled() {
            Some(trim::trimmed_mean(&sorted, config.trim_percent)?)
        } else {
            None
        };

        let sum: f64 = data.iter().sum();
        let mean = moments::mean(data);

        let variance = moments::variance(data, mean);
        let std_dev = variance.sqrt();

        let median = percentile(&sorted, 0.50);
        let q1 = percentile(&sorted, 0.25);
        let q3 = percentile(&sorted, 0.75);
        let p95 = percentile(&sorted, 0.95);
        let p99 = percentile(&sorted, 0.99);
        let iqr = q3 - q1;

        let outliers = outliers::iqr_outliers(&sorted, q1, q3, config.iqr_multiplier);

        let (z_score_threshold, z_score_outliers) = if config.z_score_enabled() {
            let threshold = config.z_score_threshold;
            let flagged = outliers::zscore_outliers(&sorted, mean, std_dev, threshold);
            (threshold, Some(flagged))
        } else {
            (0.0, None)
        };

        let stats = Stats {
            count,
            sum,
            mean,
            median,
            mode: modes(data),
            min: sorted[0],
            max: sorted[count - 1],
            std_dev,
            variance,
            q1,
            q3,
            p95,
            p99,
            iqr,
            iqr_multiplier: config.iqr_multiplier,
            outliers,
            z_score_threshold,
            z_score_outliers,
            skewness: moments::skewness(data, mean, std_dev),
            kurtosis: moments::kurtosis(data, mean, std_dev),
            cv: moments::coefficient_of_variation(mean, std_dev),
            has_negative_data: sorted[0] < 0.0,
            trim_percent: if trimmed_mean.is_some() {
                config.trim_percent
            } else {
                0.0
            },
            trimmed_mean,
            custom_percentiles: custom_percentiles(&sorted, &config.percentiles),
            histogram: sparkline::histogram(&sorted, config.bins),
            // Original order: the trendline is positional
            trendline: sparkline::trendline(data, config.bins),
        };

        Ok(stats)
    }

    /// The coefficient of variation could be computed.
    pub fn cv_valid(&self) -> bool {
        self.cv.is_some()
    }
}

/// Value at fraction `p` (0.0 = min, 0.5 = median, 1.0 = max) of ascending `sorted`.
///
/// Linear interpolation between closest ranks (R-7). Returns 0 for empty input.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return sorted[0];
    }

    // Ranks outside [0, 1] clamp to the extremes
    let last = n - 1;
    let rank = p.clamp(0.0, 1.0) * last as f64;
    let lower = rank.floor();
    let upper = rank.ceil();

    if lower == upper {
        return sorted[(rank as usize).min(last)];
    }

    let weight = rank - lower;
    sorted[(lower as usize).min(last)] * (1.0 - weight)
        + sorted[(upper as usize).min(last)] * weight
}

/// Most frequent values, ascending; empty when nothing repeats.
///
/// Values are grouped by exact equality.
pub fn modes(data: &[f64]) -> Vec<f64> {
    let mut freqs: HashMap<u64, usize> = HashMap::with_capacity(data.len());
    let mut max_freq = 0;
    let mut modes = Vec::new();

    for &x in data {
        // -0.0 and 0.0 compare equal, so they share a key
        let key = if x == 0.0 { 0.0f64.to_bits() } else { x.to_bits() };
        let freq = freqs.entry(key).or_insert(0);
        *freq += 1;

        if *freq > max_freq {
            max_freq = *freq;
            modes.clear();
            modes.push(x);
        } else if *freq == max_freq {
            modes.push(x);
        }
    }

    if max_freq <= 1 {
        return Vec::new();
    }

    modes.sort_by(f64::total_cmp);
    modes
}

fn custom_percentiles(sorted: &[f64], ranks: &[f64]) -> Vec<CustomPercentile> {
    let mut ranks = ranks.to_vec();
    ranks.sort_by(f64::total_cmp);
    ranks.dedup();

    ranks
        .into_iter()
        .map(|rank| CustomPercentile {
            rank,
            value: percentile(sorted, rank / 100.0),
        })
        .collect()
}
