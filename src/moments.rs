//! Central moments of a sample.
//!
//! All functions take the raw (unsorted) sample together with a mean and
//! standard deviation computed by the caller, so the expensive passes are not
//! repeated.

/// Means closer to zero than this make the coefficient of variation meaningless.
const CV_MEAN_EPSILON: f64 = 1e-10;

/// Arithmetic mean as a plain sum over count. Returns 0 for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample variance (divisor `n - 1`). Zero when there are fewer than two values.
pub fn variance(data: &[f64], mean: f64) -> f64 {
    let n = data.len();
    if n <= 1 {
        return 0.0;
    }
    data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
}

/// Adjusted Fisher-Pearson standardized moment coefficient.
///
/// Defined only for `n >= 3` and a non-zero standard deviation; 0 otherwise.
pub fn skewness(data: &[f64], mean: f64, std_dev: f64) -> f64 {
    let n = data.len() as f64;
    if data.len() < 3 || std_dev == 0.0 {
        return 0.0;
    }

    let cubed: f64 = data.iter().map(|x| (x - mean).powi(3)).sum();

    (n / ((n - 1.0) * (n - 2.0))) * (cubed / std_dev.powi(3))
}

/// Sample excess kurtosis (a normal distribution scores about 0).
///
/// Defined only for `n >= 4` and a non-zero standard deviation; 0 otherwise.
pub fn kurtosis(data: &[f64], mean: f64, std_dev: f64) -> f64 {
    let n = data.len() as f64;
    if data.len() < 4 || std_dev == 0.0 {
        return 0.0;
    }

    let fourth: f64 = data.iter().map(|x| ((x - mean) / std_dev).powi(4)).sum();

    let scale = (n * (n + 1.0)) / ((n - 1.0) * (n - 2.0) * (n - 3.0));
    let correction = (3.0 * (n - 1.0).powi(2)) / ((n - 2.0) * (n - 3.0));

    scale * fourth - correction
}

/// Standard deviation as a percentage of `|mean|`.
///
/// `None` when the mean is too close to zero for the ratio to be stable.
pub fn coefficient_of_variation(mean: f64, std_dev: f64) -> Option<f64> {
    let magnitude = mean.abs();
    if magnitude < CV_MEAN_EPSILON {
        return None;
    }
    Some(std_dev / magnitude * 100.0)
}
