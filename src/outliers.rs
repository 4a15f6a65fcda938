//! Outlier Detection
//!
//! Two independent policies over quantities the caller already computed:
//! an IQR fence around the quartiles, and a Z-score cutoff around the mean.
//! Both take the sorted sample, so flagged values come out in ascending order
//! and repeated values are reported once per occurrence.

/// Lower and upper IQR fences: `[Q1 - k*IQR, Q3 + k*IQR]`.
pub fn iqr_fences(q1: f64, q3: f64, k: f64) -> (f64, f64) {
    let iqr = q3 - q1;
    (q1 - k * iqr, q3 + k * iqr)
}

/// Values strictly outside the IQR fences.
pub fn iqr_outliers(sorted: &[f64], q1: f64, q3: f64, k: f64) -> Vec<f64> {
    let (lower, upper) = iqr_fences(q1, q3, k);

    sorted
        .iter()
        .copied()
        .filter(|&x| x < lower || x > upper)
        .collect()
}

/// Values whose absolute Z-score exceeds `threshold`.
///
/// A zero standard deviation means every value sits on the mean, so nothing
/// is flagged.
pub fn zscore_outliers(sorted: &[f64], mean: f64, std_dev: f64, threshold: f64) -> Vec<f64> {
    if std_dev == 0.0 {
        return Vec::new();
    }

    sorted
        .iter()
        .copied()
        .filter(|&x| ((x - mean) / std_dev).abs() > threshold)
        .collect()
}
