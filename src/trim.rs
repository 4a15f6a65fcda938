use crate::error::StatsError;

/// Number of values dropped from each end for a given trim percentage.
pub fn trim_count(n: usize, trim_percent: f64) -> usize {
    (n as f64 * trim_percent / 100.0).floor() as usize
}

/// Mean of `sorted` after removing `trim_percent` of the values from each end.
///
/// Fails when the trim would leave nothing to average.
pub fn trimmed_mean(sorted: &[f64], trim_percent: f64) -> Result<f64, StatsError> {
    let count = sorted.len();
    let trim = trim_count(count, trim_percent);

    if count <= 2 * trim {
        return Err(StatsError::InsufficientData {
            count,
            trim_count: trim,
        });
    }

    let kept = &sorted[trim..count - trim];
    Ok(kept.iter().sum::<f64>() / kept.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_count_rounds_down() {
        assert_eq!(trim_count(31, 10.0), 3);
        assert_eq!(trim_count(5, 5.0), 0);
        assert_eq!(trim_count(4, 50.0), 2);
    }

    #[test]
    fn test_trimmed_mean_drops_extremes() {
        let sorted = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 1000.0];

        // 10% of 10 = one value from each end
        assert_eq!(trimmed_mean(&sorted, 10.0).unwrap(), 5.5);
    }

    #[test]
    fn test_small_trim_equals_mean() {
        let sorted = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(trimmed_mean(&sorted, 5.0).unwrap(), 3.0);
    }

    #[test]
    fn test_trim_removes_everything() {
        let sorted = vec![1.0, 2.0, 3.0, 4.0];

        assert_eq!(
            trimmed_mean(&sorted, 50.0),
            Err(StatsError::InsufficientData {
                count: 4,
                trim_count: 2
            })
        );
    }

    #[test]
    fn test_trim_leaves_single_value() {
        let sorted = vec![1.0, 2.0, 3.0];

        // floor(3 * 40 / 100) = 1 from each end
        assert_eq!(trimmed_mean(&sorted, 40.0).unwrap(), 2.0);
    }
}
