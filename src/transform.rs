use crate::error::StatsError;

/// Natural log of every value, for re-analysis on a log scale.
///
/// Nothing is transformed if any value is zero or negative; the first such
/// value is reported.
pub fn log_transform(data: &[f64]) -> Result<Vec<f64>, StatsError> {
    if let Some((position, &value)) = data.iter().enumerate().find(|&(_, &x)| x <= 0.0) {
        return Err(StatsError::InvalidDomain { position, value });
    }

    Ok(data.iter().map(|x| x.ln()).collect())
}
