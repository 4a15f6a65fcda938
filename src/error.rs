use thiserror::Error;

/// Failures that abort a statistics computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("input contains no valid numbers")]
    EmptyInput,

    /// Log transform hit a value outside the positive reals.
    #[error("log transform requires positive values, found {value} at position {position}")]
    InvalidDomain { position: usize, value: f64 },

    #[error("trimming {trim_count} values from each end of {count} leaves no data")]
    InsufficientData { count: usize, trim_count: usize },
}

/// Rejected configuration values, reported before any input is read.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("bins must be between {min} and {max}, got {0}", min = crate::config::MIN_BINS, max = crate::config::MAX_BINS)]
    BinsOutOfRange(usize),

    #[error("IQR multiplier must be non-negative, got {0}")]
    NegativeIqrMultiplier(f64),

    #[error("Z-score threshold must be non-negative, got {0}")]
    NegativeZScoreThreshold(f64),

    #[error("trim percent must be in [0, 100), got {0}")]
    TrimPercentOutOfRange(f64),

    #[error("percentile must be in [0, 100], got {0}")]
    PercentileOutOfRange(f64),
}
