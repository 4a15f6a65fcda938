use crate::error::ConfigError;

/// Tukey's inner fence.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Default bucket count for the histogram and trendline.
pub const DEFAULT_BINS: usize = 16;

pub const MIN_BINS: usize = 5;
pub const MAX_BINS: usize = 50;

/// Percentiles that are always computed, in percent.
pub const FIXED_PERCENTILES: [f64; 5] = [25.0, 50.0, 75.0, 95.0, 99.0];

/// Options controlling a single `Stats::compute` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Extra percentiles to report, in percent (`[0, 100]`).
    pub percentiles: Vec<f64>,
    /// Fence width multiplier for IQR outlier detection.
    pub iqr_multiplier: f64,
    /// Bucket count for both visual encoders.
    pub bins: usize,
    /// Z-score cutoff; 0 disables Z-score outlier detection.
    pub z_score_threshold: f64,
    /// Percent trimmed from each end for the trimmed mean; 0 disables it.
    pub trim_percent: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            percentiles: Vec::new(),
            iqr_multiplier: DEFAULT_IQR_MULTIPLIER,
            bins: DEFAULT_BINS,
            z_score_threshold: 0.0,
            trim_percent: 0.0,
        }
    }
}

impl Config {
    /// Check every option against its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BINS..=MAX_BINS).contains(&self.bins) {
            return Err(ConfigError::BinsOutOfRange(self.bins));
        }
        // Negated comparisons so NaN is rejected too
        if !(self.iqr_multiplier >= 0.0) {
            return Err(ConfigError::NegativeIqrMultiplier(self.iqr_multiplier));
        }
        if !(self.z_score_threshold >= 0.0) {
            return Err(ConfigError::NegativeZScoreThreshold(self.z_score_threshold));
        }
        if !(0.0..100.0).contains(&self.trim_percent) {
            return Err(ConfigError::TrimPercentOutOfRange(self.trim_percent));
        }
        if let Some(&p) = self.percentiles.iter().find(|p| !(0.0..=100.0).contains(*p)) {
            return Err(ConfigError::PercentileOutOfRange(p));
        }
        Ok(())
    }

    pub fn z_score_enabled(&self) -> bool {
        self.z_score_threshold > 0.0
    }

    pub fn trim_enabled(&self) -> bool {
        self.trim_percent > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.percentiles.is_empty());
        assert_eq!(config.iqr_multiplier, 1.5);
        assert_eq!(config.bins, 16);
        assert!(!config.z_score_enabled());
        assert!(!config.trim_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bins_bounds() {
        let mut config = Config::default();

        config.bins = MIN_BINS;
        assert!(config.validate().is_ok());
        config.bins = MAX_BINS;
        assert!(config.validate().is_ok());

        config.bins = 4;
        assert_eq!(config.validate(), Err(ConfigError::BinsOutOfRange(4)));
        config.bins = 51;
        assert_eq!(config.validate(), Err(ConfigError::BinsOutOfRange(51)));
    }

    #[test]
    fn test_negative_multiplier_rejected() {
        let config = Config {
            iqr_multiplier: -1.0,
            ..Config::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeIqrMultiplier(-1.0))
        );
    }

    #[test]
    fn test_negative_zscore_rejected() {
        let config = Config {
            z_score_threshold: -0.5,
            ..Config::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeZScoreThreshold(-0.5))
        );
    }

    #[test]
    fn test_trim_percent_bounds() {
        let mut config = Config::default();

        config.trim_percent = 99.9;
        assert!(config.validate().is_ok());
        config.trim_percent = 100.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::TrimPercentOutOfRange(100.0))
        );
        config.trim_percent = -5.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::TrimPercentOutOfRange(-5.0))
        );
    }

    #[test]
    fn test_percentile_bounds() {
        let mut config = Config {
            percentiles: vec![0.0, 10.0, 100.0],
            ..Config::default()
        };
        assert!(config.validate().is_ok());

        config.percentiles.push(100.5);
        assert_eq!(
            config.validate(),
            Err(ConfigError::PercentileOutOfRange(100.5))
        );
    }

    #[test]
    fn test_nan_multiplier_rejected() {
        let config = Config {
            iqr_multiplier: f64::NAN,
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }
}
