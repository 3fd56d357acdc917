//! Configuration for the analysis engine.
//!
//! Every statistical threshold the operations use lives here, with defaults
//! matching the behavior the DataLab frontend expects. Use
//! [`EngineConfig::builder()`] for fluent setup.

use serde::{Deserialize, Serialize};

/// Tunable thresholds for the agent operations.
///
/// # Example
///
/// ```rust,ignore
/// use datalab_engine::EngineConfig;
///
/// let config = EngineConfig::builder()
///     .iqr_multiplier(3.0)
///     .strong_correlation_threshold(0.85)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fence width for outlier detection, in IQR units beyond Q1/Q3.
    /// Default: 1.5
    pub iqr_multiplier: f64,

    /// Minimum number of numeric values a column needs before IQR bounds are
    /// computed; below this the column is skipped.
    /// Default: 4
    pub min_iqr_samples: usize,

    /// Absolute Pearson correlation above which a column pair is reported as
    /// a strong relationship.
    /// Default: 0.7
    pub strong_correlation_threshold: f64,

    /// Fraction of date-parseable values above which a non-numeric column is
    /// classified as a date column.
    /// Default: 0.8
    pub date_fraction_threshold: f64,

    /// A column with some, but fewer than this fraction of, numeric values
    /// gets a mixed-type warning from the validator.
    /// Default: 0.9
    pub mixed_type_threshold: f64,

    /// Percent change between first-half and second-half means above which a
    /// numeric column is reported as trending.
    /// Default: 10.0
    pub trend_change_threshold: f64,

    /// Minimum row count for the seasonality-eligibility flag.
    /// Default: 12
    pub seasonality_min_rows: usize,

    /// How many top values the summarizer reports per categorical column.
    /// Default: 5
    pub top_values: usize,

    /// Fill value for columns where every cell is missing.
    /// Default: "Unknown"
    pub fill_sentinel: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            iqr_multiplier: 1.5,
            min_iqr_samples: 4,
            strong_correlation_threshold: 0.7,
            date_fraction_threshold: 0.8,
            mixed_type_threshold: 0.9,
            trend_change_threshold: 10.0,
            seasonality_min_rows: 12,
            top_values: 5,
            fill_sentinel: "Unknown".to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a new configuration builder.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&self.date_fraction_threshold) {
            return Err(ConfigValidationError::InvalidThreshold {
                field: "date_fraction_threshold".to_string(),
                value: self.date_fraction_threshold,
            });
        }

        if !(0.0..=1.0).contains(&self.mixed_type_threshold) {
            return Err(ConfigValidationError::InvalidThreshold {
                field: "mixed_type_threshold".to_string(),
                value: self.mixed_type_threshold,
            });
        }

        if self.iqr_multiplier <= 0.0 || !self.iqr_multiplier.is_finite() {
            return Err(ConfigValidationError::InvalidIqrMultiplier(
                self.iqr_multiplier,
            ));
        }

        if self.min_iqr_samples < 2 {
            return Err(ConfigValidationError::InvalidMinSamples(
                self.min_iqr_samples,
            ));
        }

        if self.top_values == 0 {
            return Err(ConfigValidationError::InvalidTopValues(self.top_values));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid threshold for '{field}': {value} (must be between 0.0 and 1.0)")]
    InvalidThreshold { field: String, value: f64 },

    #[error("Invalid IQR multiplier: {0} (must be a positive finite number)")]
    InvalidIqrMultiplier(f64),

    #[error("Invalid minimum IQR sample count: {0} (must be at least 2)")]
    InvalidMinSamples(usize),

    #[error("Invalid top-value count: {0} (must be at least 1)")]
    InvalidTopValues(usize),
}

/// Builder for [`EngineConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    iqr_multiplier: Option<f64>,
    min_iqr_samples: Option<usize>,
    strong_correlation_threshold: Option<f64>,
    date_fraction_threshold: Option<f64>,
    mixed_type_threshold: Option<f64>,
    trend_change_threshold: Option<f64>,
    seasonality_min_rows: Option<usize>,
    top_values: Option<usize>,
    fill_sentinel: Option<String>,
}

impl EngineConfigBuilder {
    /// Set the IQR fence multiplier for outlier detection.
    pub fn iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.iqr_multiplier = Some(multiplier);
        self
    }

    /// Set the minimum numeric sample count for IQR computation.
    pub fn min_iqr_samples(mut self, samples: usize) -> Self {
        self.min_iqr_samples = Some(samples);
        self
    }

    /// Set the |r| threshold for reporting strong correlations.
    pub fn strong_correlation_threshold(mut self, threshold: f64) -> Self {
        self.strong_correlation_threshold = Some(threshold);
        self
    }

    /// Set the date-parseable fraction required to classify a date column.
    pub fn date_fraction_threshold(mut self, threshold: f64) -> Self {
        self.date_fraction_threshold = Some(threshold);
        self
    }

    /// Set the numeric fraction below which mixed-type warnings fire.
    pub fn mixed_type_threshold(mut self, threshold: f64) -> Self {
        self.mixed_type_threshold = Some(threshold);
        self
    }

    /// Set the percent change that counts as a trend.
    pub fn trend_change_threshold(mut self, threshold: f64) -> Self {
        self.trend_change_threshold = Some(threshold);
        self
    }

    /// Set the minimum row count for the seasonality flag.
    pub fn seasonality_min_rows(mut self, rows: usize) -> Self {
        self.seasonality_min_rows = Some(rows);
        self
    }

    /// Set how many top values the summarizer reports per categorical column.
    pub fn top_values(mut self, count: usize) -> Self {
        self.top_values = Some(count);
        self
    }

    /// Set the fill value for all-missing columns.
    pub fn fill_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.fill_sentinel = Some(sentinel.into());
        self
    }

    /// Build the configuration, validating all thresholds.
    pub fn build(self) -> Result<EngineConfig, ConfigValidationError> {
        let defaults = EngineConfig::default();
        let config = EngineConfig {
            iqr_multiplier: self.iqr_multiplier.unwrap_or(defaults.iqr_multiplier),
            min_iqr_samples: self.min_iqr_samples.unwrap_or(defaults.min_iqr_samples),
            strong_correlation_threshold: self
                .strong_correlation_threshold
                .unwrap_or(defaults.strong_correlation_threshold),
            date_fraction_threshold: self
                .date_fraction_threshold
                .unwrap_or(defaults.date_fraction_threshold),
            mixed_type_threshold: self
                .mixed_type_threshold
                .unwrap_or(defaults.mixed_type_threshold),
            trend_change_threshold: self
                .trend_change_threshold
                .unwrap_or(defaults.trend_change_threshold),
            seasonality_min_rows: self
                .seasonality_min_rows
                .unwrap_or(defaults.seasonality_min_rows),
            top_values: self.top_values.unwrap_or(defaults.top_values),
            fill_sentinel: self.fill_sentinel.unwrap_or(defaults.fill_sentinel),
        };
        config.validate()?;
        Ok(config)
    }
}
