//! Approximate-match configuration.
//!
//! Constructed via the builder pattern: [`MatchConfig::builder`].

use bitmatrix_core::GridError;

/// Validated settings for approximate pattern search.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchConfig {
    threshold: f64,
    limit: Option<usize>,
}

/// Builder for [`MatchConfig`].
pub struct MatchConfigBuilder {
    threshold: f64,
    limit: Option<usize>,
}

impl MatchConfig {
    /// Default minimum similarity.
    pub const DEFAULT_THRESHOLD: f64 = 0.8;

    /// Create a new builder.
    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder {
            threshold: Self::DEFAULT_THRESHOLD,
            limit: None,
        }
    }

    /// Minimum similarity a match must reach.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Maximum number of matches returned, if capped.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            limit: None,
        }
    }
}

impl MatchConfigBuilder {
    /// Set the minimum similarity (default: 0.8). Must lie in `[0, 1]`.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Keep only the best `limit` matches (default: unlimited).
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Build the configuration, validating all settings.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidArgument`] if:
    /// - `threshold` is NaN or outside `[0, 1]`
    /// - `limit` is zero
    pub fn build(self) -> Result<MatchConfig, GridError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(GridError::InvalidArgument {
                reason: format!("threshold must be within [0, 1], got {}", self.threshold),
            });
        }
        if self.limit == Some(0) {
            return Err(GridError::InvalidArgument {
                reason: "match limit must be at least 1".to_string(),
            });
        }
        Ok(MatchConfig {
            threshold: self.threshold,
            limit: self.limit,
        })
    }
}
