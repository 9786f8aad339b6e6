// ABOUTME: Exceedance severity band configuration
// ABOUTME: Percent-over-target bounds separating minor, moderate, and large exceedances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macro_recovery_core::constants::exceedance::{LARGE_PERCENT, MODERATE_PERCENT};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Severity band bounds, in percent over the calorie target
///
/// Anything above zero and below `moderate_percent` is minor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExceedanceThresholds {
    /// Lower bound (inclusive) of the moderate band
    pub moderate_percent: f64,
    /// Lower bound (inclusive) of the large band
    pub large_percent: f64,
}

impl ExceedanceThresholds {
    /// Bands must be positive and strictly ascending
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is non-positive or the bands are inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.moderate_percent.is_finite() || self.moderate_percent <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "exceedance moderate_percent must be > 0",
            ));
        }
        if !self.large_percent.is_finite() || self.large_percent <= self.moderate_percent {
            return Err(ConfigError::InvalidRange(
                "exceedance large_percent must be greater than moderate_percent",
            ));
        }
        Ok(())
    }
}

impl Default for ExceedanceThresholds {
    fn default() -> Self {
        Self {
            moderate_percent: MODERATE_PERCENT,
            large_percent: LARGE_PERCENT,
        }
    }
}
