// ABOUTME: Recovery engine configuration with environment variable overrides
// ABOUTME: Aggregates exceedance, reallocation, planner, and energy settings behind a global singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recovery Engine Configuration
//!
//! Defaults match the engine constants. Selected values can be overridden via
//! environment variables with the `RECOVERY_` prefix:
//!
//! | Variable | Field |
//! |---|---|
//! | `RECOVERY_EXCEEDANCE_MODERATE_PERCENT` | `exceedance.moderate_percent` |
//! | `RECOVERY_EXCEEDANCE_LARGE_PERCENT` | `exceedance.large_percent` |
//! | `RECOVERY_EMERGENCY_THRESHOLD_KCAL` | `reallocation.emergency_threshold_kcal` |
//! | `RECOVERY_SAFE_CALORIE_FLOOR` | `recovery_plan.safe_calorie_floor_kcal` |
//! | `RECOVERY_DEFAULT_HORIZON_DAYS` | `recovery_plan.default_horizon_days` |
//! | `RECOVERY_MAX_HORIZON_DAYS` | `recovery_plan.max_horizon_days` |
//! | `RECOVERY_PROTEIN_FLOOR_G` | `recovery_plan.protein_floor_g` |

/// Energy expenditure coefficients
pub mod energy;
/// Configuration error types
pub mod error;
/// Exceedance severity bands
pub mod exceedance;
/// Multi-day plan settings
pub mod planner;
/// Same-day reallocation settings
pub mod reallocation;

pub use energy::{ActivityFactorsConfig, BmrConfig, EnergyConfig};
pub use error::ConfigError;
pub use exceedance::ExceedanceThresholds;
pub use planner::{ExerciseBands, MacroSplit, RecoveryPlanConfig};
pub use reallocation::{MealWeights, ReallocationConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static RECOVERY_ENGINE_CONFIG: OnceLock<RecoveryEngineConfig> = OnceLock::new();

/// Recovery engine configuration container
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RecoveryEngineConfig {
    /// Exceedance severity bands
    pub exceedance: ExceedanceThresholds,
    /// Same-day reallocation settings
    pub reallocation: ReallocationConfig,
    /// Multi-day recovery plan settings
    pub recovery_plan: RecoveryPlanConfig,
    /// Energy expenditure coefficients
    pub energy: EnergyConfig,
}

impl RecoveryEngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        RECOVERY_ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load recovery engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config = config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error encountered
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.exceedance.validate()?;
        self.reallocation.validate()?;
        self.recovery_plan.validate()?;
        self.energy.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Exceedance bands
        Self::apply_env_var(
            "RECOVERY_EXCEEDANCE_MODERATE_PERCENT",
            &mut self.exceedance.moderate_percent,
        )?;
        Self::apply_env_var(
            "RECOVERY_EXCEEDANCE_LARGE_PERCENT",
            &mut self.exceedance.large_percent,
        )?;

        // Reallocation
        Self::apply_env_var(
            "RECOVERY_EMERGENCY_THRESHOLD_KCAL",
            &mut self.reallocation.emergency_threshold_kcal,
        )?;

        // Recovery plan
        Self::apply_env_var(
            "RECOVERY_SAFE_CALORIE_FLOOR",
            &mut self.recovery_plan.safe_calorie_floor_kcal,
        )?;
        Self::apply_env_var(
            "RECOVERY_DEFAULT_HORIZON_DAYS",
            &mut self.recovery_plan.default_horizon_days,
        )?;
        Self::apply_env_var(
            "RECOVERY_MAX_HORIZON_DAYS",
            &mut self.recovery_plan.max_horizon_days,
        )?;
        Self::apply_env_var(
            "RECOVERY_PROTEIN_FLOOR_G",
            &mut self.recovery_plan.protein_floor_g,
        )?;

        Ok(self)
    }
}
