// ABOUTME: Multi-day recovery plan configuration
// ABOUTME: Safe calorie floor, horizon bounds, protein floor, macro split, and activity bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macro_recovery_core::constants::recovery::{
    DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS, PROTEIN_FLOOR_G, SAFE_CALORIE_FLOOR_KCAL,
};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Share of a day's calories per macronutrient, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein share (%)
    pub protein_percent: f64,
    /// Carbohydrate share (%)
    pub carbs_percent: f64,
    /// Fat share (%)
    pub fat_percent: f64,
}

impl Default for MacroSplit {
    fn default() -> Self {
        Self {
            protein_percent: 30.0,
            carbs_percent: 40.0,
            fat_percent: 30.0,
        }
    }
}

/// Upper bounds of the daily reduction bands used to pick an activity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExerciseBands {
    /// Reductions up to this many kcal pair with light activity
    pub light_max_kcal: f64,
    /// Reductions up to this many kcal pair with moderate activity; above is intensive
    pub moderate_max_kcal: f64,
}

impl Default for ExerciseBands {
    fn default() -> Self {
        Self {
            light_max_kcal: 200.0,
            moderate_max_kcal: 400.0,
        }
    }
}

/// Configuration for spreading an excess over several days
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveryPlanConfig {
    /// No planned day may drop below this many kcal
    pub safe_calorie_floor_kcal: f64,
    /// Horizon used when the caller does not ask for one
    pub default_horizon_days: u32,
    /// Hard limit on requested and extended horizons
    pub max_horizon_days: u32,
    /// Minimum daily protein target (grams)
    pub protein_floor_g: f64,
    /// Macro split applied to each day's adjusted budget
    pub macro_split: MacroSplit,
    /// Reduction bands for activity pairing
    pub exercise_bands: ExerciseBands,
}

impl RecoveryPlanConfig {
    /// Validate floors, horizons, split, and bands
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of range or inconsistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.safe_calorie_floor_kcal.is_finite() || self.safe_calorie_floor_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "safe_calorie_floor_kcal must be > 0",
            ));
        }
        if self.default_horizon_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_horizon_days must be > 0",
            ));
        }
        if self.max_horizon_days < self.default_horizon_days {
            return Err(ConfigError::InvalidRange(
                "max_horizon_days must be >= default_horizon_days",
            ));
        }
        if !self.protein_floor_g.is_finite() || self.protein_floor_g < 0.0 {
            return Err(ConfigError::ValueOutOfRange("protein_floor_g must be >= 0"));
        }

        let split = &self.macro_split;
        let shares = [split.protein_percent, split.carbs_percent, split.fat_percent];
        if shares.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "macro split percentages must be >= 0",
            ));
        }
        if (shares.iter().sum::<f64>() - 100.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "macro split percentages must sum to 100",
            ));
        }

        let bands = &self.exercise_bands;
        if !bands.light_max_kcal.is_finite() || bands.light_max_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("light_max_kcal must be > 0"));
        }
        if !bands.moderate_max_kcal.is_finite() || bands.moderate_max_kcal <= bands.light_max_kcal
        {
            return Err(ConfigError::InvalidRange(
                "moderate_max_kcal must be greater than light_max_kcal",
            ));
        }

        Ok(())
    }
}

impl Default for RecoveryPlanConfig {
    fn default() -> Self {
        Self {
            safe_calorie_floor_kcal: SAFE_CALORIE_FLOOR_KCAL,
            default_horizon_days: DEFAULT_HORIZON_DAYS,
            max_horizon_days: MAX_HORIZON_DAYS,
            protein_floor_g: PROTEIN_FLOOR_G,
            macro_split: MacroSplit::default(),
            exercise_bands: ExerciseBands::default(),
        }
    }
}
