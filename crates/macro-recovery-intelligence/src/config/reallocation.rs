// ABOUTME: Same-day reallocation configuration
// ABOUTME: Per-meal calorie weights, emergency threshold, and emergency macro bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macro_recovery_core::constants::recovery::EMERGENCY_THRESHOLD_KCAL;
use macro_recovery_core::models::{MacroRatioRange, MealType};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Relative share of calories each meal type receives
///
/// Weights are normalised over whichever slots participate, so they need not
/// sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealWeights {
    /// Breakfast weight
    pub breakfast: f64,
    /// Lunch weight
    pub lunch: f64,
    /// Dinner weight
    pub dinner: f64,
    /// Snack weight
    pub snack: f64,
}

impl MealWeights {
    /// Every meal gets the same share
    #[must_use]
    pub const fn equal() -> Self {
        Self {
            breakfast: 1.0,
            lunch: 1.0,
            dinner: 1.0,
            snack: 1.0,
        }
    }

    /// Conventional day: 25 % breakfast, 35 % lunch, 35 % dinner, 5 % snack
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            breakfast: 0.25,
            lunch: 0.35,
            dinner: 0.35,
            snack: 0.05,
        }
    }

    /// Weight for one meal type
    #[must_use]
    pub const fn weight(&self, meal_type: MealType) -> f64 {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snack => self.snack,
        }
    }

    /// Weights must be finite, non-negative, and not all zero
    ///
    /// # Errors
    ///
    /// Returns an error if any weight is negative or non-finite, or all are zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [self.breakfast, self.lunch, self.dinner, self.snack];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "meal weights must be finite and non-negative",
            ));
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(ConfigError::InvalidWeights(
                "at least one meal weight must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for MealWeights {
    fn default() -> Self {
        Self::equal()
    }
}

/// Configuration for splitting the rest of the day's budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReallocationConfig {
    /// Calorie weights per meal type
    pub meal_weights: MealWeights,
    /// Remaining calories below which emergency guidance is produced
    pub emergency_threshold_kcal: f64,
    /// Macro bands recommended when the budget is nearly spent
    pub emergency_ratio: MacroRatioRange,
}

impl ReallocationConfig {
    /// Validate weights, threshold, and emergency bands
    ///
    /// # Errors
    ///
    /// Returns an error if any component is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.meal_weights.validate()?;

        if !self.emergency_threshold_kcal.is_finite() || self.emergency_threshold_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "emergency_threshold_kcal must be >= 0",
            ));
        }

        let ratio = &self.emergency_ratio;
        let bands = [
            (ratio.protein_min, ratio.protein_max),
            (ratio.carbs_min, ratio.carbs_max),
            (ratio.fat_min, ratio.fat_max),
        ];
        for (min, max) in bands {
            if !(0.0..=100.0).contains(&min) || !(0.0..=100.0).contains(&max) {
                return Err(ConfigError::ValueOutOfRange(
                    "emergency ratio bounds must be between 0 and 100",
                ));
            }
            if min > max {
                return Err(ConfigError::InvalidRange(
                    "emergency ratio minimum exceeds maximum",
                ));
            }
        }
        if ratio.protein_min + ratio.carbs_min + ratio.fat_min > 100.0 {
            return Err(ConfigError::InvalidWeights(
                "emergency ratio minimums exceed 100%",
            ));
        }

        Ok(())
    }
}

impl Default for ReallocationConfig {
    fn default() -> Self {
        Self {
            meal_weights: MealWeights::default(),
            emergency_threshold_kcal: EMERGENCY_THRESHOLD_KCAL,
            // High protein, low carbohydrate
            emergency_ratio: MacroRatioRange {
                protein_min: 50.0,
                protein_max: 60.0,
                carbs_min: 20.0,
                carbs_max: 30.0,
                fat_min: 10.0,
                fat_max: 20.0,
            },
        }
    }
}
