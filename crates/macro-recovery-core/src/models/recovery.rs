// ABOUTME: Multi-day recovery plan models
// ABOUTME: RecoveryPlan, DayAdjustment, and paired exercise recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrition::{MacroAllocation, MacroTargets};
use serde::{Deserialize, Serialize};

/// Activity paired with one day of a recovery plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseRecommendation {
    /// Main activity for the day
    pub primary: String,
    /// Complementary activity
    pub secondary: String,
    /// Why this pairing suits the day's reduction
    pub rationale: String,
}

/// One day of a recovery plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayAdjustment {
    /// 1-based day index
    pub day: u32,
    /// Calorie reduction applied to this day (whole kcal)
    pub reduction: f64,
    /// Calorie budget for the day after the reduction
    #[serde(rename = "adjustedTDEE")]
    pub adjusted_tdee: f64,
    /// Macro gram targets for the day, protein floor applied
    pub macro_targets: MacroTargets,
    /// Paired activity recommendation
    pub exercise: ExerciseRecommendation,
    /// Meal-by-meal split of the adjusted budget
    pub meal_allocation: Vec<MacroAllocation>,
}

/// Schedule spreading a calorie excess across several days
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryPlan {
    /// Excess the plan was built for
    pub total_excess: f64,
    /// Average reduction per planned day
    pub daily_reduction: f64,
    /// Number of planned days
    pub plan_duration: u32,
    /// Number of days originally requested
    pub requested_duration: u32,
    /// Whether the horizon was lengthened to respect the safe calorie floor
    pub horizon_extended: bool,
    /// Daily energy expenditure the reductions are taken from
    #[serde(rename = "baselineTDEE")]
    pub baseline_tdee: f64,
    /// Per-day schedule
    pub daily_adjustments: Vec<DayAdjustment>,
}

impl RecoveryPlan {
    /// Sum of all daily reductions
    #[must_use]
    pub fn total_reduction(&self) -> f64 {
        self.daily_adjustments.iter().map(|day| day.reduction).sum()
    }

    /// Lowest daily calorie budget in the plan
    #[must_use]
    pub fn lowest_adjusted_tdee(&self) -> Option<f64> {
        self.daily_adjustments
            .iter()
            .map(|day| day.adjusted_tdee)
            .reduce(f64::min)
    }
}
