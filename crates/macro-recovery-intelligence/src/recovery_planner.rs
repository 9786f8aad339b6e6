// ABOUTME: Multi-day recovery planning that spreads a calorie excess over reduced-intake days
// ABOUTME: Enforces the safe calorie floor, extends the horizon when needed, and pairs activities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Multi-Day Recovery Planner
//!
//! Given an excess in kcal, a horizon, and a baseline TDEE, produces a
//! day-by-day schedule of reduced budgets:
//!
//! 1. The excess is rounded to whole kcal.
//! 2. Each day may drop at most `floor(baseline - safe_floor)` kcal. When an
//!    equal split over the requested horizon would breach that, the horizon is
//!    extended to the number of days that keeps every day at or above the floor.
//! 3. `max_horizon_days` (365 by default) is a hard limit on both the requested
//!    and the extended horizon; plans that would need more are rejected.
//! 4. The excess is split into whole-kcal reductions by largest remainder, so
//!    `sum(reduction) == round(excess)`.
//!
//! Each day also gets macro targets with a protein floor, a four-meal split of
//! its budget, and an activity pairing.

use macro_recovery_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use macro_recovery_core::errors::RecoveryError;
use macro_recovery_core::models::{
    DayAdjustment, MacroTargets, MacroTotals, MealType, RecoveryPlan,
};
use tracing::{debug, info, warn};

use crate::config::{RecoveryEngineConfig, RecoveryPlanConfig};
use crate::exercise;
use crate::reallocation::{allocate_budget, distribute_whole, round_tenth};

/// Build a recovery plan for `total_excess` kcal
///
/// `horizon_days` of `None` uses the configured default horizon.
///
/// # Errors
///
/// Returns `RecoveryError::Validation` if the excess is negative or not finite,
/// the horizon is zero or above `max_horizon_days`, the baseline is not
/// positive, the baseline leaves no room above the safe calorie floor while
/// there is excess to absorb, or absorbing the excess above the floor would
/// take more than `max_horizon_days`
pub fn generate_plan(
    total_excess: f64,
    horizon_days: Option<u32>,
    baseline_tdee: f64,
    config: &RecoveryEngineConfig,
) -> Result<RecoveryPlan, RecoveryError> {
    let plan_config = &config.recovery_plan;
    let requested = horizon_days.unwrap_or(plan_config.default_horizon_days);
    validate_inputs(total_excess, requested, baseline_tdee, plan_config)?;

    let total = total_excess.round();
    let max_daily = (baseline_tdee - plan_config.safe_calorie_floor_kcal).floor();

    if total > 0.0 && max_daily <= 0.0 {
        return Err(RecoveryError::validation(
            "baseline_tdee",
            format!(
                "baseline {baseline_tdee} kcal leaves no room above the safe floor of {} kcal",
                plan_config.safe_calorie_floor_kcal
            ),
        ));
    }

    let duration = plan_duration(total, max_daily, requested, plan_config)?;
    let reductions = distribute_whole(total, &vec![1.0; duration as usize]);
    let daily_adjustments: Vec<DayAdjustment> = (1..=duration)
        .zip(reductions)
        .map(|(day, reduction)| build_day(day, reduction, baseline_tdee, config))
        .collect();

    let plan = RecoveryPlan {
        total_excess: total,
        daily_reduction: round_tenth(total / f64::from(duration)),
        plan_duration: duration,
        requested_duration: requested,
        horizon_extended: duration > requested,
        baseline_tdee,
        daily_adjustments,
    };

    info!(
        total_excess = plan.total_excess,
        plan_duration = plan.plan_duration,
        daily_reduction = plan.daily_reduction,
        "generated recovery plan"
    );

    Ok(plan)
}

fn validate_inputs(
    total_excess: f64,
    horizon: u32,
    baseline_tdee: f64,
    config: &RecoveryPlanConfig,
) -> Result<(), RecoveryError> {
    if !total_excess.is_finite() {
        return Err(RecoveryError::validation(
            "total_excess",
            "must be a finite number",
        ));
    }
    if total_excess < 0.0 {
        return Err(RecoveryError::validation(
            "total_excess",
            format!("must not be negative, got {total_excess}"),
        ));
    }
    if horizon == 0 {
        return Err(RecoveryError::validation(
            "horizon_days",
            "must be at least 1 day",
        ));
    }
    if horizon > config.max_horizon_days {
        return Err(RecoveryError::validation(
            "horizon_days",
            format!(
                "must not exceed {} days, got {horizon}",
                config.max_horizon_days
            ),
        ));
    }
    if !baseline_tdee.is_finite() || baseline_tdee <= 0.0 {
        return Err(RecoveryError::validation(
            "baseline_tdee",
            format!("must be a positive number, got {baseline_tdee}"),
        ));
    }
    Ok(())
}

/// Days needed to keep every day at or above the floor
///
/// `max_daily` is positive whenever `total` is.
fn plan_duration(
    total: f64,
    max_daily: f64,
    requested: u32,
    config: &RecoveryPlanConfig,
) -> Result<u32, RecoveryError> {
    if total <= 0.0 {
        return Ok(requested);
    }
    let needed = (total / max_daily).ceil();
    if needed > f64::from(config.max_horizon_days) {
        return Err(RecoveryError::validation(
            "total_excess",
            format!(
                "{total} kcal needs {needed} days above the safe floor, more than the {} day limit",
                config.max_horizon_days
            ),
        ));
    }
    let needed = needed as u32;
    if needed <= requested {
        return Ok(requested);
    }

    warn!(
        requested_days = requested,
        extended_days = needed,
        "extending recovery horizon to respect the safe calorie floor"
    );
    Ok(needed)
}

fn build_day(
    day: u32,
    reduction: f64,
    baseline_tdee: f64,
    config: &RecoveryEngineConfig,
) -> DayAdjustment {
    let plan_config = &config.recovery_plan;
    let adjusted_tdee = baseline_tdee - reduction;
    let macro_targets = day_macro_targets(adjusted_tdee, plan_config);

    let budget = MacroTotals::new(
        adjusted_tdee,
        macro_targets.protein_g,
        macro_targets.carbs_g,
        macro_targets.fat_g,
    );
    let meal_allocation = allocate_budget(&budget, &MealType::ALL, &config.reallocation.meal_weights);

    debug!(day, reduction, adjusted_tdee, "planned recovery day");

    DayAdjustment {
        day,
        reduction,
        adjusted_tdee,
        macro_targets,
        exercise: exercise::recommend(day, reduction, &plan_config.exercise_bands),
        meal_allocation,
    }
}

/// Gram targets for a day's budget
///
/// Protein takes its configured share but never less than the protein floor;
/// the calories left over are split between carbohydrates and fat in the
/// ratio of their configured shares.
fn day_macro_targets(adjusted_tdee: f64, config: &RecoveryPlanConfig) -> MacroTargets {
    let split = &config.macro_split;
    let protein_g = (adjusted_tdee * split.protein_percent / 100.0 / KCAL_PER_GRAM_PROTEIN)
        .max(config.protein_floor_g);
    let rest_kcal = protein_g
        .mul_add(-KCAL_PER_GRAM_PROTEIN, adjusted_tdee)
        .max(0.0);

    let carb_fat_total = split.carbs_percent + split.fat_percent;
    let carbs_share = if carb_fat_total > 0.0 {
        split.carbs_percent / carb_fat_total
    } else {
        0.5
    };

    MacroTargets {
        protein_g: round_tenth(protein_g),
        carbs_g: round_tenth(rest_kcal * carbs_share / KCAL_PER_GRAM_CARBS),
        fat_g: round_tenth(rest_kcal * (1.0 - carbs_share) / KCAL_PER_GRAM_FAT),
    }
}
