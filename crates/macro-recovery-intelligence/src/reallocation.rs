// ABOUTME: Same-day macro reallocation across the meal slots still open today
// ABOUTME: Whole-kcal weighted calorie split, even gram split, and low-budget emergency guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Same-Day Reallocation
//!
//! Splits what is left of today's budget over the meals that have not been
//! logged yet. Calories follow the configured [`MealWeights`] and are rounded to
//! whole kcal by largest remainder, so the allocations always add up to the
//! rounded remaining budget. Macro grams are split evenly.

use macro_recovery_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use macro_recovery_core::models::{
    DayReallocation, EmergencyGuidance, MacroAllocation, MacroRatio, MacroSnapshot, MacroTargets,
    MacroTotals, MealSlot, MealType,
};
use std::cmp::Ordering;
use tracing::debug;

use crate::config::{MealWeights, ReallocationConfig};

/// Build today's slot list from the meal types already logged
#[must_use]
pub fn remaining_slots(logged: &[MealType]) -> Vec<MealSlot> {
    MealSlot::for_day(logged)
}

/// Split the remaining budget over the slots still open
///
/// Returns one allocation per slot with `remaining == true`, in slot order.
/// No open slots yields an empty list.
#[must_use]
pub fn reallocate(
    snapshot: &MacroSnapshot,
    slots: &[MealSlot],
    config: &ReallocationConfig,
) -> Vec<MacroAllocation> {
    let open: Vec<MealType> = slots
        .iter()
        .filter(|slot| slot.remaining)
        .map(|slot| slot.meal_type)
        .collect();

    if open.is_empty() {
        debug!("no open meal slots, nothing to reallocate");
        return Vec::new();
    }

    let remaining = snapshot.remaining();
    debug!(
        remaining_calories = remaining.calories,
        open_slots = open.len(),
        "reallocating remaining budget"
    );
    allocate_budget(&remaining, &open, &config.meal_weights)
}

/// Reallocate the rest of the day and attach emergency guidance when the budget is low
#[must_use]
pub fn plan_remaining_day(
    snapshot: &MacroSnapshot,
    slots: &[MealSlot],
    config: &ReallocationConfig,
) -> DayReallocation {
    DayReallocation {
        allocations: reallocate(snapshot, slots, config),
        emergency: emergency_guidance(snapshot, config),
    }
}

/// Advisory composition for a nearly spent day
///
/// Only produced when a calorie target is set and fewer than the threshold
/// calories remain. Suggested grams spend the remaining calories at the
/// midpoint of each emergency band.
#[must_use]
pub fn emergency_guidance(
    snapshot: &MacroSnapshot,
    config: &ReallocationConfig,
) -> Option<EmergencyGuidance> {
    if !snapshot.has_calorie_target() {
        return None;
    }
    let remaining = snapshot.remaining();
    if remaining.calories >= config.emergency_threshold_kcal {
        return None;
    }

    let midpoint = config.emergency_ratio.normalized_midpoint();
    let suggested = MacroTargets {
        protein_g: round_tenth(
            remaining.calories * midpoint.protein_percent / 100.0 / KCAL_PER_GRAM_PROTEIN,
        ),
        carbs_g: round_tenth(
            remaining.calories * midpoint.carbs_percent / 100.0 / KCAL_PER_GRAM_CARBS,
        ),
        fat_g: round_tenth(remaining.calories * midpoint.fat_percent / 100.0 / KCAL_PER_GRAM_FAT),
    };

    debug!(
        remaining_calories = remaining.calories,
        threshold = config.emergency_threshold_kcal,
        "remaining budget below emergency threshold"
    );

    Some(EmergencyGuidance {
        remaining_calories: remaining.calories,
        target_ratio: config.emergency_ratio,
        current_ratio: MacroRatio::from_grams(remaining.protein_g, remaining.carbs_g, remaining.fat_g),
        suggested,
    })
}

/// Split a budget over the given meals
///
/// Calories are weighted and rounded to whole kcal; grams are split evenly to
/// one decimal.
pub(crate) fn allocate_budget(
    budget: &MacroTotals,
    meals: &[MealType],
    weights: &MealWeights,
) -> Vec<MacroAllocation> {
    if meals.is_empty() {
        return Vec::new();
    }
    let meal_weights: Vec<f64> = meals.iter().map(|meal| weights.weight(*meal)).collect();
    let calories = distribute_whole(budget.calories.round(), &meal_weights);
    let count = meals.len() as f64;

    meals
        .iter()
        .zip(calories)
        .map(|(meal_type, calories)| MacroAllocation {
            meal_type: *meal_type,
            calories,
            protein_g: round_tenth(budget.protein_g / count),
            carbs_g: round_tenth(budget.carbs_g / count),
            fat_g: round_tenth(budget.fat_g / count),
        })
        .collect()
}

/// Distribute a whole number by weight using the largest-remainder method
///
/// Every share is a whole number and the shares sum to `total`. Ties go to the
/// earlier position. Zero total weight falls back to an equal split.
pub(crate) fn distribute_whole(total: f64, weights: &[f64]) -> Vec<f64> {
    if weights.is_empty() {
        return Vec::new();
    }

    let weight_sum: f64 = weights.iter().sum();
    let exact: Vec<f64> = if weight_sum > 0.0 {
        weights.iter().map(|w| total * w / weight_sum).collect()
    } else {
        vec![total / weights.len() as f64; weights.len()]
    };

    let mut shares: Vec<f64> = exact.iter().map(|share| share.floor()).collect();
    let leftover = (total - shares.iter().sum::<f64>()).round().max(0.0) as usize;

    let mut by_remainder: Vec<usize> = (0..exact.len()).collect();
    by_remainder.sort_by(|&a, &b| {
        let rem_a = exact[a] - shares[a];
        let rem_b = exact[b] - shares[b];
        rem_b.partial_cmp(&rem_a).unwrap_or(Ordering::Equal)
    });
    for index in by_remainder.into_iter().take(leftover) {
        shares[index] += 1.0;
    }

    shares
}

/// Round to one decimal place
pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
