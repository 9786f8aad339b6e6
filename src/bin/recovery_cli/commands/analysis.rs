// ABOUTME: Offline recovery commands: classify, reallocate, and multi-day plan
// ABOUTME: Reads JSON inputs, runs the pure algorithms, prints pretty JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use macro_recovery::errors::AppResult;
use macro_recovery::intelligence::config::MealWeights;
use macro_recovery::intelligence::energy::baseline_tdee;
use macro_recovery::intelligence::{
    classify as classify_snapshot, generate_plan, plan_remaining_day, remaining_slots,
    RecoveryEngineConfig,
};
use macro_recovery::models::{MacroSnapshot, MealType, UserProfile};
use tracing::info;

use crate::helpers::json::{print_json, read_json};

/// Classify a snapshot file
pub fn classify(snapshot: &Path) -> AppResult<()> {
    let config = RecoveryEngineConfig::load()?;
    let snapshot: MacroSnapshot = read_json(snapshot)?;

    print_json(&classify_snapshot(&snapshot, &config.exceedance))
}

/// Reallocate the rest of the day over the meals not yet logged
pub fn reallocate(snapshot: &Path, logged: &[MealType], standard_weights: bool) -> AppResult<()> {
    let mut config = RecoveryEngineConfig::load()?;
    if standard_weights {
        config.reallocation.meal_weights = MealWeights::standard();
    }
    let snapshot: MacroSnapshot = read_json(snapshot)?;

    let day = plan_remaining_day(&snapshot, &remaining_slots(logged), &config.reallocation);
    print_json(&day)
}

/// Build a multi-day recovery plan
///
/// The baseline comes from `baseline`, else from the profile file, else from
/// the default profile.
pub fn plan(
    excess: f64,
    days: Option<u32>,
    baseline: Option<f64>,
    profile: Option<&Path>,
) -> AppResult<()> {
    let config = RecoveryEngineConfig::load()?;

    let baseline = match (baseline, profile) {
        (Some(baseline), _) => baseline,
        (None, Some(path)) => {
            let profile: UserProfile = read_json(path)?;
            let estimated = baseline_tdee(&profile, &config.energy)?;
            info!(baseline = estimated, "Baseline estimated from profile");
            estimated
        }
        (None, None) => {
            let estimated = baseline_tdee(&UserProfile::default(), &config.energy)?;
            info!(baseline = estimated, "Baseline estimated from the default profile");
            estimated
        }
    };

    let plan = generate_plan(excess, days, baseline, &config)?;
    print_json(&plan)
}
