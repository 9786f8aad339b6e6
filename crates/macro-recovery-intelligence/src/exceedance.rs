// ABOUTME: Calorie exceedance classification for a consumed-vs-target snapshot
// ABOUTME: Computes excess calories, percent over target, and the severity band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macro_recovery_core::models::{ExceedanceDescriptor, ExceedanceLevel, MacroSnapshot};
use tracing::debug;

use crate::config::ExceedanceThresholds;

/// Classify how far consumption went over the calorie target
///
/// Formula: `excess = max(0, consumed - target)`, `pct = excess / target * 100`
///
/// An unset target (zero calories) has nothing to exceed and always yields
/// [`ExceedanceLevel::None`] with zero excess and zero percent.
#[must_use]
pub fn classify(snapshot: &MacroSnapshot, thresholds: &ExceedanceThresholds) -> ExceedanceDescriptor {
    if !snapshot.has_calorie_target() {
        debug!("calorie target unset, no exceedance possible");
        return ExceedanceDescriptor {
            has_exceedance: false,
            level: ExceedanceLevel::None,
            excess_calories: 0.0,
            excess_percentage: 0.0,
        };
    }

    let target = snapshot.target().calories;
    let excess_calories = (snapshot.consumed().calories - target).max(0.0);
    let excess_percentage = excess_calories / target * 100.0;
    let level = level_for(excess_calories, excess_percentage, thresholds);

    debug!(
        excess_calories,
        excess_percentage,
        ?level,
        "classified calorie exceedance"
    );

    ExceedanceDescriptor {
        has_exceedance: excess_calories > 0.0,
        level,
        excess_calories,
        excess_percentage,
    }
}

fn level_for(
    excess_calories: f64,
    excess_percentage: f64,
    thresholds: &ExceedanceThresholds,
) -> ExceedanceLevel {
    if excess_calories <= 0.0 {
        ExceedanceLevel::None
    } else if excess_percentage >= thresholds.large_percent {
        ExceedanceLevel::Large
    } else if excess_percentage >= thresholds.moderate_percent {
        ExceedanceLevel::Moderate
    } else {
        ExceedanceLevel::Minor
    }
}
