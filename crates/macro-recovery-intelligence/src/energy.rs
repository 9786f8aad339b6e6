// ABOUTME: Baseline energy expenditure estimates for recovery planning
// ABOUTME: Mifflin-St Jeor BMR and activity-factor TDEE from a user profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Energy Expenditure
//!
//! Recovery plans subtract their reductions from a baseline TDEE. When the
//! caller only has a profile, this module estimates it.
//!
//! # Reference
//! Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241

use macro_recovery_core::errors::RecoveryError;
use macro_recovery_core::models::{ActivityLevel, Gender, UserProfile};
use tracing::debug;

use crate::config::{ActivityFactorsConfig, BmrConfig, EnergyConfig};

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor formula
///
/// Formula:
/// - Men: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) + 5
/// - Women: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) - 161
///
/// The result is never below `config.min_bmr_kcal`.
///
/// # Errors
///
/// Returns an error if weight, height, or age is outside the formula's valid range
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> Result<f64, RecoveryError> {
    if weight_kg.is_nan() || weight_kg <= 0.0 || weight_kg > 300.0 {
        return Err(RecoveryError::validation(
            "weight_kg",
            "must be between 0 and 300 kg",
        ));
    }
    if height_cm.is_nan() || height_cm <= 0.0 || height_cm > 300.0 {
        return Err(RecoveryError::validation(
            "height_cm",
            "must be between 0 and 300 cm",
        ));
    }
    if !(10..=120).contains(&age) {
        return Err(RecoveryError::validation(
            "age",
            "must be between 10 and 120 years",
        ));
    }

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    let bmr = config.msj_age_coef.mul_add(
        f64::from(age),
        config
            .msj_weight_coef
            .mul_add(weight_kg, config.msj_height_coef * height_cm),
    ) + gender_constant;

    Ok(bmr.max(config.min_bmr_kcal))
}

/// Calculate Total Daily Energy Expenditure: `BMR x activity factor`
///
/// # Errors
///
/// Returns an error if BMR is not positive
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> Result<f64, RecoveryError> {
    if !bmr.is_finite() || bmr <= 0.0 {
        return Err(RecoveryError::validation("bmr", "must be positive"));
    }

    let activity_factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::LightlyActive => config.lightly_active,
        ActivityLevel::ModeratelyActive => config.moderately_active,
        ActivityLevel::VeryActive => config.very_active,
        ActivityLevel::ExtraActive => config.extra_active,
    };

    Ok(bmr * activity_factor)
}

/// Baseline TDEE for a profile, rounded to whole kcal
///
/// # Errors
///
/// Returns an error if the profile's biometrics are out of range
pub fn baseline_tdee(profile: &UserProfile, config: &EnergyConfig) -> Result<f64, RecoveryError> {
    let bmr = calculate_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    )?;
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors)?.round();
    debug!(bmr, tdee, "estimated baseline energy expenditure");
    Ok(tdee)
}
