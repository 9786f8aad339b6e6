// ABOUTME: User biometric profile for energy expenditure estimates
// ABOUTME: Gender, activity level, and profile defaults for incomplete onboarding data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male gender (higher BMR)
    Male,
    /// Female gender (lower BMR)
    Female,
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (hard training 2x/day)
    ExtraActive,
}

impl ActivityLevel {
    /// Parse the activity labels used by onboarding forms
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Self::Sedentary,
            "light" | "lightly_active" | "lightly active" => Self::LightlyActive,
            "active" | "very_active" | "very active" => Self::VeryActive,
            "extra" | "extra_active" | "extra active" | "athlete" => Self::ExtraActive,
            _ => Self::ModeratelyActive,
        }
    }
}

/// Biometric profile of the user a plan is built for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Biological gender for BMR calculation
    pub gender: Gender,
    /// Activity level for TDEE multiplier
    pub activity_level: ActivityLevel,
}

impl Default for UserProfile {
    // Fallbacks applied when onboarding data is incomplete
    fn default() -> Self {
        Self {
            weight_kg: 70.0,
            height_cm: 170.0,
            age: 25,
            gender: Gender::Male,
            activity_level: ActivityLevel::ModeratelyActive,
        }
    }
}
