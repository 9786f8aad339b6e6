// ABOUTME: Nutrition and engine constants shared across the workspace
// ABOUTME: Energy density per macronutrient gram and default engine thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Energy density of macronutrients (Atwater general factors)
pub mod energy {
    /// Protein: 4 kcal per gram
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Carbohydrate: 4 kcal per gram
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Fat: 9 kcal per gram
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Default exceedance severity bands (percent over target)
pub mod exceedance {
    /// Lower bound of the moderate band
    pub const MODERATE_PERCENT: f64 = 25.0;
    /// Lower bound of the large band
    pub const LARGE_PERCENT: f64 = 50.0;
}

/// Defaults for the recovery planners
pub mod recovery {
    /// Remaining calories below which emergency composition guidance is produced
    pub const EMERGENCY_THRESHOLD_KCAL: f64 = 500.0;
    /// Minimum safe daily calorie intake a plan may recommend
    pub const SAFE_CALORIE_FLOOR_KCAL: f64 = 1200.0;
    /// Default multi-day recovery horizon
    pub const DEFAULT_HORIZON_DAYS: u32 = 3;
    /// Hard limit on a recovery horizon, requested or extended to respect the floor
    pub const MAX_HORIZON_DAYS: u32 = 365;
    /// Daily protein floor during a recovery plan (grams)
    pub const PROTEIN_FLOOR_G: f64 = 100.0;
}

/// Defaults for AI plan request polling
pub mod polling {
    /// Interval between status polls (seconds)
    pub const POLL_INTERVAL_SECS: u64 = 10;
    /// Hard ceiling after which a request is treated as timed out (25 minutes)
    pub const POLL_CEILING_SECS: u64 = 25 * 60;
    /// Generic message when the collaborator gives no failure reason
    pub const GENERIC_FAILURE_MESSAGE: &str = "Meal plan generation failed";
}
