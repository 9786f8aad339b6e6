// ABOUTME: Energy expenditure configuration for baseline TDEE estimates
// ABOUTME: Mifflin-St Jeor coefficients and activity factor multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Expenditure Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Energy expenditure settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Basal Metabolic Rate (BMR) coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
}

/// Mifflin-St Jeor coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
    /// Lowest BMR ever reported (kcal/day)
    pub min_bmr_kcal: f64,
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl EnergyConfig {
    /// Activity factors must be at least 1.0 and ascend with activity
    ///
    /// # Errors
    ///
    /// Returns an error if a factor is below 1.0 or the factors are out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = &self.activity_factors;
        let factors = [
            f.sedentary,
            f.lightly_active,
            f.moderately_active,
            f.very_active,
            f.extra_active,
        ];
        if factors.iter().any(|x| !x.is_finite() || *x < 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "activity factors must be >= 1.0",
            ));
        }
        if factors.windows(2).any(|pair| pair[1] < pair[0]) {
            return Err(ConfigError::InvalidRange(
                "activity factors must not decrease with activity level",
            ));
        }
        if !self.bmr.min_bmr_kcal.is_finite() || self.bmr.min_bmr_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("min_bmr_kcal must be > 0"));
        }
        Ok(())
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            min_bmr_kcal: 1000.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}
