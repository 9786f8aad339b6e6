// ABOUTME: Nutrition snapshot models for exceedance analysis and same-day reallocation
// ABOUTME: MacroTotals, MacroSnapshot, MealType, MealSlot, MacroAllocation, and exceedance descriptors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::energy::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use crate::errors::RecoveryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// All meal types in the order they occur during a day
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Lowercase name used on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = RecoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" | "snacks" => Ok(Self::Snack),
            other => Err(RecoveryError::validation(
                "meal_type",
                format!("unknown meal type '{other}'"),
            )),
        }
    }
}

/// Calories and macronutrient grams for a period
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroTotals {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
}

impl MacroTotals {
    /// Create totals from raw values (unvalidated)
    #[must_use]
    pub const fn new(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// Totals with only calories set
    #[must_use]
    pub const fn calories_only(calories: f64) -> Self {
        Self::new(calories, 0.0, 0.0, 0.0)
    }

    /// `self - other` per field, floored at zero
    #[must_use]
    pub fn saturating_sub(&self, other: &Self) -> Self {
        Self {
            calories: (self.calories - other.calories).max(0.0),
            protein_g: (self.protein_g - other.protein_g).max(0.0),
            carbs_g: (self.carbs_g - other.carbs_g).max(0.0),
            fat_g: (self.fat_g - other.fat_g).max(0.0),
        }
    }

    fn validate(&self, fields: [&'static str; 4]) -> Result<(), RecoveryError> {
        let values = [self.calories, self.protein_g, self.carbs_g, self.fat_g];
        for (field, value) in fields.into_iter().zip(values) {
            if !value.is_finite() {
                return Err(RecoveryError::validation(field, "must be a finite number"));
            }
            if value < 0.0 {
                return Err(RecoveryError::validation(
                    field,
                    format!("must not be negative, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawMacroSnapshot {
    consumed: MacroTotals,
    target: MacroTotals,
}

impl TryFrom<RawMacroSnapshot> for MacroSnapshot {
    type Error = RecoveryError;

    fn try_from(raw: RawMacroSnapshot) -> Result<Self, Self::Error> {
        Self::new(raw.consumed, raw.target)
    }
}

/// Consumed vs. target nutrition for a period
///
/// Construction validates every field (finite and non-negative), so downstream
/// computations never see negative or `NaN` inputs. A target of zero calories
/// means "target unset".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawMacroSnapshot")]
pub struct MacroSnapshot {
    consumed: MacroTotals,
    target: MacroTotals,
}

impl MacroSnapshot {
    /// Build a validated snapshot
    ///
    /// # Errors
    ///
    /// Returns `RecoveryError::Validation` if any value is negative or non-finite
    pub fn new(consumed: MacroTotals, target: MacroTotals) -> Result<Self, RecoveryError> {
        consumed.validate([
            "consumed.calories",
            "consumed.protein_g",
            "consumed.carbs_g",
            "consumed.fat_g",
        ])?;
        target.validate([
            "target.calories",
            "target.protein_g",
            "target.carbs_g",
            "target.fat_g",
        ])?;
        Ok(Self { consumed, target })
    }

    /// What has been eaten so far
    #[must_use]
    pub const fn consumed(&self) -> &MacroTotals {
        &self.consumed
    }

    /// The period's targets
    #[must_use]
    pub const fn target(&self) -> &MacroTotals {
        &self.target
    }

    /// Whether a calorie target is set
    #[must_use]
    pub fn has_calorie_target(&self) -> bool {
        self.target.calories > 0.0
    }

    /// Remaining budget per macro, never negative
    #[must_use]
    pub fn remaining(&self) -> MacroTotals {
        self.target.saturating_sub(&self.consumed)
    }
}

/// A meal-type slot for the current day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealSlot {
    /// Meal type of this slot
    pub meal_type: MealType,
    /// Whether the slot has no logged entry yet
    pub remaining: bool,
}

impl MealSlot {
    /// Build the day's four slots from the meal types already logged
    #[must_use]
    pub fn for_day(logged: &[MealType]) -> Vec<Self> {
        MealType::ALL
            .into_iter()
            .map(|meal_type| Self {
                meal_type,
                remaining: !logged.contains(&meal_type),
            })
            .collect()
    }
}

/// Budget assigned to one remaining meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroAllocation {
    /// Meal the budget is for
    pub meal_type: MealType,
    /// Calories (whole kcal)
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
}

/// Severity of a calorie exceedance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ExceedanceLevel {
    /// Target not exceeded
    None,
    /// Under the moderate band (default < 25 % over)
    Minor,
    /// Moderate band (default 25-49 % over)
    Moderate,
    /// Large band (default >= 50 % over)
    Large,
}

/// Result of classifying a snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExceedanceDescriptor {
    /// Whether consumed calories exceed the target
    pub has_exceedance: bool,
    /// Severity band
    pub level: ExceedanceLevel,
    /// Calories over target (0 when not exceeded)
    pub excess_calories: f64,
    /// Excess as a percentage of target (0 when the target is unset)
    pub excess_percentage: f64,
}

/// Macronutrient percentage breakdown of calories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroRatio {
    /// Protein as percentage of calories
    pub protein_percent: f64,
    /// Carbohydrates as percentage of calories
    pub carbs_percent: f64,
    /// Fat as percentage of calories
    pub fat_percent: f64,
}

impl MacroRatio {
    /// Calorie share of each macro in the given grams, `None` if there are none
    #[must_use]
    pub fn from_grams(protein_g: f64, carbs_g: f64, fat_g: f64) -> Option<Self> {
        let protein_kcal = protein_g * KCAL_PER_GRAM_PROTEIN;
        let carbs_kcal = carbs_g * KCAL_PER_GRAM_CARBS;
        let fat_kcal = fat_g * KCAL_PER_GRAM_FAT;
        let total = protein_kcal + carbs_kcal + fat_kcal;
        if total <= 0.0 {
            return None;
        }
        Some(Self {
            protein_percent: protein_kcal / total * 100.0,
            carbs_percent: carbs_kcal / total * 100.0,
            fat_percent: fat_kcal / total * 100.0,
        })
    }
}

/// Acceptable percentage band for each macro
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroRatioRange {
    /// Minimum protein share (%)
    pub protein_min: f64,
    /// Maximum protein share (%)
    pub protein_max: f64,
    /// Minimum carbohydrate share (%)
    pub carbs_min: f64,
    /// Maximum carbohydrate share (%)
    pub carbs_max: f64,
    /// Minimum fat share (%)
    pub fat_min: f64,
    /// Maximum fat share (%)
    pub fat_max: f64,
}

impl MacroRatioRange {
    /// Midpoint of each band, rescaled so the three shares sum to 100
    #[must_use]
    pub fn normalized_midpoint(&self) -> MacroRatio {
        let protein = (self.protein_min + self.protein_max) / 2.0;
        let carbs = (self.carbs_min + self.carbs_max) / 2.0;
        let fat = (self.fat_min + self.fat_max) / 2.0;
        let total = protein + carbs + fat;
        if total <= 0.0 {
            return MacroRatio {
                protein_percent: 0.0,
                carbs_percent: 0.0,
                fat_percent: 0.0,
            };
        }
        MacroRatio {
            protein_percent: protein / total * 100.0,
            carbs_percent: carbs / total * 100.0,
            fat_percent: fat / total * 100.0,
        }
    }

    /// Whether a ratio falls inside every band
    #[must_use]
    pub fn contains(&self, ratio: &MacroRatio) -> bool {
        (self.protein_min..=self.protein_max).contains(&ratio.protein_percent)
            && (self.carbs_min..=self.carbs_max).contains(&ratio.carbs_percent)
            && (self.fat_min..=self.fat_max).contains(&ratio.fat_percent)
    }
}

/// Gram targets for protein, carbohydrates, and fat
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroTargets {
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
}

/// Advisory composition for a day with little budget left
///
/// Produced when remaining calories drop below the emergency threshold. The
/// caller is free to ignore it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EmergencyGuidance {
    /// Calories left in the day
    pub remaining_calories: f64,
    /// Recommended high-protein, low-carbohydrate bands
    pub target_ratio: MacroRatioRange,
    /// Composition of the remaining gram budget, if any grams remain
    pub current_ratio: Option<MacroRatio>,
    /// Gram targets that spend the remaining calories at the band midpoints
    pub suggested: MacroTargets,
}

/// Same-day reallocation with optional emergency guidance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayReallocation {
    /// Per-slot budgets for the rest of the day
    pub allocations: Vec<MacroAllocation>,
    /// Advisory composition when the remaining budget is low
    pub emergency: Option<EmergencyGuidance>,
}
