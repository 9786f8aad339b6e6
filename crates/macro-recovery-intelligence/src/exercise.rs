// ABOUTME: Deterministic activity pairings for recovery plan days
// ABOUTME: Maps a day's calorie reduction band and index to a primary and secondary activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macro_recovery_core::models::ExerciseRecommendation;
use serde::{Deserialize, Serialize};

use crate::config::ExerciseBands;

/// How hard a recovery day should train, derived from its reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityBand {
    /// Small reduction, easy movement is enough
    Light,
    /// Mid-sized reduction, steady cardio or light resistance
    Moderate,
    /// Large reduction, interval or sport-specific work
    Intensive,
}

impl IntensityBand {
    /// Band for a daily reduction in kcal
    #[must_use]
    pub fn for_reduction(reduction_kcal: f64, bands: &ExerciseBands) -> Self {
        if reduction_kcal <= bands.light_max_kcal {
            Self::Light
        } else if reduction_kcal <= bands.moderate_max_kcal {
            Self::Moderate
        } else {
            Self::Intensive
        }
    }
}

struct Pairing {
    primary: &'static str,
    secondary: &'static str,
    rationale: &'static str,
}

const LIGHT: [Pairing; 3] = [
    Pairing {
        primary: "15-30 min brisk walk after your largest meal",
        secondary: "Gentle mobility or stretching, 10 min",
        rationale: "A small reduction only needs light movement to support digestion and insulin sensitivity",
    },
    Pairing {
        primary: "Easy cycling, 20-30 min",
        secondary: "Core stability work, 10 min",
        rationale: "Low-intensity cardio adds a modest burn without increasing appetite",
    },
    Pairing {
        primary: "Yoga or pilates session, 30 min",
        secondary: "Evening walk, 15 min",
        rationale: "Recovery-focused movement keeps the day active while the deficit stays small",
    },
];

const MODERATE: [Pairing; 3] = [
    Pairing {
        primary: "30-45 min cycling or swimming at 65-75% HRmax",
        secondary: "Post-meal walk, 15 min",
        rationale: "Steady moderate cardio improves fat oxidation and insulin sensitivity",
    },
    Pairing {
        primary: "Full body light resistance, 40 min",
        secondary: "Brisk walk, 20 min",
        rationale: "Resistance work protects lean mass while intake is reduced",
    },
    Pairing {
        primary: "Jogging or rowing, 30-40 min",
        secondary: "Mobility and stretching, 15 min",
        rationale: "Rotating cardio modes spreads the load and keeps the deficit sustainable",
    },
];

const INTENSIVE: [Pairing; 3] = [
    Pairing {
        primary: "HIIT session, 20-30 min at 75-85% HRmax",
        secondary: "Low-intensity walk, 30 min",
        rationale: "Interval work accelerates calorie burn for a large daily reduction",
    },
    Pairing {
        primary: "Targeted resistance training, 45 min",
        secondary: "Moderate cycling, 20 min",
        rationale: "Pairing strength and cardio preserves muscle during a steep deficit",
    },
    Pairing {
        primary: "Sport-specific drills or circuit training, 40 min",
        secondary: "Active recovery swim or walk, 20 min",
        rationale: "Varied high-effort sessions sustain the burn while limiting repetitive strain",
    },
];

/// Activity pairing for one plan day
///
/// The band picks the table, the 1-based day index rotates through it, so the
/// same inputs always give the same recommendation.
#[must_use]
pub fn recommend(day: u32, reduction_kcal: f64, bands: &ExerciseBands) -> ExerciseRecommendation {
    let table = match IntensityBand::for_reduction(reduction_kcal, bands) {
        IntensityBand::Light => &LIGHT,
        IntensityBand::Moderate => &MODERATE,
        IntensityBand::Intensive => &INTENSIVE,
    };
    let pairing = &table[(day.saturating_sub(1) as usize) % table.len()];

    ExerciseRecommendation {
        primary: pairing.primary.to_owned(),
        secondary: pairing.secondary.to_owned(),
        rationale: pairing.rationale.to_owned(),
    }
}
