// ABOUTME: Async facade that fetches today's intake and decides how to recover from it
// ABOUTME: Snapshot and meal-log collaborator traits plus same-day vs multi-day routing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recovery Assessment
//!
//! Ties the pure algorithms to the collaborators that know what a user ate.
//! A day over target gets a multi-day recovery plan; a day still within target
//! gets its remaining budget reallocated over the meals not yet logged.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::errors::AppResult;
use crate::intelligence::energy::baseline_tdee;
use crate::intelligence::{
    classify, generate_plan, plan_remaining_day, remaining_slots, RecoveryEngineConfig,
};
use crate::models::{
    DayReallocation, ExceedanceDescriptor, MacroSnapshot, MealType, RecoveryPlan, UserProfile,
};

/// Source of consumed-vs-target totals for the current day
#[async_trait]
pub trait MacroSnapshotProvider: Send + Sync {
    /// Today's snapshot for a user
    ///
    /// # Errors
    ///
    /// Returns an error if the totals cannot be loaded
    async fn today_snapshot(&self, user_id: &str) -> AppResult<MacroSnapshot>;
}

/// Source of the meal types a user has already logged today
#[async_trait]
pub trait MealLogProvider: Send + Sync {
    /// Meal types logged today, in any order, duplicates allowed
    ///
    /// # Errors
    ///
    /// Returns an error if the meal log cannot be loaded
    async fn logged_meal_types(&self, user_id: &str) -> AppResult<Vec<MealType>>;
}

/// Recovery route chosen for the day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum RecoveryStrategy {
    /// Target not exceeded: spread what is left over the open meals
    SameDay(DayReallocation),
    /// Target exceeded: absorb the excess over the coming days
    MultiDay(RecoveryPlan),
}

/// Classification plus the chosen recovery route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// How far over target the day is
    pub exceedance: ExceedanceDescriptor,
    /// What to do about it
    pub strategy: RecoveryStrategy,
}

/// Fetches a user's day and routes it to the matching recovery algorithm
pub struct RecoveryAssessor {
    snapshots: Arc<dyn MacroSnapshotProvider>,
    meal_log: Arc<dyn MealLogProvider>,
    config: RecoveryEngineConfig,
}

impl RecoveryAssessor {
    /// Create an assessor over the given collaborators
    #[must_use]
    pub fn new(
        snapshots: Arc<dyn MacroSnapshotProvider>,
        meal_log: Arc<dyn MealLogProvider>,
        config: RecoveryEngineConfig,
    ) -> Self {
        Self {
            snapshots,
            meal_log,
            config,
        }
    }

    /// Engine configuration in use
    #[must_use]
    pub const fn config(&self) -> &RecoveryEngineConfig {
        &self.config
    }

    /// Assess today's intake for a user
    ///
    /// The meal log is only consulted when the day is still within target.
    ///
    /// # Errors
    ///
    /// Returns an error if a collaborator fails, the profile biometrics are
    /// out of range, or the horizon is zero
    #[instrument(skip(self, profile))]
    pub async fn assess(
        &self,
        user_id: &str,
        profile: &UserProfile,
        horizon_days: Option<u32>,
    ) -> AppResult<Assessment> {
        let snapshot = self.snapshots.today_snapshot(user_id).await?;
        let exceedance = classify(&snapshot, &self.config.exceedance);

        let strategy = if exceedance.has_exceedance {
            let baseline = baseline_tdee(profile, &self.config.energy)?;
            let plan = generate_plan(
                exceedance.excess_calories,
                horizon_days,
                baseline,
                &self.config,
            )?;
            info!(
                level = ?exceedance.level,
                excess = exceedance.excess_calories,
                days = plan.plan_duration,
                "Multi-day recovery plan generated"
            );
            RecoveryStrategy::MultiDay(plan)
        } else {
            let logged = self.meal_log.logged_meal_types(user_id).await?;
            let day = plan_remaining_day(
                &snapshot,
                &remaining_slots(&logged),
                &self.config.reallocation,
            );
            debug!(
                open_slots = day.allocations.len(),
                emergency = day.emergency.is_some(),
                "Remaining budget reallocated"
            );
            RecoveryStrategy::SameDay(day)
        };

        Ok(Assessment {
            exceedance,
            strategy,
        })
    }
}
