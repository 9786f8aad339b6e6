// ABOUTME: Core data models for the macro recovery engine
// ABOUTME: Nutrition snapshots, meal slots, recovery plans, plan requests, and user profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Snapshot, exceedance, meal slot, and allocation types
pub mod nutrition;

/// AI meal-plan request lifecycle types
pub mod plan_request;

/// User biometric profile used for energy expenditure estimates
pub mod profile;

/// Multi-day recovery plan types
pub mod recovery;

pub use nutrition::{
    DayReallocation, EmergencyGuidance, ExceedanceDescriptor, ExceedanceLevel, MacroAllocation,
    MacroRatio, MacroRatioRange, MacroSnapshot, MacroTargets, MacroTotals, MealSlot, MealType,
};
pub use plan_request::{FailureKind, PlanFailure, PlanRequest, PlanStatus, PlanSubmission, RequestId};
pub use profile::{ActivityLevel, Gender, UserProfile};
pub use recovery::{DayAdjustment, ExerciseRecommendation, RecoveryPlan};
