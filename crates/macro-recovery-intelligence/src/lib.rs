// ABOUTME: Recovery allocation algorithms for the macro recovery engine
// ABOUTME: Exceedance classification, same-day reallocation, multi-day planning, and energy estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Macro Recovery Intelligence
//!
//! Pure, synchronous algorithms behind the recovery engine. Nothing in this
//! crate performs I/O or holds shared mutable state; every function takes its
//! configuration explicitly so callers can run them from any context.
//!
//! - [`exceedance`] decides whether and how badly a calorie target was exceeded
//! - [`reallocation`] splits what is left of today's budget over the remaining meals
//! - [`recovery_planner`] spreads an excess over several days of reduced intake
//! - [`energy`] estimates a baseline daily energy expenditure from a profile

#![deny(unsafe_code)]

/// Engine configuration with environment overrides
pub mod config;

/// BMR and TDEE estimates from a user profile
pub mod energy;

/// Exceedance classification
pub mod exceedance;

/// Activity pairings for recovery days
pub mod exercise;

/// Same-day reallocation across remaining meal slots
pub mod reallocation;

/// Multi-day recovery planning
pub mod recovery_planner;

pub use config::RecoveryEngineConfig;
pub use exceedance::classify;
pub use reallocation::{plan_remaining_day, reallocate, remaining_slots};
pub use recovery_planner::generate_plan;
