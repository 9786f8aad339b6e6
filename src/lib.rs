// ABOUTME: Main library entry point for the caloric exceedance and recovery engine
// ABOUTME: Wires the recovery algorithms to plan-request orchestration, collaborators, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macro Recovery
//!
//! Decides whether a user went over their calorie target, how badly, and how to
//! recover: by redistributing the rest of today's budget or by spreading the
//! excess over a few days of reduced intake. Also tracks AI meal-plan requests
//! from submission to a terminal state.
//!
//! ## Workspace
//!
//! - `macro-recovery-core`: error taxonomy, data model, constants
//! - `macro-recovery-intelligence`: classifier, reallocator, recovery planner, energy estimates
//! - this crate: plan request orchestration, HTTP collaborator, assessor, logging, CLI
//!
//! ## Example
//!
//! ```rust,no_run
//! use macro_recovery::intelligence::{classify, generate_plan, RecoveryEngineConfig};
//! use macro_recovery::models::{MacroSnapshot, MacroTotals};
//!
//! # fn main() -> Result<(), macro_recovery::errors::AppError> {
//! let config = RecoveryEngineConfig::global();
//! let snapshot = MacroSnapshot::new(
//!     MacroTotals::calories_only(2600.0),
//!     MacroTotals::calories_only(2000.0),
//! )?;
//! let exceedance = classify(&snapshot, &config.exceedance);
//! let plan = generate_plan(exceedance.excess_calories, None, 2200.0, config)?;
//! println!("{} days at -{} kcal", plan.plan_duration, plan.daily_reduction);
//! # Ok(())
//! # }
//! ```

/// Snapshot and meal-log collaborators plus the assessment facade
pub mod assessment;

/// Runtime configuration for the plan-request collaborator
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// AI meal-plan request lifecycle and collaborators
pub mod planner;

/// Core data models
pub use macro_recovery_core::models;

/// Recovery algorithms and their configuration
pub use macro_recovery_intelligence as intelligence;
