// ABOUTME: Core types and constants for the macro recovery engine
// ABOUTME: Foundation crate with error handling, the nutrition data model, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macro Recovery Core
//!
//! Foundation crate providing shared types and constants for the caloric
//! exceedance and recovery engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `RecoveryError`
//! - **constants**: Nutrition constants (kcal per gram) and engine defaults
//! - **models**: Snapshots, meal slots, allocations, recovery plans, and plan requests

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`MacroSnapshot`, `MealSlot`, `RecoveryPlan`, `PlanRequest`, etc.)
pub mod models;
