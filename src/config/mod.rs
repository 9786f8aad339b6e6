// ABOUTME: Runtime configuration for the recovery engine binary and library
// ABOUTME: Plan-request collaborator settings loaded from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Algorithm settings live in [`crate::intelligence::config`]; this module
//! holds what only the runtime needs.

/// Meal-plan collaborator endpoint and polling settings
pub mod planner;

pub use planner::PlannerConfig;
