// ABOUTME: Application-level constants for the recovery engine runtime
// ABOUTME: Service names, collaborator endpoints, and runtime defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use macro_recovery_core::constants::{energy, exceedance, polling, recovery};

/// Service names used in structured logs and error details
pub mod service_names {
    /// This engine
    pub const MACRO_RECOVERY: &str = "macro-recovery";
    /// The AI meal-plan collaborator
    pub const MEAL_PLANNER: &str = "meal-planner";
}

/// Meal-plan collaborator HTTP settings
pub mod planner_http {
    /// Default base URL of the recommendation backend
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";
    /// Path for submitting plan requests (relative to the base URL)
    pub const REQUESTS_PATH: &str = "api/planner/requests";
    /// Per-request HTTP timeout
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
}
