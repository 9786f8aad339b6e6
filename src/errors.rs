// ABOUTME: Error handling re-exports for the recovery engine runtime
// ABOUTME: Exposes the core error taxonomy under the crate's own errors path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use macro_recovery_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
    RecoveryError,
};
pub use macro_recovery_intelligence::config::ConfigError;
