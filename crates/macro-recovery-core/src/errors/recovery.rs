// ABOUTME: Domain error taxonomy for exceedance analysis, recovery planning, and plan requests
// ABOUTME: Validation, submission, timeout, and request-lifecycle errors with AppError conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recovery Error Types
//!
//! `RecoveryError` names the small set of failure modes callers are expected
//! to distinguish. Each converts into an [`AppError`] for uniform handling.

use super::{AppError, ErrorCode};
use serde_json::json;
use thiserror::Error;

/// Errors specific to the recovery engine
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecoveryError {
    /// An input value was negative, non-finite, or otherwise unusable
    #[error("Invalid value for '{field}': {reason}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The recommendation collaborator rejected or never received a submission
    #[error("Plan submission to {service} failed: {message}")]
    Submission {
        /// Collaborator name
        service: String,
        /// Collaborator or transport message
        message: String,
    },

    /// A plan request did not finish before the polling ceiling
    #[error("Plan request {request_id} timed out after {elapsed_secs}s")]
    Timeout {
        /// Request that timed out
        request_id: String,
        /// Seconds elapsed since submission
        elapsed_secs: u64,
    },

    /// The collaborator reported that plan generation failed
    #[error("Plan request {request_id} failed: {message}")]
    GenerationFailed {
        /// Request that failed
        request_id: String,
        /// Collaborator message, or a generic reason
        message: String,
    },

    /// No plan request is tracked under this identifier
    #[error("Plan request {0} not found")]
    UnknownRequest(String),

    /// A poll for this request is already outstanding
    #[error("A poll for plan request {0} is already in flight")]
    PollInFlight(String),
}

impl RecoveryError {
    /// Create a validation error
    #[must_use]
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Create a submission error
    #[must_use]
    pub fn submission(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Submission {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Error code this error maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { .. } => ErrorCode::InvalidInput,
            Self::Submission { .. } => ErrorCode::ExternalServiceError,
            Self::Timeout { .. } => ErrorCode::ExternalServiceTimeout,
            Self::GenerationFailed { .. } => ErrorCode::ExternalServiceError,
            Self::UnknownRequest(_) => ErrorCode::ResourceNotFound,
            Self::PollInFlight(_) => ErrorCode::ResourceLocked,
        }
    }
}

impl From<RecoveryError> for AppError {
    fn from(error: RecoveryError) -> Self {
        let app_error = Self::new(error.code(), error.to_string());
        match error {
            RecoveryError::Validation { field, .. } => app_error.with_field(field),
            RecoveryError::Submission { service, .. } => {
                app_error.with_details(json!({ "service": service }))
            }
            RecoveryError::Timeout {
                request_id,
                elapsed_secs,
            } => app_error
                .with_request_id(request_id)
                .with_details(json!({ "elapsed_secs": elapsed_secs })),
            RecoveryError::GenerationFailed { request_id, .. }
            | RecoveryError::UnknownRequest(request_id)
            | RecoveryError::PollInFlight(request_id) => app_error.with_request_id(request_id),
        }
    }
}
