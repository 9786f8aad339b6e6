// ABOUTME: AI meal-plan request lifecycle and the collaborator seam it talks through
// ABOUTME: PlanService trait, wire-level receipts and statuses, orchestrator and HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Requests
//!
//! Meal plans are generated asynchronously by an external recommendation
//! backend. [`PlanRequestOrchestrator`] tracks each request from submission to
//! a terminal state while [`PlanService`] abstracts the backend itself, so the
//! orchestrator can run against [`HttpPlanService`] in production and an
//! in-memory double in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppResult;
use crate::models::{PlanStatus, PlanSubmission};

/// HTTP implementation of [`PlanService`]
pub mod http;

/// Request tracking, polling discipline and timeouts
pub mod orchestrator;

pub use http::HttpPlanService;
pub use orchestrator::{PlanRequestOrchestrator, PollingPolicy};

/// Acknowledgement returned by the backend when a request is accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    /// Identifier the backend uses for the request
    pub remote_id: String,
    /// Initial status reported by the backend
    pub status: PlanStatus,
}

/// Backend view of a request at poll time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteStatus {
    /// Current status
    pub status: PlanStatus,
    /// Generated plan, present once completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Failure message, present when the backend gives one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RemoteStatus {
    /// Still generating
    #[must_use]
    pub const fn processing() -> Self {
        Self {
            status: PlanStatus::Processing,
            result: None,
            error: None,
        }
    }

    /// Finished with a plan
    #[must_use]
    pub const fn completed(result: Value) -> Self {
        Self {
            status: PlanStatus::Completed,
            result: Some(result),
            error: None,
        }
    }

    /// Finished without a plan
    #[must_use]
    pub const fn failed(error: Option<String>) -> Self {
        Self {
            status: PlanStatus::Failed,
            result: None,
            error,
        }
    }
}

/// AI recommendation backend that generates meal plans
///
/// Implementations make exactly one remote call per method invocation and
/// never retry; retry and timeout policy belongs to the orchestrator.
#[async_trait]
pub trait PlanService: Send + Sync {
    /// Collaborator name used in logs and error details
    fn name(&self) -> &'static str;

    /// Forward a new request to the backend
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or rejects the request
    async fn submit(&self, submission: &PlanSubmission) -> AppResult<SubmitReceipt>;

    /// Fetch the current status of a previously submitted request
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or answers with a
    /// non-success status
    async fn poll(&self, remote_id: &str) -> AppResult<RemoteStatus>;
}
