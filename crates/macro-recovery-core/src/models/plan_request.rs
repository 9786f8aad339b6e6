// ABOUTME: Lifecycle models for asynchronously generated AI meal plans
// ABOUTME: RequestId, PlanStatus state machine, PlanRequest, and failure reasons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::RecoveryError;

/// Opaque identifier handed to callers for one plan request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Generate a fresh identifier
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RequestId {
    type Err = RecoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| RecoveryError::validation("request_id", e.to_string()))
    }
}

/// Status of a plan request
///
/// `Processing` is the only non-terminal state. `Completed` and `Failed` are final.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// Collaborator is still generating the plan
    Processing,
    /// Plan generated
    Completed,
    /// Generation failed or timed out
    Failed,
}

impl PlanStatus {
    /// Whether no further transitions are possible
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Why a plan request failed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The collaborator reported a failure
    Collaborator,
    /// The polling ceiling elapsed without a terminal status
    Timeout,
}

/// Failure reason surfaced to the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanFailure {
    /// Failure category
    pub kind: FailureKind,
    /// Collaborator message when available, otherwise a generic reason
    pub message: String,
}

/// Input forwarded to the recommendation collaborator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSubmission {
    /// Free-form request from the user (preferences, meal count, notes)
    pub user_input: serde_json::Value,
    /// Profile data the collaborator personalises with
    pub user_profile: serde_json::Value,
}

/// One AI meal-plan generation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Caller-facing identifier
    pub id: RequestId,
    /// Current status
    pub status: PlanStatus,
    /// When the request was submitted
    pub submitted_at: DateTime<Utc>,
    /// Generated plan once completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// Failure reason once failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<PlanFailure>,
    /// Collaborator polls issued so far
    pub polls: u32,
    /// Polls that failed at the transport level
    pub transient_errors: u32,
}

impl PlanRequest {
    /// New request in the `Processing` state
    #[must_use]
    pub fn processing(id: RequestId, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id,
            status: PlanStatus::Processing,
            submitted_at,
            result: None,
            failure: None,
            polls: 0,
            transient_errors: 0,
        }
    }

    /// Transition to `Completed`; returns false if already terminal
    pub fn complete(&mut self, result: serde_json::Value) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = PlanStatus::Completed;
        self.result = Some(result);
        true
    }

    /// Transition to `Failed`; returns false if already terminal
    pub fn fail(&mut self, kind: FailureKind, message: impl Into<String>) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = PlanStatus::Failed;
        self.failure = Some(PlanFailure {
            kind,
            message: message.into(),
        });
        true
    }
}
