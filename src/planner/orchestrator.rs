// ABOUTME: Tracks outstanding AI meal-plan requests from submission to a terminal state
// ABOUTME: Fixed-interval polling, hard ceiling timeout, and single outstanding poll per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use dashmap::DashMap;
use serde_json::Value;
use tokio::sync::Mutex;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, instrument, warn};

use super::{PlanService, RemoteStatus};
use crate::constants::polling::{GENERIC_FAILURE_MESSAGE, POLL_CEILING_SECS, POLL_INTERVAL_SECS};
use crate::errors::RecoveryError;
use crate::models::{FailureKind, PlanRequest, PlanStatus, PlanSubmission, RequestId};

/// How often a request is polled and for how long
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingPolicy {
    /// Delay between two polls of the same request
    pub interval: Duration,
    /// Time after submission at which a request is failed with a timeout
    pub ceiling: Duration,
}

impl Default for PollingPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(POLL_INTERVAL_SECS),
            ceiling: Duration::from_secs(POLL_CEILING_SECS),
        }
    }
}

impl PollingPolicy {
    /// Polls issued before the ceiling when driven at the fixed interval
    #[must_use]
    pub fn max_polls(&self) -> u128 {
        let interval = self.interval.as_millis().max(1);
        self.ceiling.as_millis().div_ceil(interval)
    }
}

struct TrackedRequest {
    remote_id: String,
    started: Instant,
    state: Mutex<PlanRequest>,
}

/// Lifecycle manager for AI meal-plan requests
///
/// Requests move `processing -> completed | failed` and never leave a terminal
/// state. Each request is guarded by its own lock taken with `try_lock`, so a
/// second concurrent poll of the same request is rejected instead of queued.
pub struct PlanRequestOrchestrator {
    service: Arc<dyn PlanService>,
    policy: PollingPolicy,
    requests: DashMap<RequestId, Arc<TrackedRequest>>,
}

impl PlanRequestOrchestrator {
    /// Create an orchestrator over the given collaborator
    #[must_use]
    pub fn new(service: Arc<dyn PlanService>, policy: PollingPolicy) -> Self {
        Self {
            service,
            policy,
            requests: DashMap::new(),
        }
    }

    /// Polling policy in effect
    #[must_use]
    pub const fn policy(&self) -> &PollingPolicy {
        &self.policy
    }

    /// Number of requests currently tracked, terminal ones included
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.requests.len()
    }

    /// Submit a new plan request to the collaborator
    ///
    /// # Errors
    ///
    /// Returns `RecoveryError::Submission` if the collaborator call fails or the
    /// collaborator reports the request as failed on arrival. Submissions are
    /// never retried.
    #[instrument(skip_all, fields(service = self.service.name()))]
    pub async fn submit(
        &self,
        user_input: Value,
        user_profile: Value,
    ) -> Result<RequestId, RecoveryError> {
        let submission = PlanSubmission {
            user_input,
            user_profile,
        };

        let receipt = self.service.submit(&submission).await.map_err(|e| {
            warn!(error = %e, "Plan submission failed");
            RecoveryError::submission(self.service.name(), e.message)
        })?;

        if receipt.status == PlanStatus::Failed {
            warn!(remote_id = %receipt.remote_id, "Collaborator rejected plan request");
            return Err(RecoveryError::submission(
                self.service.name(),
                format!("request {} rejected on submission", receipt.remote_id),
            ));
        }

        let id = RequestId::new();
        info!(request_id = %id, remote_id = %receipt.remote_id, "Plan request submitted");
        self.requests.insert(
            id,
            Arc::new(TrackedRequest {
                remote_id: receipt.remote_id,
                started: Instant::now(),
                state: Mutex::new(PlanRequest::processing(id, Utc::now())),
            }),
        );

        Ok(id)
    }

    /// Advance a request by at most one collaborator call
    ///
    /// Terminal requests are returned as stored. Once the polling ceiling has
    /// elapsed the request is failed with a timeout and the collaborator is not
    /// called. Transport failures leave the request processing.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRequest` for an id that is not tracked and
    /// `PollInFlight` if another poll of the same request has not returned yet
    pub async fn poll(&self, id: RequestId) -> Result<PlanRequest, RecoveryError> {
        let tracked = self.tracked(id)?;
        let mut state = tracked
            .state
            .try_lock()
            .map_err(|_| RecoveryError::PollInFlight(id.to_string()))?;

        if state.status.is_terminal() {
            return Ok(state.clone());
        }

        if self.ceiling_elapsed(&tracked) {
            self.expire(&mut state);
            return Ok(state.clone());
        }

        state.polls += 1;
        match self.service.poll(&tracked.remote_id).await {
            Ok(remote) => Self::apply_remote(&mut state, remote),
            Err(e) => {
                state.transient_errors += 1;
                warn!(
                    request_id = %id,
                    polls = state.polls,
                    error = %e,
                    "Plan poll failed, request stays processing"
                );
            }
        }

        if !state.status.is_terminal() && self.ceiling_elapsed(&tracked) {
            self.expire(&mut state);
        }

        Ok(state.clone())
    }

    /// Poll on the fixed interval until the request reaches a terminal state
    ///
    /// The first poll happens immediately. Dropping the returned future stops
    /// polling without affecting the stored request.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRequest` if the id is not tracked
    pub async fn poll_until_terminal(&self, id: RequestId) -> Result<PlanRequest, RecoveryError> {
        let mut ticker = time::interval(self.policy.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match self.poll(id).await {
                Ok(request) if request.status.is_terminal() => return Ok(request),
                Ok(_) | Err(RecoveryError::PollInFlight(_)) => {}
                Err(e) => return Err(e),
            }
        }
    }

    /// Drive a request to completion and return the generated plan
    ///
    /// The terminal request is acknowledged before its outcome is returned, so
    /// the id is no longer tracked afterwards.
    ///
    /// # Errors
    ///
    /// Returns `Timeout` when the ceiling elapsed, `GenerationFailed` when the
    /// collaborator reported a failure, and `UnknownRequest` for an untracked id
    pub async fn await_plan(&self, id: RequestId) -> Result<Value, RecoveryError> {
        let request = self.poll_until_terminal(id).await?;
        // Another caller may have acknowledged it or be reading the stored state
        let request = self.acknowledge(id).unwrap_or(request);
        self.outcome(request)
    }

    /// Convert a terminal request into its plan or the matching error
    ///
    /// # Errors
    ///
    /// Returns `Timeout` or `GenerationFailed` for failed requests and a
    /// validation error for a request that is still processing
    pub fn outcome(&self, request: PlanRequest) -> Result<Value, RecoveryError> {
        let request_id = request.id.to_string();
        match request.status {
            PlanStatus::Completed => Ok(request.result.unwrap_or(Value::Null)),
            PlanStatus::Failed => match request.failure {
                Some(failure) if failure.kind == FailureKind::Timeout => {
                    Err(RecoveryError::Timeout {
                        request_id,
                        elapsed_secs: self.policy.ceiling.as_secs(),
                    })
                }
                Some(failure) => Err(RecoveryError::GenerationFailed {
                    request_id,
                    message: failure.message,
                }),
                None => Err(RecoveryError::GenerationFailed {
                    request_id,
                    message: GENERIC_FAILURE_MESSAGE.to_owned(),
                }),
            },
            PlanStatus::Processing => Err(RecoveryError::validation(
                "request_id",
                format!("plan request {request_id} is still processing"),
            )),
        }
    }

    /// Stop tracking a terminal request and return its final state
    ///
    /// # Errors
    ///
    /// Returns `UnknownRequest` for an untracked id, `PollInFlight` while a poll
    /// is running, and a validation error if the request is still processing
    pub fn acknowledge(&self, id: RequestId) -> Result<PlanRequest, RecoveryError> {
        let tracked = self.tracked(id)?;
        let request = {
            let state = tracked
                .state
                .try_lock()
                .map_err(|_| RecoveryError::PollInFlight(id.to_string()))?;
            if !state.status.is_terminal() {
                return Err(RecoveryError::validation(
                    "request_id",
                    format!("plan request {id} is still processing"),
                ));
            }
            state.clone()
        };

        self.requests.remove(&id);
        debug!(request_id = %id, "Plan request acknowledged");
        Ok(request)
    }

    fn tracked(&self, id: RequestId) -> Result<Arc<TrackedRequest>, RecoveryError> {
        self.requests
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| RecoveryError::UnknownRequest(id.to_string()))
    }

    fn ceiling_elapsed(&self, tracked: &TrackedRequest) -> bool {
        tracked.started.elapsed() >= self.policy.ceiling
    }

    fn expire(&self, state: &mut PlanRequest) {
        let ceiling = self.policy.ceiling.as_secs();
        if state.fail(
            FailureKind::Timeout,
            format!("No plan received within {ceiling}s"),
        ) {
            warn!(
                request_id = %state.id,
                polls = state.polls,
                ceiling_secs = ceiling,
                "Plan request timed out"
            );
        }
    }

    fn apply_remote(state: &mut PlanRequest, remote: RemoteStatus) {
        match remote.status {
            PlanStatus::Processing => {
                debug!(request_id = %state.id, polls = state.polls, "Plan still processing");
            }
            PlanStatus::Completed => {
                if state.complete(remote.result.unwrap_or(Value::Null)) {
                    info!(request_id = %state.id, polls = state.polls, "Plan request completed");
                }
            }
            PlanStatus::Failed => {
                let message = remote
                    .error
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned());
                if state.fail(FailureKind::Collaborator, message) {
                    warn!(request_id = %state.id, polls = state.polls, "Plan request failed");
                }
            }
        }
    }
}
