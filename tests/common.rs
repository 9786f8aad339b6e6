// ABOUTME: Shared test utilities and collaborator doubles for integration tests
// ABOUTME: Quiet logging setup, scripted plan service, and fixed snapshot and meal-log providers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `macro_recovery`

use std::env;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration;

use async_trait::async_trait;
use macro_recovery::assessment::{MacroSnapshotProvider, MealLogProvider};
use macro_recovery::errors::{AppError, AppResult};
use macro_recovery::models::{MacroSnapshot, MacroTotals, MealType, PlanStatus, PlanSubmission};
use macro_recovery::planner::{PlanService, RemoteStatus, SubmitReceipt};
use tokio::time::sleep;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Snapshot from calorie totals only
pub fn calorie_snapshot(consumed: f64, target: f64) -> MacroSnapshot {
    MacroSnapshot::new(
        MacroTotals::calories_only(consumed),
        MacroTotals::calories_only(target),
    )
    .unwrap()
}

/// How the scripted service answers `submit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    /// Accept with a processing receipt
    Accept,
    /// Accept the call but report the request as failed
    Reject,
    /// Fail at the transport level
    Unreachable,
}

type PollScript = Box<dyn Fn(u32) -> AppResult<RemoteStatus> + Send + Sync>;

/// `PlanService` double answering polls from a script keyed by call number
pub struct ScriptedPlanService {
    submit_mode: SubmitMode,
    script: PollScript,
    poll_delay: Duration,
    submit_calls: AtomicU32,
    poll_calls: AtomicU32,
}

impl ScriptedPlanService {
    /// Accepts submissions; `script` receives the 1-based poll number
    pub fn new(script: impl Fn(u32) -> AppResult<RemoteStatus> + Send + Sync + 'static) -> Self {
        Self {
            submit_mode: SubmitMode::Accept,
            script: Box::new(script),
            poll_delay: Duration::ZERO,
            submit_calls: AtomicU32::new(0),
            poll_calls: AtomicU32::new(0),
        }
    }

    /// Never leaves processing
    pub fn always_processing() -> Self {
        Self::new(|_| Ok(RemoteStatus::processing()))
    }

    /// Completes with `result` on poll number `on_poll`
    pub fn completes_on(on_poll: u32, result: serde_json::Value) -> Self {
        Self::new(move |n| {
            if n >= on_poll {
                Ok(RemoteStatus::completed(result.clone()))
            } else {
                Ok(RemoteStatus::processing())
            }
        })
    }

    pub fn with_submit_mode(mut self, mode: SubmitMode) -> Self {
        self.submit_mode = mode;
        self
    }

    /// Make every poll take this long (virtual time under a paused clock)
    pub fn with_poll_delay(mut self, delay: Duration) -> Self {
        self.poll_delay = delay;
        self
    }

    pub fn submit_calls(&self) -> u32 {
        self.submit_calls.load(Ordering::SeqCst)
    }

    pub fn poll_calls(&self) -> u32 {
        self.poll_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlanService for ScriptedPlanService {
    fn name(&self) -> &'static str {
        "scripted-planner"
    }

    async fn submit(&self, _submission: &PlanSubmission) -> AppResult<SubmitReceipt> {
        let n = self.submit_calls.fetch_add(1, Ordering::SeqCst) + 1;
        match self.submit_mode {
            SubmitMode::Accept => Ok(SubmitReceipt {
                remote_id: format!("remote-{n}"),
                status: PlanStatus::Processing,
            }),
            SubmitMode::Reject => Ok(SubmitReceipt {
                remote_id: format!("remote-{n}"),
                status: PlanStatus::Failed,
            }),
            SubmitMode::Unreachable => Err(AppError::external_unavailable(
                "scripted-planner",
                "connection refused",
            )),
        }
    }

    async fn poll(&self, _remote_id: &str) -> AppResult<RemoteStatus> {
        let n = self.poll_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if !self.poll_delay.is_zero() {
            sleep(self.poll_delay).await;
        }
        (self.script)(n)
    }
}

/// Snapshot provider returning the same snapshot for every user
pub struct FixedSnapshots(pub MacroSnapshot);

#[async_trait]
impl MacroSnapshotProvider for FixedSnapshots {
    async fn today_snapshot(&self, _user_id: &str) -> AppResult<MacroSnapshot> {
        Ok(self.0)
    }
}

/// Snapshot provider that always fails
pub struct FailingSnapshots;

#[async_trait]
impl MacroSnapshotProvider for FailingSnapshots {
    async fn today_snapshot(&self, user_id: &str) -> AppResult<MacroSnapshot> {
        Err(AppError::not_found(format!("Snapshot for {user_id}")))
    }
}

/// Meal-log provider returning a fixed list and counting calls
pub struct FixedMealLog {
    logged: Vec<MealType>,
    calls: AtomicU32,
}

impl FixedMealLog {
    pub fn new(logged: Vec<MealType>) -> Arc<Self> {
        Arc::new(Self {
            logged,
            calls: AtomicU32::new(0),
        })
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MealLogProvider for FixedMealLog {
    async fn logged_meal_types(&self, _user_id: &str) -> AppResult<Vec<MealType>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.logged.clone())
    }
}
