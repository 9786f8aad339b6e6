// ABOUTME: Plan-request command: submit to the planner backend and poll to a terminal state
// ABOUTME: Prints the final request and fails with the matching error on timeout or failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use std::sync::Arc;

use macro_recovery::config::PlannerConfig;
use macro_recovery::errors::AppResult;
use macro_recovery::planner::{HttpPlanService, PlanRequestOrchestrator};
use serde_json::Value;
use tracing::info;

use crate::helpers::json::{print_json, read_json};

/// Submit a request and wait for the generated plan
pub async fn run(input: &Path, profile: &Path, base_url: Option<&str>) -> AppResult<()> {
    let mut config = PlannerConfig::from_env()?;
    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url)?;
    }

    let user_input: Value = read_json(input)?;
    let user_profile: Value = read_json(profile)?;

    let service = Arc::new(HttpPlanService::new(&config)?);
    let orchestrator = PlanRequestOrchestrator::new(service, config.polling);

    let id = orchestrator.submit(user_input, user_profile).await?;
    info!(request_id = %id, base_url = %config.base_url, "Waiting for meal plan");

    orchestrator.poll_until_terminal(id).await?;
    let request = orchestrator.acknowledge(id)?;
    print_json(&request)?;

    orchestrator.outcome(request)?;
    Ok(())
}
