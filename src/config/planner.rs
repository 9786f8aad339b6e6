// ABOUTME: Meal-plan collaborator configuration loaded from environment variables
// ABOUTME: Base URL, polling interval and ceiling, and HTTP timeout with validated parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::time::Duration;
use url::Url;

use crate::constants::planner_http::{DEFAULT_BASE_URL, HTTP_TIMEOUT_SECS};
use crate::constants::polling::{POLL_CEILING_SECS, POLL_INTERVAL_SECS};
use crate::errors::{AppError, AppResult};
use crate::planner::PollingPolicy;

/// Settings for talking to the AI meal-plan collaborator
///
/// | Variable | Default |
/// |---|---|
/// | `RECOVERY_PLANNER_BASE_URL` | `http://localhost:8000/` |
/// | `RECOVERY_PLANNER_POLL_INTERVAL_SECS` | 10 |
/// | `RECOVERY_PLANNER_POLL_CEILING_SECS` | 1500 |
/// | `RECOVERY_PLANNER_HTTP_TIMEOUT_SECS` | 30 |
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Base URL of the recommendation backend, always ending in `/`
    pub base_url: Url,
    /// Poll interval and ceiling
    pub polling: PollingPolicy,
    /// Timeout for a single HTTP call
    pub http_timeout: Duration,
}

impl PlannerConfig {
    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value, the base
    /// URL is invalid, or the interval is zero or longer than the ceiling
    pub fn from_env() -> AppResult<Self> {
        let base_url = parse_base_url(&env_var_or("RECOVERY_PLANNER_BASE_URL", DEFAULT_BASE_URL))?;
        let interval_secs = parse_secs("RECOVERY_PLANNER_POLL_INTERVAL_SECS", POLL_INTERVAL_SECS)?;
        let ceiling_secs = parse_secs("RECOVERY_PLANNER_POLL_CEILING_SECS", POLL_CEILING_SECS)?;
        let timeout_secs = parse_secs("RECOVERY_PLANNER_HTTP_TIMEOUT_SECS", HTTP_TIMEOUT_SECS)?;

        if interval_secs == 0 {
            return Err(AppError::config(
                "RECOVERY_PLANNER_POLL_INTERVAL_SECS must be > 0",
            ));
        }
        if ceiling_secs < interval_secs {
            return Err(AppError::config(
                "RECOVERY_PLANNER_POLL_CEILING_SECS must be >= the poll interval",
            ));
        }

        Ok(Self {
            base_url,
            polling: PollingPolicy {
                interval: Duration::from_secs(interval_secs),
                ceiling: Duration::from_secs(ceiling_secs),
            },
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Same settings pointed at another backend
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid http(s) URL
    pub fn with_base_url(mut self, base_url: &str) -> AppResult<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }
}

/// Parse a base URL and make sure relative joins append to its path
fn parse_base_url(raw: &str) -> AppResult<Url> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| AppError::config(format!("Invalid planner base URL '{raw}': {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config(format!(
            "Planner base URL must use http or https, got '{}'",
            url.scheme()
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn parse_secs(key: &str, default: u64) -> AppResult<u64> {
    env_var_or(key, &default.to_string())
        .trim()
        .parse()
        .map_err(|e| AppError::config(format!("Invalid {key} value: {e}")))
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
