// ABOUTME: HTTP client for the AI meal-plan recommendation backend
// ABOUTME: JSON submit and status calls with status-code aware error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # HTTP Plan Service
//!
//! Speaks the planner backend's JSON protocol:
//!
//! - `POST {base}/api/planner/requests` with `{user_input, user_profile}`,
//!   answered by `{status, request_id}`
//! - `GET {base}/api/planner/requests/{request_id}`, answered by
//!   `{status, result?, error?}`

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error, instrument};
use url::Url;

use super::{PlanService, RemoteStatus, SubmitReceipt};
use crate::config::PlannerConfig;
use crate::constants::planner_http::REQUESTS_PATH;
use crate::constants::service_names::MEAL_PLANNER;
use crate::errors::{AppError, AppResult};
use crate::models::{PlanStatus, PlanSubmission};

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    status: PlanStatus,
    request_id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    detail: Option<Value>,
}

impl ErrorBody {
    fn message(self) -> Option<String> {
        self.error.or(self.detail).map(|value| match value {
            Value::String(message) => message,
            other => other.to_string(),
        })
    }
}

/// [`PlanService`] backed by the recommendation backend's HTTP API
pub struct HttpPlanService {
    client: Client,
    base_url: Url,
}

impl HttpPlanService {
    /// Create a client for the configured backend
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: &PlannerConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Create a client from `RECOVERY_PLANNER_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn from_env() -> AppResult<Self> {
        Self::new(&PlannerConfig::from_env()?)
    }

    /// Backend base URL
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn requests_url(&self) -> AppResult<Url> {
        self.base_url
            .join(REQUESTS_PATH)
            .map_err(|e| AppError::config(format!("Invalid planner requests URL: {e}")))
    }

    fn request_url(&self, remote_id: &str) -> AppResult<Url> {
        let mut url = self.requests_url()?;
        url.path_segments_mut()
            .map_err(|()| AppError::config("Planner base URL cannot carry a path"))?
            .push(remote_id);
        Ok(url)
    }

    /// Send a request and decode a successful JSON body
    async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> AppResult<T> {
        let response = request.send().await.map_err(|e| {
            error!("Failed to send request to planner backend: {}", e);
            AppError::from(e).with_details(json!({ "service": MEAL_PLANNER }))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read planner backend response: {}", e);
            AppError::external_service(MEAL_PLANNER, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse planner backend response: {}", e);
            AppError::external_service(MEAL_PLANNER, format!("Failed to parse response: {e}"))
        })
    }

    /// Map a non-success response to an `AppError`
    #[must_use]
    pub fn parse_error_response(status: StatusCode, body: &str) -> AppError {
        let Some(message) = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::message)
        else {
            return AppError::external_service(
                MEAL_PLANNER,
                format!(
                    "API error ({}): {}",
                    status,
                    body.chars().take(200).collect::<String>()
                ),
            );
        };

        match status.as_u16() {
            404 => AppError::not_found(format!("Planner request ({message})")),
            429 => AppError::external_service(
                MEAL_PLANNER,
                format!("Rate limit exceeded: {message}"),
            ),
            400 | 422 => AppError::invalid_input(format!("Planner validation error: {message}")),
            503 => AppError::external_unavailable(MEAL_PLANNER, message),
            _ => AppError::external_service(MEAL_PLANNER, format!("{status} - {message}")),
        }
    }
}

#[async_trait]
impl PlanService for HttpPlanService {
    fn name(&self) -> &'static str {
        MEAL_PLANNER
    }

    #[instrument(skip(self, submission))]
    async fn submit(&self, submission: &PlanSubmission) -> AppResult<SubmitReceipt> {
        debug!("Submitting plan request to planner backend");

        let request = self.client.post(self.requests_url()?).json(submission);
        let response: SubmitResponse = Self::execute(request).await?;

        debug!(remote_id = %response.request_id, status = ?response.status, "Planner accepted request");
        Ok(SubmitReceipt {
            remote_id: response.request_id,
            status: response.status,
        })
    }

    #[instrument(skip(self))]
    async fn poll(&self, remote_id: &str) -> AppResult<RemoteStatus> {
        let request = self.client.get(self.request_url(remote_id)?);
        let status: RemoteStatus = Self::execute(request).await?;

        debug!(status = ?status.status, "Planner status received");
        Ok(status)
    }
}
