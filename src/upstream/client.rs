//! HTTP client for the prediction/data service.
//!
//! Thin reqwest wrapper over the four endpoints. Response normalization is
//! kept in pure functions for testability; every call degrades to an
//! [`UpstreamError`] rather than panicking, since the whole dashboard is
//! expected to keep functioning with the service unreachable.

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::config::UpstreamConfig;
use super::types::{DataApi, PredictionRequest, PredictionResponse, ResourceEstimate, UpstreamError};
use crate::model::{Bike, HistoricalRecord, Worker};

// =============================================================================
// CLIENT
// =============================================================================

pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Build a client from a parsed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url })
    }

    /// Build a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_env() -> Result<Self, UpstreamError> {
        Self::new(UpstreamConfig::from_env())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, UpstreamError> {
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(UpstreamError::Status { status, body: text });
        }
        serde_json::from_str(&text).map_err(|e| UpstreamError::InvalidResponse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl DataApi for UpstreamClient {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, UpstreamError> {
        let response = self
            .http
            .post(format!("{}/api/predict", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(UpstreamError::Status { status, body: text });
        }
        parse_predict_response(&text)
    }

    async fn historical(&self) -> Result<Vec<HistoricalRecord>, UpstreamError> {
        self.get_json("/api/historical").await
    }

    async fn workers(&self) -> Result<Vec<Worker>, UpstreamError> {
        self.get_json("/api/workers").await
    }

    async fn bikes(&self) -> Result<Vec<Bike>, UpstreamError> {
        self.get_json("/api/bikes").await
    }
}

// =============================================================================
// PARSING
// =============================================================================

#[derive(serde::Deserialize)]
struct RawPredictResponse {
    prediction: Option<serde_json::Value>,
    resources: Option<ResourceEstimate>,
    event_message: Option<String>,
}

/// Normalize a predict response body. The one hard requirement is a numeric
/// `prediction` field; any other shape is rejected as an invalid response.
pub fn parse_predict_response(json: &str) -> Result<PredictionResponse, UpstreamError> {
    let raw: RawPredictResponse =
        serde_json::from_str(json).map_err(|e| UpstreamError::InvalidResponse(e.to_string()))?;

    let prediction = raw
        .prediction
        .as_ref()
        .and_then(serde_json::Value::as_f64)
        .ok_or_else(|| UpstreamError::InvalidResponse("missing numeric `prediction` field".into()))?;

    Ok(PredictionResponse { prediction, resources: raw.resources, event_message: raw.event_message })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
