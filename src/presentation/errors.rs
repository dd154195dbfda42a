// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::llm::gateway::GatewayError;
use crate::domain::services::discovery_service::DiscoveryError;
use crate::domain::services::normalizer::NormalizeError;
use crate::domain::services::outreach_service::OutreachError;

/// API-facing error: an HTTP status, a stable machine-readable code,
/// and a human-readable message, so callers can render different retry
/// affordances per failure class.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub detail: Option<String>,
}

impl ApiError {
    pub fn missing_fields() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "MISSING_FIELDS",
            message: "Missing required fields".to_string(),
            detail: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "error": self.message,
            "code": self.code,
        });
        if let Some(detail) = self.detail {
            body["detail"] = json!(detail);
        }

        (self.status, Json(body)).into_response()
    }
}

impl From<GatewayError> for ApiError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::MissingKey => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: "MISSING_KEY",
                message: "Server is not configured with a model API key".to_string(),
                detail: None,
            },
            GatewayError::Timeout => Self {
                status: StatusCode::GATEWAY_TIMEOUT,
                code: "TIMEOUT",
                message: "Model request timed out".to_string(),
                detail: None,
            },
            GatewayError::Connection(detail) => Self {
                status: StatusCode::BAD_GATEWAY,
                code: "CONNECTION_ERROR",
                message: "Could not reach the model provider".to_string(),
                detail: Some(detail),
            },
            GatewayError::Upstream { status, detail } => Self {
                status: StatusCode::BAD_GATEWAY,
                code: "UPSTREAM_ERROR",
                message: "Model provider rejected the request".to_string(),
                detail: Some(format!("{}: {}", status, detail)),
            },
        }
    }
}

impl From<NormalizeError> for ApiError {
    fn from(error: NormalizeError) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            code: error.code(),
            message: "Failed to parse model JSON".to_string(),
            detail: Some(error.to_string()),
        }
    }
}

impl From<DiscoveryError> for ApiError {
    fn from(error: DiscoveryError) -> Self {
        match error {
            DiscoveryError::Gateway(e) => e.into(),
            DiscoveryError::Normalize(e) => e.into(),
        }
    }
}

impl From<OutreachError> for ApiError {
    fn from(error: OutreachError) -> Self {
        match error {
            OutreachError::Gateway(e) => e.into(),
            OutreachError::Normalize(e) => e.into(),
        }
    }
}
