// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Model API key is not configured")]
    MissingKey,
    #[error("Model call timed out")]
    Timeout,
    #[error("Connection to model provider failed: {0}")]
    Connection(String),
    #[error("Model provider returned {status}: {detail}")]
    Upstream { status: u16, detail: String },
}

impl GatewayError {
    /// Transport failures are worth another attempt; a rejected request
    /// or a missing credential is not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GatewayError::Timeout | GatewayError::Connection(_))
    }

    /// Stable error code surfaced to API callers.
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::MissingKey => "MISSING_KEY",
            GatewayError::Timeout => "TIMEOUT",
            GatewayError::Connection(_) => "CONNECTION_ERROR",
            GatewayError::Upstream { .. } => "UPSTREAM_ERROR",
        }
    }
}

/// One completion request against the model provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
}

/// Raw model output plus how many retries were spent obtaining it.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub text: String,
    pub retries: u32,
}

/// Abstraction over the generative model HTTP endpoint.
///
/// Implementations own timeout enforcement and transport-level retry;
/// callers receive either raw completion text or a typed error.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, GatewayError>;

    /// Name of the backing provider, for logs
    fn provider_name(&self) -> &'static str;
}
