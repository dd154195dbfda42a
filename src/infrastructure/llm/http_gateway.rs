// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{counter, histogram};
use serde_json::Value;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::domain::llm::gateway::{Completion, CompletionRequest, GatewayError, ModelGateway};
use crate::infrastructure::llm::provider::{self, ProviderKind};
use crate::utils::retry_policy::RetryPolicy;
use async_trait::async_trait;

/// Longest upstream error body carried into a `GatewayError::Upstream`.
const DETAIL_LIMIT: usize = 300;

/// Model gateway backed by a provider HTTP API.
///
/// Owns the request shaping for the configured provider, the call
/// timeout, and transport-level retry. Callers only ever see a typed
/// `GatewayError`; a missing credential fails before any request is
/// sent.
pub struct HttpModelGateway {
    client: reqwest::Client,
    provider: ProviderKind,
    api_key: Option<String>,
    model: String,
    base_url: String,
    retry_policy: RetryPolicy,
}

impl HttpModelGateway {
    pub fn new(
        provider: ProviderKind,
        api_key: Option<String>,
        model: String,
        base_url: Option<String>,
        timeout: Duration,
        retry_policy: RetryPolicy,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let base_url = base_url.unwrap_or_else(|| provider.default_base_url().to_string());

        Ok(Self {
            client,
            provider,
            api_key,
            model,
            base_url,
            retry_policy,
        })
    }

    /// One request/response cycle against the provider, no retry.
    async fn execute(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<String, GatewayError> {
        let shaped =
            provider::build_request(self.provider, &self.base_url, api_key, &self.model, request);

        let mut builder = self.client.post(&shaped.url).json(&shaped.body);
        if let Some(token) = &shaped.bearer_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else {
                GatewayError::Connection(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                detail: truncate_detail(&detail),
            });
        }

        let body: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else if e.is_decode() {
                GatewayError::Upstream {
                    status: status.as_u16(),
                    detail: format!("invalid JSON body: {}", e),
                }
            } else {
                GatewayError::Connection(e.to_string())
            }
        })?;

        provider::extract_text(self.provider, &body).ok_or_else(|| GatewayError::Upstream {
            status: status.as_u16(),
            detail: "unexpected response shape".to_string(),
        })
    }
}

#[async_trait]
impl ModelGateway for HttpModelGateway {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GatewayError::MissingKey)?
            .to_string();

        let started = Instant::now();
        let mut attempt: u32 = 0;

        let result = loop {
            match self.execute(&api_key, &request).await {
                Ok(text) => {
                    debug!(
                        provider = self.provider.as_str(),
                        retries = attempt,
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "Model call succeeded"
                    );
                    break Ok(Completion {
                        text,
                        retries: attempt,
                    });
                }
                Err(error) => {
                    let next_attempt = attempt + 1;
                    if error.is_retryable() && self.retry_policy.should_retry(next_attempt) {
                        let backoff = self.retry_policy.calculate_backoff(next_attempt);
                        warn!(
                            provider = self.provider.as_str(),
                            retry = next_attempt,
                            backoff_ms = backoff.as_millis() as u64,
                            "Model call failed ({}), retrying",
                            error
                        );
                        counter!("model_call_retries_total", "provider" => self.provider.as_str())
                            .increment(1);
                        sleep(backoff).await;
                        attempt = next_attempt;
                    } else {
                        break Err(error);
                    }
                }
            }
        };

        let outcome = if result.is_ok() { "success" } else { "error" };
        counter!(
            "model_calls_total",
            "provider" => self.provider.as_str(),
            "outcome" => outcome
        )
        .increment(1);
        histogram!("model_call_duration_seconds").record(started.elapsed().as_secs_f64());

        result
    }

    fn provider_name(&self) -> &'static str {
        self.provider.as_str()
    }
}

fn truncate_detail(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() <= DETAIL_LIMIT {
        return trimmed.to_string();
    }
    let mut end = DETAIL_LIMIT;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    trimmed[..end].to_string()
}

#[cfg(test)]
#[path = "http_gateway_test.rs"]
mod tests;
