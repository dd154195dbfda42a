// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use pressclub::domain::services::discovery_service::DiscoveryService;
use pressclub::domain::services::link_resolver::LinkResolver;
use pressclub::domain::services::outreach_service::OutreachService;
use pressclub::infrastructure::llm::http_gateway::HttpModelGateway;
use pressclub::infrastructure::llm::provider::ProviderKind;
use pressclub::presentation::routes;
use pressclub::utils::retry_policy::RetryPolicy;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

/// App wired against an OpenAI-shaped model endpoint, no retries.
pub fn test_app(model_base_url: &str, api_key: Option<&str>) -> Router {
    build_app(model_base_url, api_key, RetryPolicy::none(), None)
}

/// App with two fast retries and a short call timeout, for transport
/// failure scenarios.
pub fn retrying_app(model_base_url: &str) -> Router {
    let policy = RetryPolicy {
        max_retries: 2,
        initial_backoff: Duration::from_millis(10),
        max_backoff: Duration::from_millis(50),
        backoff_multiplier: 2.0,
        jitter_factor: 0.0,
        exponential_backoff: true,
        enable_jitter: false,
    };
    build_app(model_base_url, Some("sk-test"), policy, None)
}

pub fn build_app(
    model_base_url: &str,
    api_key: Option<&str>,
    retry_policy: RetryPolicy,
    link_resolver: Option<Arc<LinkResolver>>,
) -> Router {
    let gateway = Arc::new(
        HttpModelGateway::new(
            ProviderKind::OpenAi,
            api_key.map(str::to_string),
            "gpt-4o-mini".to_string(),
            Some(model_base_url.to_string()),
            Duration::from_millis(500),
            retry_policy,
        )
        .unwrap(),
    );

    let discovery = Arc::new(DiscoveryService::new(
        gateway.clone(),
        link_resolver.clone(),
        10,
        Duration::from_millis(0),
    ));
    let outreach = Arc::new(OutreachService::new(
        gateway,
        link_resolver,
        4,
        Duration::from_millis(0),
    ));

    routes::routes(discovery, outreach)
}

/// Wrap completion text in the provider's response envelope.
pub fn model_envelope(payload: &Value) -> Value {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": payload.to_string() } }
        ]
    })
}

pub fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
