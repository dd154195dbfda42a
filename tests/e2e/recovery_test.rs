// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::json;
use std::time::Duration;
use tower::util::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::integration::helpers::{body_json, json_request, model_envelope, retrying_app};

/// The app's call timeout is 500ms, so a 2s delay forces a timeout on
/// the caller's side while the mock still counts the hit.
fn delayed(template: ResponseTemplate) -> ResponseTemplate {
    template.set_delay(Duration::from_secs(2))
}

#[tokio::test]
async fn test_request_recovers_from_transient_timeouts() {
    let server = MockServer::start().await;

    // First two attempts stall past the call timeout, the third lands
    // on the fall-through success mock.
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(delayed(ResponseTemplate::new(200)))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_envelope(&json!({
            "journalists": [
                { "name": "Jane Doe", "outlet": "TechCrunch", "relevanceScore": 88 }
            ]
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let app = retrying_app(&server.uri());
    let response = app
        .oneshot(json_request(
            "/journalists",
            json!({
                "website": "https://acme.dev",
                "companyName": "Acme"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["journalists"][0]["name"], "Jane Doe");
}

#[tokio::test]
async fn test_provider_outage_surfaces_timeout_after_retries() {
    let server = MockServer::start().await;

    // Every attempt stalls: the initial call plus two retries.
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(delayed(ResponseTemplate::new(200)))
        .expect(3)
        .mount(&server)
        .await;

    let app = retrying_app(&server.uri());
    let response = app
        .oneshot(json_request(
            "/journalists",
            json!({
                "website": "https://acme.dev",
                "companyName": "Acme"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);

    let body = body_json(response).await;
    assert_eq!(body["code"], "TIMEOUT");
    assert_eq!(body["error"], "Model request timed out");
}
