// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::json;
use tower::util::ServiceExt;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::integration::helpers::{body_json, json_request, model_envelope, test_app};

#[tokio::test]
async fn test_discover_then_draft_journey() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("media researcher"))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_envelope(&json!({
            "journalists": [
                {
                    "name": "Jane Doe",
                    "outlet": "TechCrunch",
                    "beat": "developer tools",
                    "relevanceScore": 92,
                    "articleLink": "https://techcrunch.com/2025/01/devtools"
                },
                {
                    "name": "Sam Lee",
                    "outlet": "Wired",
                    "relevanceScore": 80
                }
            ]
        }))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("Jane Doe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_envelope(&json!({
            "email": "Hi Jane, Acme just launched...",
            "xDirectMessage": "Hey Jane, quick Acme note.",
            "xPublicPost": "Acme ships widgets people love.",
            "linkedInDirectMessage": "Hi Jane, I run comms at Acme.",
            "linkedInPublicPost": "A look at what Acme built."
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(&server.uri(), Some("sk-test"));

    // Step 1: User checks service health
    let health_response = app
        .clone()
        .oneshot(
            axum::http::Request::builder()
                .uri("/health")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(health_response.status(), StatusCode::OK);

    // Step 2: User asks for journalist candidates
    let discover_response = app
        .clone()
        .oneshot(json_request(
            "/journalists",
            json!({
                "website": "https://acme.dev",
                "companyName": "Acme",
                "companyDescription": "Acme builds widgets."
            }),
        ))
        .await
        .unwrap();
    assert_eq!(discover_response.status(), StatusCode::OK);

    let discover_body = body_json(discover_response).await;
    let candidates = discover_body["journalists"].as_array().unwrap();
    assert_eq!(candidates.len(), 2);

    // Step 3: User picks the top candidate and requests outreach copy
    let top_candidate = candidates[0].clone();
    assert_eq!(top_candidate["name"], "Jane Doe");

    let outreach_response = app
        .oneshot(json_request(
            "/outreach",
            json!({
                "journalist": top_candidate,
                "companyName": "Acme",
                "companyDescription": "Acme builds widgets.",
                "website": "https://acme.dev"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(outreach_response.status(), StatusCode::OK);

    // Step 4: The draft covers all five channels
    let outreach_body = body_json(outreach_response).await;
    let outreach = outreach_body["outreach"].as_object().unwrap();
    for channel in [
        "email",
        "xDirectMessage",
        "xPublicPost",
        "linkedInDirectMessage",
        "linkedInPublicPost",
    ] {
        assert!(!outreach[channel].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_one_call_batch_journey() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("media researcher"))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_envelope(&json!({
            "journalists": [
                { "name": "Jane Doe", "outlet": "TechCrunch", "relevanceScore": 92 }
            ]
        }))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_envelope(&json!({
            "email": "Hi Jane",
            "xDirectMessage": "DM",
            "xPublicPost": "Post",
            "linkedInDirectMessage": "LI DM",
            "linkedInPublicPost": "LI post"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(&server.uri(), Some("sk-test"));

    // A single batch call runs discovery and drafting end to end
    let response = app
        .oneshot(json_request(
            "/outreach/batch",
            json!({
                "website": "https://acme.dev",
                "companyName": "Acme",
                "companyDescription": "Acme builds widgets."
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["journalist"]["name"], "Jane Doe");
    assert_eq!(results[0]["journalist"]["relevanceScore"], 92);
    assert_eq!(results[0]["outreach"]["email"], "Hi Jane");
}
