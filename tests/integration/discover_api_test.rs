// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::json;
use tower::util::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::integration::helpers::{body_json, json_request, model_envelope, test_app};

#[tokio::test]
async fn journalists_endpoint_returns_normalized_candidates() {
    let server = MockServer::start().await;
    let payload = json!({
        "journalists": [
            {
                "name": "Jane Doe",
                "outlet": "TechCrunch",
                "beat": "developer tools",
                "relevanceScore": 92,
                "articleLink": "https://techcrunch.com/2025/01/devtools",
                "email": "jane@techcrunch.com"
            },
            {
                "journalist": "Sam Lee",
                "parentMediaOrganization": "Wired",
                "relevance score": 150,
                "coverageLink": "null"
            },
            {
                "full_name": "Ana Ruiz",
                "publication": "The Verge",
                "relevanceScore": "not a number",
                "twitter": "@anaruiz"
            }
        ]
    });
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_envelope(&payload)))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(&server.uri(), Some("sk-test"));
    let response = app
        .oneshot(json_request(
            "/journalists",
            json!({
                "website": "acme.dev",
                "companyName": "Acme",
                "companyDescription": "Acme builds widgets."
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let journalists = body["journalists"].as_array().unwrap();
    assert_eq!(journalists.len(), 3);

    for journalist in journalists {
        let score = journalist["relevanceScore"].as_u64().unwrap();
        assert!((1..=100).contains(&score));
        assert_ne!(journalist["articleLink"], json!("null"));
    }

    assert_eq!(journalists[0]["name"], "Jane Doe");
    assert_eq!(journalists[0]["relevanceScore"], 92);
    assert_eq!(journalists[1]["name"], "Sam Lee");
    assert_eq!(journalists[1]["outlet"], "Wired");
    assert_eq!(journalists[1]["relevanceScore"], 100);
    assert_eq!(journalists[1]["articleLink"], json!(null));
    assert_eq!(journalists[2]["relevanceScore"], 1);
    assert_eq!(journalists[2]["xHandle"], "@anaruiz");
}

#[tokio::test]
async fn journalists_endpoint_with_empty_result_is_still_ok() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(model_envelope(&json!({ "journalists": [] }))),
        )
        .mount(&server)
        .await;

    let app = test_app(&server.uri(), Some("sk-test"));
    let response = app
        .oneshot(json_request("/journalists", json!({ "website": "acme.dev" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["journalists"], json!([]));
}

#[tokio::test]
async fn journalists_endpoint_without_key_returns_missing_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let app = test_app(&server.uri(), None);
    let response = app
        .oneshot(json_request("/journalists", json!({ "website": "acme.dev" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["code"], "MISSING_KEY");
}

#[tokio::test]
async fn journalists_endpoint_with_unparseable_payload_returns_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "sorry, no list today" } }
            ]
        })))
        .mount(&server)
        .await;

    let app = test_app(&server.uri(), Some("sk-test"));
    let response = app
        .oneshot(json_request("/journalists", json!({ "website": "acme.dev" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = body_json(response).await;
    assert_eq!(body["code"], "PARSE_ERROR");
}

#[tokio::test]
async fn journalists_endpoint_maps_connection_failure() {
    // Nothing listens on port 9 on loopback
    let app = test_app("http://127.0.0.1:9", Some("sk-test"));
    let response = app
        .oneshot(json_request("/journalists", json!({ "website": "acme.dev" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = body_json(response).await;
    assert_eq!(body["code"], "CONNECTION_ERROR");
}

#[tokio::test]
async fn journalists_endpoint_surfaces_upstream_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(&server.uri(), Some("sk-bad"));
    let response = app
        .oneshot(json_request("/journalists", json!({ "website": "acme.dev" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = body_json(response).await;
    assert_eq!(body["code"], "UPSTREAM_ERROR");
    assert!(body["detail"].as_str().unwrap().contains("invalid api key"));
}
