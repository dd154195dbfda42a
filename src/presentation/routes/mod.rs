// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::llm::gateway::ModelGateway;
use crate::domain::services::discovery_service::DiscoveryService;
use crate::domain::services::outreach_service::OutreachService;
use crate::presentation::handlers::{discover_handler, outreach_handler};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Assemble the application router with its injected services.
pub fn routes<G>(
    discovery: Arc<DiscoveryService<G>>,
    outreach: Arc<OutreachService<G>>,
) -> Router
where
    G: ModelGateway + 'static,
{
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version));

    let api_routes = Router::new()
        .route("/journalists", post(discover_handler::discover::<G>))
        .route("/outreach", post(outreach_handler::outreach::<G>))
        .route(
            "/outreach/batch",
            post(outreach_handler::outreach_batch::<G>),
        )
        .layer(Extension(discovery))
        .layer(Extension(outreach));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Version information endpoint
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
