// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::{
    application::dto::discover_request::{DiscoverRequestDto, DiscoverResponseDto},
    domain::llm::gateway::ModelGateway,
    domain::models::company::CompanyProfile,
    domain::services::discovery_service::DiscoveryService,
    presentation::errors::ApiError,
};

/// `POST /journalists`
///
/// Resolves the company profile from whatever the caller provided and
/// runs one discovery pass. A discovery failure fails the whole call
/// with a typed code; an empty candidate list is still a 200.
pub async fn discover<G>(
    Extension(service): Extension<Arc<DiscoveryService<G>>>,
    Json(payload): Json<DiscoverRequestDto>,
) -> impl IntoResponse
where
    G: ModelGateway + 'static,
{
    let company = CompanyProfile::resolve(
        payload.website.as_deref(),
        payload.company_name.as_deref(),
        payload.company_description.as_deref(),
    );

    match service.discover(&company).await {
        Ok(journalists) => {
            (StatusCode::OK, Json(DiscoverResponseDto { journalists })).into_response()
        }
        Err(error) => ApiError::from(error).into_response(),
    }
}
