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
use validator::Validate;

use crate::{
    application::dto::outreach_request::{
        OutreachBatchRequestDto, OutreachBatchResponseDto, OutreachRequestDto, OutreachResponseDto,
    },
    domain::llm::gateway::ModelGateway,
    domain::models::company::CompanyProfile,
    domain::services::discovery_service::DiscoveryService,
    domain::services::normalizer::normalize_journalist,
    domain::services::outreach_service::OutreachService,
    presentation::errors::ApiError,
};

/// `POST /outreach`
///
/// Drafts the five-channel outreach copy for a single journalist. All
/// body fields are required; the journalist JSON must at least carry a
/// usable name.
pub async fn outreach<G>(
    Extension(service): Extension<Arc<OutreachService<G>>>,
    Json(payload): Json<OutreachRequestDto>,
) -> impl IntoResponse
where
    G: ModelGateway + 'static,
{
    if payload.validate().is_err() {
        return ApiError::missing_fields().into_response();
    }

    let journalist = payload.journalist.as_ref().and_then(normalize_journalist);
    let Some(journalist) = journalist else {
        return ApiError::missing_fields().into_response();
    };

    let company = CompanyProfile::resolve(
        payload.website.as_deref(),
        payload.company_name.as_deref(),
        payload.company_description.as_deref(),
    );

    match service.draft_one(&journalist, &company).await {
        Ok(outreach) => (StatusCode::OK, Json(OutreachResponseDto { outreach })).into_response(),
        Err(error) => ApiError::from(error).into_response(),
    }
}

/// `POST /outreach/batch`
///
/// Runs the full pipeline: discovery when the caller did not supply
/// journalists, then per-journalist drafting with failures isolated to
/// their own result slot. Only a discovery failure fails the call.
pub async fn outreach_batch<G>(
    Extension(discovery): Extension<Arc<DiscoveryService<G>>>,
    Extension(service): Extension<Arc<OutreachService<G>>>,
    Json(payload): Json<OutreachBatchRequestDto>,
) -> impl IntoResponse
where
    G: ModelGateway + 'static,
{
    let company = CompanyProfile::resolve(
        payload.website.as_deref(),
        payload.company_name.as_deref(),
        payload.company_description.as_deref(),
    );

    let journalists = match &payload.journalists {
        Some(values) => values.iter().filter_map(normalize_journalist).collect(),
        None => match discovery.discover(&company).await {
            Ok(journalists) => journalists,
            Err(error) => return ApiError::from(error).into_response(),
        },
    };

    let results = service.draft_batch(journalists, &company).await;
    (StatusCode::OK, Json(OutreachBatchResponseDto { results })).into_response()
}
