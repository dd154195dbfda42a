// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::batch::OutreachBatchItem;
use crate::domain::models::outreach::OutreachDraft;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Body of `POST /outreach`. All fields are required; the journalist is
/// accepted as raw JSON so callers can round-trip a discovery result
/// in any of its historical spellings.
#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OutreachRequestDto {
    #[validate(required)]
    pub journalist: Option<Value>,
    #[validate(required, length(min = 1))]
    pub company_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub company_description: Option<String>,
    #[validate(required, length(min = 1))]
    pub website: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OutreachResponseDto {
    pub outreach: OutreachDraft,
}

/// Body of `POST /outreach/batch`. When `journalists` is omitted, the
/// pipeline runs discovery first and drafts for whatever it finds.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutreachBatchRequestDto {
    pub journalists: Option<Vec<Value>>,
    pub website: Option<String>,
    pub company_name: Option<String>,
    pub company_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OutreachBatchResponseDto {
    pub results: Vec<OutreachBatchItem>,
}
