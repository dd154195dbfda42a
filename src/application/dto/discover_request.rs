// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::journalist::Journalist;
use serde::{Deserialize, Serialize};

/// Body of `POST /journalists`. Everything is optional; missing company
/// fields are inferred from the website or fall back to defaults.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverRequestDto {
    pub website: Option<String>,
    pub company_name: Option<String>,
    pub company_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DiscoverResponseDto {
    pub journalists: Vec<Journalist>,
}
