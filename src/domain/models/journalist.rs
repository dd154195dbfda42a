// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// Supporting source cited by the model for a journalist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceRef {
    #[serde(default)]
    pub title: Option<String>,
    pub url: String,
}

/// A single person-outlet record proposed as an outreach target.
///
/// This is the canonical wire shape; the normalizer maps the model's
/// assorted historical key spellings onto it. `relevance_score` is
/// always an integer in [1, 100] and `article_link` is either a
/// sanitized absolute URL or `None`, never an empty string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Journalist {
    pub name: String,
    pub outlet: String,
    #[serde(default)]
    pub beat: Option<String>,
    #[serde(default)]
    pub article_link: Option<String>,
    pub relevance_score: u8,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub x_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceRef>,
}
