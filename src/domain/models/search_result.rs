// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: Option<String>,
    pub engine: String,
}

impl SearchResult {
    pub fn new(title: String, url: String, snippet: Option<String>, engine: String) -> Self {
        Self {
            title,
            url,
            snippet,
            engine,
        }
    }
}
