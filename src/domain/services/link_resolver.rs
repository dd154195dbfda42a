// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use crate::domain::models::journalist::Journalist;
use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::SearchEngine;
use crate::utils::url_utils::{host_of, sanitize_url};

/// Host fragments that mark a link as search-engine-internal or
/// ad-tracking rather than a real article.
const EXCLUDED_HOST_FRAGMENTS: &[&str] = &[
    "google.",
    "googleadservices",
    "googleusercontent",
    "doubleclick",
    "gstatic",
    "bing.",
    "duckduckgo",
    "webcache",
];

/// Best-effort article link discovery for journalists the model left
/// without one.
///
/// Every failure path resolves to `None`; a missing link must never
/// abort the batch that asked for it.
pub struct LinkResolver {
    engine: Arc<dyn SearchEngine>,
    result_limit: u32,
}

impl LinkResolver {
    pub fn new(engine: Arc<dyn SearchEngine>, result_limit: u32) -> Self {
        Self {
            engine,
            result_limit,
        }
    }

    pub async fn resolve_article_link(&self, journalist: &Journalist) -> Option<String> {
        let query = build_query(&journalist.name, &journalist.outlet);

        let results = match self.engine.search(&query, self.result_limit).await {
            Ok(results) => results,
            Err(error) => {
                tracing::debug!(
                    "Link resolution search failed for {}: {}",
                    journalist.name,
                    error
                );
                return None;
            }
        };

        let candidates: Vec<&SearchResult> = results
            .iter()
            .filter(|result| is_candidate_link(&result.url))
            .collect();

        candidates
            .iter()
            .find(|result| title_mentions(&journalist.name, &result.title))
            .or_else(|| candidates.first())
            .and_then(|result| sanitize_url(&result.url))
    }
}

fn build_query(name: &str, outlet: &str) -> String {
    let outlet = outlet.trim();
    if outlet.is_empty() {
        format!("\"{}\"", name.trim())
    } else {
        format!("\"{}\" {}", name.trim(), outlet)
    }
}

fn is_candidate_link(url: &str) -> bool {
    let Some(host) = host_of(url) else {
        return false;
    };
    !EXCLUDED_HOST_FRAGMENTS
        .iter()
        .any(|fragment| host.contains(fragment))
}

/// Loose check that a result title mentions the journalist, tolerating
/// small spelling drift in scraped titles.
fn title_mentions(name: &str, title: &str) -> bool {
    let name = name.trim().to_lowercase();
    let title = title.to_lowercase();
    if name.is_empty() {
        return false;
    }
    if title.contains(&name) {
        return true;
    }

    let name_words = name.split_whitespace().count();
    let title_words: Vec<&str> = title.split_whitespace().collect();
    if name_words == 0 || title_words.len() < name_words {
        return false;
    }
    title_words
        .windows(name_words)
        .any(|window| strsim::jaro_winkler(&window.join(" "), &name) >= 0.92)
}
