// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::{SearchEngine, SearchError};
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTML shorter than this is a consent wall or captcha page, not results.
const MIN_RESULT_HTML_LEN: usize = 1000;

/// Scraping search engine against the public Google results page.
///
/// Google rotates its markup, so result extraction walks a cascade of
/// selector strategies from the current layout down to generic
/// containers.
pub struct GoogleSearchEngine {
    timeout: Duration,
}

impl Default for GoogleSearchEngine {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

impl GoogleSearchEngine {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn build_search_url(query: &str, limit: u32) -> String {
        let query_params: Vec<(&str, String)> = vec![
            ("q", query.to_string()),
            ("ie", "utf8".to_string()),
            ("oe", "utf8".to_string()),
            ("num", limit.to_string()),
            ("hl", "en".to_string()),
        ];

        let query_string = query_params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("https://www.google.com/search?{}", query_string)
    }

    /// Parse a Google results page, trying selector strategies in order
    /// until one of them yields candidate elements.
    pub fn parse_results(&self, html: &str, limit: u32) -> Result<Vec<SearchResult>, SearchError> {
        let document = Html::parse_document(html);

        // Strategy 1: current layout, jscontroller containing SC7lYd
        let selector_v1 = Selector::parse("div[jscontroller*='SC7lYd']").unwrap();
        // Strategy 2: classic layout (div.g)
        let selector_v2 = Selector::parse("div.g").unwrap();
        // Strategy 3: generic result containers (div[data-hveid])
        let selector_v3 = Selector::parse("div[data-hveid]").unwrap();
        // Strategy 4: any container wrapping a linked heading
        let selector_v4 = Selector::parse("div:has(> a > h3)").unwrap();

        let mut result_elements: Vec<_> = document.select(&selector_v1).collect();
        let mut used_strategy = "v1 (jscontroller*SC7lYd)";

        if result_elements.is_empty() {
            result_elements = document.select(&selector_v2).collect();
            used_strategy = "v2 (div.g)";
        }

        if result_elements.is_empty() {
            result_elements = document.select(&selector_v3).collect();
            used_strategy = "v3 (data-hveid)";
        }

        if result_elements.is_empty() {
            result_elements = document.select(&selector_v4).collect();
            used_strategy = "v4 (has(a > h3))";
        }

        debug!(
            strategy = used_strategy,
            elements = result_elements.len(),
            "Google result extraction"
        );

        let title_selector = Selector::parse("h3").unwrap();
        let link_selector = Selector::parse("a[href]").unwrap();
        let snippet_selector_1 = Selector::parse("[data-sncf], div[data-snc]").unwrap();
        let snippet_selector_2 = Selector::parse("span.st, div.st, p.st").unwrap();
        let snippet_selector_3 =
            Selector::parse("div[class*='snippet'], div[class*='desc']").unwrap();

        let mut results = Vec::new();

        for element in result_elements {
            let title = {
                let mut title_text = String::new();

                // Linked heading first, bare heading as fallback
                if let Some(a) = element.select(&link_selector).next() {
                    if let Some(h3) = a.select(&title_selector).next() {
                        title_text = h3.text().collect::<String>();
                    }
                }
                if title_text.is_empty() {
                    if let Some(h3) = element.select(&title_selector).next() {
                        title_text = h3.text().collect::<String>();
                    }
                }

                title_text.trim().to_string()
            };

            if title.is_empty() {
                continue;
            }

            let raw_url = {
                let mut found_url = String::new();

                // Prefer the anchor wrapping the heading
                for a in element.select(&link_selector) {
                    if a.select(&title_selector).next().is_some() {
                        if let Some(href) = a.value().attr("href") {
                            found_url = href.to_string();
                            break;
                        }
                    }
                }
                if found_url.is_empty() {
                    for a in element.select(&link_selector) {
                        if let Some(href) = a.value().attr("href") {
                            if href.starts_with("http") {
                                found_url = href.to_string();
                                break;
                            }
                        }
                    }
                }

                found_url
            };

            // Unwrap the /url?q= redirect Google puts on result links
            let clean_url = if let Some(stripped) = raw_url.strip_prefix("/url?q=") {
                let target = stripped.split('&').next().unwrap_or(stripped);
                urlencoding::decode(target)
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| target.to_string())
            } else {
                raw_url
            };

            if !clean_url.starts_with("http") {
                continue;
            }

            if results.iter().any(|r: &SearchResult| r.url == clean_url) {
                continue;
            }

            let mut snippet = String::new();
            for selector in [
                &snippet_selector_1,
                &snippet_selector_2,
                &snippet_selector_3,
            ] {
                if let Some(e) = element.select(selector).next() {
                    let text = e.text().collect::<String>();
                    if !text.trim().is_empty() {
                        snippet = text.trim().to_string();
                        break;
                    }
                }
            }

            results.push(SearchResult::new(
                title,
                clean_url,
                if snippet.is_empty() {
                    None
                } else {
                    Some(snippet)
                },
                "google".to_string(),
            ));

            if results.len() >= limit as usize {
                break;
            }
        }

        Ok(results)
    }
}

#[async_trait]
impl SearchEngine for GoogleSearchEngine {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchResult>, SearchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()
            .map_err(|e| SearchError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        let url = Self::build_search_url(query, limit);
        debug!(url = %url, "Google search request");

        let response = client
            .get(&url)
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            )
            .header("Accept-Language", "en-US,en;q=0.9")
            .header("DNT", "1")
            .header("Connection", "keep-alive")
            .header("Upgrade-Insecure-Requests", "1")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout
                } else {
                    SearchError::NetworkError(format!("HTTP request failed: {}", e))
                }
            })?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(SearchError::Blocked);
        }
        if !status.is_success() {
            return Err(SearchError::EngineError(format!(
                "Google search returned status: {}",
                status
            )));
        }

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::NetworkError(format!("Failed to read response body: {}", e)))?;

        if html.len() < MIN_RESULT_HTML_LEN {
            warn!(
                bytes = html.len(),
                "Google returned insufficient content, treating as blocked"
            );
            return Err(SearchError::Blocked);
        }

        self.parse_results(&html, limit)
    }

    fn name(&self) -> &'static str {
        "google"
    }
}
