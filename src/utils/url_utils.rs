// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// Clean up a model-produced or user-provided URL.
///
/// Accepts bare hosts ("example.com/story") by assuming https, rejects
/// placeholder strings and anything that is not http(s). Returns the
/// normalized absolute URL on success.
pub fn sanitize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lowered = trimmed.to_lowercase();
    if matches!(lowered.as_str(), "null" | "none" | "n/a" | "na" | "-") {
        return None;
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed = Url::parse(&candidate).ok()?;
    match parsed.scheme() {
        "http" | "https" => Some(parsed.to_string()),
        _ => None,
    }
}

/// Host part of a URL, without a leading "www." prefix.
pub fn host_of(raw: &str) -> Option<String> {
    let sanitized = sanitize_url(raw)?;
    let parsed = Url::parse(&sanitized).ok()?;
    let host = parsed.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}
