// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::models::journalist::{Journalist, SourceRef};
use crate::domain::models::outreach::OutreachDraft;
use crate::utils::url_utils::sanitize_url;

/// Relevance scores are whole numbers in [1, 100]; anything the model
/// sends outside that range (or not a number at all) lands on the floor.
pub const RELEVANCE_FLOOR: u8 = 1;
pub const RELEVANCE_CEIL: u8 = 100;

/// Accepted source keys per canonical journalist field, in priority
/// order. Models trained against older revisions of the flow still emit
/// the historical spellings.
const JOURNALIST_LIST_KEYS: &[&str] = &["journalists", "results", "candidates"];
const NAME_KEYS: &[&str] = &["name", "journalist", "journalistName", "full_name"];
const OUTLET_KEYS: &[&str] = &[
    "outlet",
    "media",
    "parentMediaOrganization",
    "publication",
    "organization",
];
const BEAT_KEYS: &[&str] = &["beat", "coverageSummary", "coverage_summary", "topics"];
const ARTICLE_LINK_KEYS: &[&str] = &[
    "articleLink",
    "coverageLink",
    "article_url",
    "articleUrl",
    "link",
];
const RELEVANCE_KEYS: &[&str] = &[
    "relevanceScore",
    "relevance_score",
    "relevance score",
    "relevance",
    "score",
];
const EMAIL_KEYS: &[&str] = &["email", "emailAddress", "email_address"];
const LINKEDIN_KEYS: &[&str] = &["linkedin", "linkedIn", "linkedin_url", "linkedinProfile"];
const X_HANDLE_KEYS: &[&str] = &["xHandle", "twitter", "x_handle", "twitterHandle", "x"];
const SOURCES_KEYS: &[&str] = &["sources"];
const SOURCE_TITLE_KEYS: &[&str] = &["title", "description", "name"];
const SOURCE_URL_KEYS: &[&str] = &["url", "link"];

/// Accepted source keys per outreach channel, with the placeholder used
/// when the model skipped the channel entirely.
const EMAIL_CHANNEL_KEYS: &[&str] = &["email", "emailBody", "email_message", "coldEmail"];
const X_DM_KEYS: &[&str] = &[
    "xDirectMessage",
    "x_direct_message",
    "x_dm",
    "twitterDirectMessage",
    "twitterDm",
];
const X_POST_KEYS: &[&str] = &[
    "xPublicPost",
    "x_public_post",
    "x_post",
    "twitterPost",
    "tweet",
];
const LINKEDIN_DM_KEYS: &[&str] = &[
    "linkedInDirectMessage",
    "linkedin_direct_message",
    "linkedinDm",
    "linkedInDm",
];
const LINKEDIN_POST_KEYS: &[&str] = &[
    "linkedInPublicPost",
    "linkedin_public_post",
    "linkedinPost",
    "linkedInPost",
];

const EMAIL_PLACEHOLDER: &str = "Draft unavailable. Please regenerate the email outreach.";
const X_DM_PLACEHOLDER: &str = "Draft unavailable. Please regenerate the X direct message.";
const X_POST_PLACEHOLDER: &str = "Draft unavailable. Please regenerate the X public post.";
const LINKEDIN_DM_PLACEHOLDER: &str =
    "Draft unavailable. Please regenerate the LinkedIn direct message.";
const LINKEDIN_POST_PLACEHOLDER: &str =
    "Draft unavailable. Please regenerate the LinkedIn public post.";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NormalizeError {
    #[error("Unparseable model output: {0}")]
    Unparseable(String),
}

impl NormalizeError {
    pub fn code(&self) -> &'static str {
        "PARSE_ERROR"
    }
}

/// Parse raw model text into JSON, tolerating markdown fences and
/// surrounding prose.
///
/// Attempts, in order: direct parse of the fence-stripped text, then a
/// parse of the first-`{`-to-last-`}` slice. A failure here means the
/// content itself is bad, so callers must not route it through the
/// transport retry path.
pub fn parse_model_json(raw: &str) -> Result<Value, NormalizeError> {
    let text = strip_code_fence(raw.trim());

    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            if let Ok(value) = serde_json::from_str::<Value>(&text[start..=end]) {
                return Ok(value);
            }
        }
    }

    Err(NormalizeError::Unparseable(snippet(raw)))
}

/// Strip a wrapping markdown code fence, language tag included.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the fence line ("```json", "```", ...) and the closing fence
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim().trim_end_matches("```").trim()
}

fn snippet(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() <= 120 {
        trimmed.to_string()
    } else {
        let mut end = 120;
        while !trimmed.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &trimmed[..end])
    }
}

/// Normalize a discovery response into journalist records.
///
/// Accepts `{"journalists": [...]}` (or the `results`/`candidates`
/// spellings) as well as a bare top-level array. A missing or non-array
/// list yields an empty result, not an error; entries without a usable
/// name are dropped.
pub fn normalize_journalists(raw: &str) -> Result<Vec<Journalist>, NormalizeError> {
    let value = parse_model_json(raw)?;

    let entries = match &value {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match pick(map, JOURNALIST_LIST_KEYS) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        _ => &[],
    };

    Ok(entries.iter().filter_map(normalize_journalist).collect())
}

/// Map one raw journalist entry onto the canonical schema.
///
/// Returns `None` when the entry has no usable name; every other field
/// takes its defined default.
pub fn normalize_journalist(entry: &Value) -> Option<Journalist> {
    let map = entry.as_object()?;

    let name = clean_text(map, NAME_KEYS)?;
    let outlet = clean_text(map, OUTLET_KEYS).unwrap_or_default();
    let beat = clean_text(map, BEAT_KEYS);

    let sources = normalize_sources(map);
    let article_link = pick_string(map, ARTICLE_LINK_KEYS)
        .and_then(|link| sanitize_url(&link))
        .or_else(|| sources.first().map(|s| s.url.clone()));

    Some(Journalist {
        name,
        outlet,
        beat,
        article_link,
        relevance_score: clamp_relevance(pick(map, RELEVANCE_KEYS)),
        email: clean_text(map, EMAIL_KEYS),
        linkedin: clean_text(map, LINKEDIN_KEYS),
        x_handle: clean_text(map, X_HANDLE_KEYS),
        sources,
    })
}

/// Normalize an outreach response into the five-channel draft.
///
/// Channels the model skipped are backfilled with per-channel
/// placeholders so every field is non-empty.
pub fn normalize_outreach(raw: &str) -> Result<OutreachDraft, NormalizeError> {
    let value = parse_model_json(raw)?;

    let map = match value.get("outreach").and_then(Value::as_object) {
        Some(nested) => nested,
        None => value
            .as_object()
            .ok_or_else(|| NormalizeError::Unparseable(snippet(raw)))?,
    };

    Ok(OutreachDraft {
        email: channel(map, EMAIL_CHANNEL_KEYS, EMAIL_PLACEHOLDER),
        x_direct_message: channel(map, X_DM_KEYS, X_DM_PLACEHOLDER),
        x_public_post: channel(map, X_POST_KEYS, X_POST_PLACEHOLDER),
        linked_in_direct_message: channel(map, LINKEDIN_DM_KEYS, LINKEDIN_DM_PLACEHOLDER),
        linked_in_public_post: channel(map, LINKEDIN_POST_KEYS, LINKEDIN_POST_PLACEHOLDER),
    })
}

fn normalize_sources(map: &Map<String, Value>) -> Vec<SourceRef> {
    let Some(Value::Array(items)) = pick(map, SOURCES_KEYS) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let source = item.as_object()?;
            let url = pick_string(source, SOURCE_URL_KEYS).and_then(|u| sanitize_url(&u))?;
            Some(SourceRef {
                title: clean_text(source, SOURCE_TITLE_KEYS),
                url,
            })
        })
        .collect()
}

fn channel(map: &Map<String, Value>, keys: &[&str], placeholder: &str) -> String {
    clean_text(map, keys).unwrap_or_else(|| placeholder.to_string())
}

/// First non-null value among the accepted keys.
fn pick<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| map.get(*key))
        .filter(|value| !value.is_null())
}

fn pick_string(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    match pick(map, keys)? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Non-empty text with placeholder strings ("null", "N/A") filtered out.
fn clean_text(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    pick_string(map, keys).filter(|s| {
        !s.is_empty() && !matches!(s.to_lowercase().as_str(), "null" | "none" | "n/a" | "na" | "-")
    })
}

fn clamp_relevance(value: Option<&Value>) -> u8 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(score) if score.is_finite() => {
            score.round().clamp(RELEVANCE_FLOOR as f64, RELEVANCE_CEIL as f64) as u8
        }
        _ => RELEVANCE_FLOOR,
    }
}

#[cfg(test)]
#[path = "normalizer_test.rs"]
mod tests;
