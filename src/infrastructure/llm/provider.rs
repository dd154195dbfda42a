// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{json, Value};

use crate::domain::llm::gateway::CompletionRequest;

/// Supported model providers.
///
/// The gateway abstracts both behind one completion shape; this module
/// owns the vendor-specific request bodies and response envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Gemini,
}

impl ProviderKind {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "gemini" | "google" => ProviderKind::Gemini,
            _ => ProviderKind::OpenAi,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "https://api.openai.com/v1",
            ProviderKind::Gemini => "https://generativelanguage.googleapis.com",
        }
    }
}

/// A fully shaped HTTP request for one provider.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    pub url: String,
    pub bearer_token: Option<String>,
    pub body: Value,
}

pub fn build_request(
    provider: ProviderKind,
    base_url: &str,
    api_key: &str,
    model: &str,
    request: &CompletionRequest,
) -> ProviderRequest {
    let base_url = base_url.trim_end_matches('/');
    match provider {
        ProviderKind::OpenAi => ProviderRequest {
            url: format!("{base_url}/chat/completions"),
            bearer_token: Some(api_key.to_string()),
            body: json!({
                "model": model,
                "temperature": request.temperature,
                "response_format": { "type": "json_object" },
                "messages": [
                    { "role": "system", "content": request.system },
                    { "role": "user", "content": request.prompt }
                ]
            }),
        },
        ProviderKind::Gemini => ProviderRequest {
            url: format!("{base_url}/v1beta/models/{model}:generateContent?key={api_key}"),
            bearer_token: None,
            body: json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": request.prompt }] }
                ],
                "systemInstruction": { "parts": [{ "text": request.system }] },
                "generationConfig": {
                    "temperature": request.temperature,
                    "responseMimeType": "application/json"
                }
            }),
        },
    }
}

/// Pull the completion text out of the provider's response envelope.
pub fn extract_text(provider: ProviderKind, body: &Value) -> Option<String> {
    let text = match provider {
        ProviderKind::OpenAi => body["choices"][0]["message"]["content"].as_str(),
        ProviderKind::Gemini => body["candidates"][0]["content"]["parts"][0]["text"].as_str(),
    };
    text.map(|t| t.to_string())
}
