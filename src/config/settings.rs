// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration.
///
/// Loaded from defaults, then optional `config/{default,<env>}` files,
/// then `PRESSCLUB__`-prefixed environment variables.
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// HTTP server configuration
    pub server: ServerSettings,
    /// Model provider configuration
    pub model: ModelSettings,
    /// Journalist discovery configuration
    pub discovery: DiscoverySettings,
    /// Outreach drafting configuration
    pub outreach: OutreachSettings,
    /// Article link resolution configuration
    pub link_resolution: LinkResolutionSettings,
    /// Metrics exporter configuration
    pub metrics: MetricsSettings,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct ModelSettings {
    /// Provider name ("openai" or "gemini")
    pub provider: String,
    /// Model identifier sent to the provider
    pub model: String,
    /// API key; absent means model calls fail fast with MISSING_KEY
    pub api_key: Option<String>,
    /// Override for the provider base URL
    pub base_url: Option<String>,
    /// Per-call timeout in seconds
    pub timeout_secs: u64,
    /// Retries after the initial attempt, transport errors only
    pub max_retries: u32,
    /// Backoff before the first retry, in milliseconds
    pub initial_backoff_ms: u64,
    /// Upper bound on any backoff, in milliseconds
    pub max_backoff_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct DiscoverySettings {
    /// How many journalist candidates one discovery pass asks for
    pub target_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct OutreachSettings {
    /// Concurrent model calls per batch when link resolution is off
    pub concurrency: usize,
}

#[derive(Debug, Deserialize)]
pub struct LinkResolutionSettings {
    /// Whether article links are backfilled via search scraping
    pub enabled: bool,
    /// Delay between consecutive search lookups, in milliseconds
    pub pacing_ms: u64,
    /// How many search results one lookup considers
    pub result_limit: u32,
    /// Per-lookup timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
pub struct MetricsSettings {
    /// Whether the Prometheus exporter is started
    pub enabled: bool,
    /// Exporter listen port
    pub port: u16,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Server defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Model defaults
            .set_default("model.provider", "openai")?
            .set_default("model.model", "gpt-4o-mini")?
            .set_default("model.timeout_secs", 60)?
            .set_default("model.max_retries", 2)?
            .set_default("model.initial_backoff_ms", 1000)?
            .set_default("model.max_backoff_ms", 5000)?
            // Pipeline defaults
            .set_default("discovery.target_count", 10)?
            .set_default("outreach.concurrency", 4)?
            // Link resolution defaults (off unless opted in)
            .set_default("link_resolution.enabled", false)?
            .set_default("link_resolution.pacing_ms", 1000)?
            .set_default("link_resolution.result_limit", 10)?
            .set_default("link_resolution.timeout_secs", 10)?
            // Metrics defaults
            .set_default("metrics.enabled", true)?
            .set_default("metrics.port", 9000)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("PRESSCLUB").separator("__"));

        let mut settings: Settings = builder.build()?.try_deserialize()?;

        // Provider-native key variables win over nothing, not over config
        if settings.model.api_key.is_none() {
            settings.model.api_key = match settings.model.provider.as_str() {
                "gemini" => std::env::var("GEMINI_API_KEY").ok(),
                _ => std::env::var("OPENAI_API_KEY").ok(),
            };
        }

        Ok(settings)
    }
}
