// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use pressclub::config::settings::Settings;
use pressclub::domain::search::engine::SearchEngine;
use pressclub::domain::services::discovery_service::DiscoveryService;
use pressclub::domain::services::link_resolver::LinkResolver;
use pressclub::domain::services::outreach_service::OutreachService;
use pressclub::infrastructure::llm::http_gateway::HttpModelGateway;
use pressclub::infrastructure::llm::provider::ProviderKind;
use pressclub::infrastructure::search::google::GoogleSearchEngine;
use pressclub::presentation::routes;
use pressclub::utils::retry_policy::RetryPolicy;
use pressclub::utils::telemetry;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting pressclub...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Initialize Prometheus metrics
    if settings.metrics.enabled {
        pressclub::infrastructure::metrics::init_metrics(settings.metrics.port);
    }

    // 4. Build the model gateway
    let provider = ProviderKind::from_name(&settings.model.provider);
    let retry_policy = RetryPolicy {
        max_retries: settings.model.max_retries,
        initial_backoff: Duration::from_millis(settings.model.initial_backoff_ms),
        max_backoff: Duration::from_millis(settings.model.max_backoff_ms),
        ..RetryPolicy::standard()
    };
    if settings.model.api_key.is_none() {
        warn!("No model API key configured, model calls will fail fast");
    }
    let gateway = Arc::new(HttpModelGateway::new(
        provider,
        settings.model.api_key.clone(),
        settings.model.model.clone(),
        settings.model.base_url.clone(),
        Duration::from_secs(settings.model.timeout_secs),
        retry_policy,
    )?);
    info!(
        "Model gateway ready (provider: {}, model: {})",
        settings.model.provider, settings.model.model
    );

    // 5. Optional article link resolution
    let link_resolver = if settings.link_resolution.enabled {
        let engine: Arc<dyn SearchEngine> = Arc::new(GoogleSearchEngine::new(
            Duration::from_secs(settings.link_resolution.timeout_secs),
        ));
        info!("Link resolution enabled");
        Some(Arc::new(LinkResolver::new(
            engine,
            settings.link_resolution.result_limit,
        )))
    } else {
        None
    };

    // 6. Assemble the pipeline services
    let pacing = Duration::from_millis(settings.link_resolution.pacing_ms);
    let discovery = Arc::new(DiscoveryService::new(
        gateway.clone(),
        link_resolver.clone(),
        settings.discovery.target_count,
        pacing,
    ));
    let outreach = Arc::new(OutreachService::new(
        gateway,
        link_resolver,
        settings.outreach.concurrency,
        pacing,
    ));

    // 7. Start the HTTP server
    let app = routes::routes(discovery, outreach);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
