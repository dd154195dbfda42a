// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;

use metrics::counter;
use thiserror::Error;

use crate::domain::llm::gateway::{CompletionRequest, GatewayError, ModelGateway};
use crate::domain::models::company::CompanyProfile;
use crate::domain::models::journalist::Journalist;
use crate::domain::services::link_resolver::LinkResolver;
use crate::domain::services::normalizer::{normalize_journalists, NormalizeError};
use crate::domain::services::prompt_builder::{
    build_discovery_prompt, DISCOVERY_TEMPERATURE, RESEARCHER_SYSTEM_PROMPT,
};

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Model gateway error: {0}")]
    Gateway(#[from] GatewayError),
    #[error("Normalization error: {0}")]
    Normalize(#[from] NormalizeError),
}

impl DiscoveryError {
    pub fn code(&self) -> &'static str {
        match self {
            DiscoveryError::Gateway(error) => error.code(),
            DiscoveryError::Normalize(error) => error.code(),
        }
    }
}

/// Journalist discovery: one model call, normalized into candidate
/// records, with optional article link backfill.
pub struct DiscoveryService<G> {
    gateway: Arc<G>,
    link_resolver: Option<Arc<LinkResolver>>,
    target_count: u32,
    link_pacing: Duration,
}

impl<G> DiscoveryService<G>
where
    G: ModelGateway + 'static,
{
    pub fn new(
        gateway: Arc<G>,
        link_resolver: Option<Arc<LinkResolver>>,
        target_count: u32,
        link_pacing: Duration,
    ) -> Self {
        Self {
            gateway,
            link_resolver,
            target_count,
            link_pacing,
        }
    }

    /// Run one discovery pass for the given company.
    ///
    /// The model may return fewer candidates than requested; extra ones
    /// are truncated. A discovery failure aborts the whole request
    /// since there is nothing to batch yet.
    pub async fn discover(
        &self,
        company: &CompanyProfile,
    ) -> Result<Vec<Journalist>, DiscoveryError> {
        let prompt = build_discovery_prompt(company, self.target_count);
        let completion = self
            .gateway
            .complete(CompletionRequest {
                system: RESEARCHER_SYSTEM_PROMPT.to_string(),
                prompt,
                temperature: DISCOVERY_TEMPERATURE,
            })
            .await?;

        let mut journalists = normalize_journalists(&completion.text)?;
        journalists.truncate(self.target_count as usize);

        tracing::info!(
            "Discovered {} journalist candidates for {} (retries: {})",
            journalists.len(),
            company.name,
            completion.retries
        );
        counter!("journalists_discovered_total").increment(journalists.len() as u64);

        if let Some(resolver) = &self.link_resolver {
            self.backfill_links(resolver, &mut journalists).await;
        }

        Ok(journalists)
    }

    /// Resolve missing article links one at a time with a pacing delay,
    /// so the scraped search provider does not block the batch.
    async fn backfill_links(&self, resolver: &LinkResolver, journalists: &mut [Journalist]) {
        let mut paced = false;
        for journalist in journalists.iter_mut() {
            if journalist.article_link.is_some() {
                continue;
            }
            if paced {
                tokio::time::sleep(self.link_pacing).await;
            }
            paced = true;

            let resolved = resolver.resolve_article_link(journalist).await;
            match &resolved {
                Some(link) => {
                    tracing::debug!("Resolved article link for {}: {}", journalist.name, link);
                    counter!("link_resolutions_total", "outcome" => "resolved").increment(1);
                }
                None => {
                    counter!("link_resolutions_total", "outcome" => "unresolved").increment(1);
                }
            }
            journalist.article_link = resolved;
        }
    }
}
