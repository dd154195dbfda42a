// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use metrics::counter;
use thiserror::Error;
use tokio::sync::Semaphore;

use crate::domain::llm::gateway::{CompletionRequest, GatewayError, ModelGateway};
use crate::domain::models::batch::OutreachBatchItem;
use crate::domain::models::company::CompanyProfile;
use crate::domain::models::journalist::Journalist;
use crate::domain::models::outreach::OutreachDraft;
use crate::domain::services::link_resolver::LinkResolver;
use crate::domain::services::normalizer::{normalize_outreach, NormalizeError};
use crate::domain::services::prompt_builder::{
    build_outreach_prompt, COPYWRITER_SYSTEM_PROMPT, OUTREACH_TEMPERATURE,
};

#[derive(Error, Debug)]
pub enum OutreachError {
    #[error("Model gateway error: {0}")]
    Gateway(#[from] GatewayError),
    #[error("Normalization error: {0}")]
    Normalize(#[from] NormalizeError),
}

impl OutreachError {
    pub fn code(&self) -> &'static str {
        match self {
            OutreachError::Gateway(error) => error.code(),
            OutreachError::Normalize(error) => error.code(),
        }
    }
}

/// Outreach drafting for single journalists and for whole batches.
///
/// Batch processing keeps input order in the output and isolates every
/// failure to its own item. When link resolution is enabled the batch
/// degrades to sequential processing with a pacing delay between items,
/// so the scraped search provider is hit at most once per interval.
pub struct OutreachService<G> {
    gateway: Arc<G>,
    link_resolver: Option<Arc<LinkResolver>>,
    concurrency: usize,
    pacing: Duration,
}

impl<G> OutreachService<G>
where
    G: ModelGateway + 'static,
{
    pub fn new(
        gateway: Arc<G>,
        link_resolver: Option<Arc<LinkResolver>>,
        concurrency: usize,
        pacing: Duration,
    ) -> Self {
        Self {
            gateway,
            link_resolver,
            concurrency,
            pacing,
        }
    }

    /// Draft the five-channel outreach copy for one journalist.
    pub async fn draft_one(
        &self,
        journalist: &Journalist,
        company: &CompanyProfile,
    ) -> Result<OutreachDraft, OutreachError> {
        let prompt = build_outreach_prompt(journalist, company);
        let result = async {
            let completion = self
                .gateway
                .complete(CompletionRequest {
                    system: COPYWRITER_SYSTEM_PROMPT.to_string(),
                    prompt,
                    temperature: OUTREACH_TEMPERATURE,
                })
                .await?;
            Ok(normalize_outreach(&completion.text)?)
        }
        .await;

        match &result {
            Ok(_) => counter!("outreach_drafts_total", "outcome" => "success").increment(1),
            Err(error) => {
                counter!("outreach_drafts_total", "outcome" => "error").increment(1);
                tracing::warn!(
                    "Outreach draft failed for {}: {}",
                    journalist.name,
                    error
                );
            }
        }
        result
    }

    /// Draft outreach for every journalist in the batch.
    ///
    /// The returned list always has exactly one entry per input
    /// journalist, in input order; a failed item carries its error and
    /// never cancels its siblings.
    pub async fn draft_batch(
        &self,
        journalists: Vec<Journalist>,
        company: &CompanyProfile,
    ) -> Vec<OutreachBatchItem> {
        if journalists.is_empty() {
            return Vec::new();
        }

        match self.link_resolver.clone() {
            Some(resolver) => self.draft_sequential(journalists, company, resolver).await,
            None => self.draft_concurrent(journalists, company).await,
        }
    }

    async fn draft_concurrent(
        &self,
        journalists: Vec<Journalist>,
        company: &CompanyProfile,
    ) -> Vec<OutreachBatchItem> {
        let semaphore = Arc::new(Semaphore::new(self.concurrency.max(1)));

        let draft_futures: Vec<_> = journalists
            .into_iter()
            .map(|journalist| {
                let semaphore = semaphore.clone();
                async move {
                    // Never closed, so acquire cannot fail
                    let _permit = semaphore.acquire().await.unwrap();
                    self.outcome_for(journalist, company).await
                }
            })
            .collect();

        // join_all keeps input order regardless of completion order
        join_all(draft_futures).await
    }

    async fn draft_sequential(
        &self,
        journalists: Vec<Journalist>,
        company: &CompanyProfile,
        resolver: Arc<LinkResolver>,
    ) -> Vec<OutreachBatchItem> {
        let mut items = Vec::with_capacity(journalists.len());
        for (index, mut journalist) in journalists.into_iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(self.pacing).await;
            }
            if journalist.article_link.is_none() {
                journalist.article_link = resolver.resolve_article_link(&journalist).await;
            }
            items.push(self.outcome_for(journalist, company).await);
        }
        items
    }

    async fn outcome_for(
        &self,
        journalist: Journalist,
        company: &CompanyProfile,
    ) -> OutreachBatchItem {
        match self.draft_one(&journalist, company).await {
            Ok(outreach) => OutreachBatchItem::success(journalist, outreach),
            Err(error) => {
                let code = error.code();
                OutreachBatchItem::failure(journalist, code, error.to_string())
            }
        }
    }
}
