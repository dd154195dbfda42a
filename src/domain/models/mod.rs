// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Domain model module
///
/// Core business entities of the service:
/// - company: resolved company identity used for prompt rendering
/// - journalist: a candidate outreach target with relevance scoring
/// - outreach: per-channel message drafts for one journalist
/// - batch: ordered per-item outcomes of an outreach batch
/// - search_result: one organic hit scraped from a search engine page
pub mod batch;
pub mod company;
pub mod journalist;
pub mod outreach;
pub mod search_result;
