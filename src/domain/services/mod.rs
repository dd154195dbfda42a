// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Domain service module
///
/// Core business logic of the outreach pipeline:
/// - prompt_builder: pure templating for the two model instructions
/// - normalizer: tolerant mapping of raw model text onto typed records
/// - discovery_service: journalist discovery with link backfill
/// - outreach_service: per-journalist and batch outreach drafting
/// - link_resolver: best-effort article link lookup via search scraping
pub mod discovery_service;
pub mod link_resolver;
pub mod normalizer;
pub mod outreach_service;
pub mod prompt_builder;
