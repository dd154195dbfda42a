// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Infrastructure layer.
///
/// Concrete adapters behind the domain's ports: the provider-facing
/// model gateway, the scraping search engine, and the metrics
/// exporter.
pub mod llm;
pub mod metrics;
pub mod search;
