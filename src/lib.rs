// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Application layer
///
/// Data transfer objects between the HTTP surface and the domain
pub mod application;

/// Configuration loading and defaults
pub mod config;

/// Domain layer
///
/// Company and journalist models, the model gateway port, and the
/// discovery and outreach services
pub mod domain;

/// Infrastructure layer
///
/// Provider HTTP gateway, scraping search engine, metrics exporter
pub mod infrastructure;

/// Presentation layer
///
/// Routes, handlers, and the API error mapping
pub mod presentation;

/// Shared helpers: retry policy, URL handling, company inference
pub mod utils;
