// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Search domain module
///
/// Defines the search engine interface used by best-effort link
/// resolution and the domain representation of scraped results.
pub mod engine;
