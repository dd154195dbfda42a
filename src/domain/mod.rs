// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Domain layer module
///
/// Core business logic of the service:
/// - models: business entities and data structures
/// - llm: the model gateway abstraction and its error taxonomy
/// - search: the search engine abstraction used for link resolution
/// - services: domain services and business rules
///
/// The domain layer depends on no concrete infrastructure; gateways
/// and engines are injected behind traits.
pub mod llm;
pub mod models;
pub mod search;
pub mod services;
