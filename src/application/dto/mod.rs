// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Data transfer objects for the HTTP surface, mapping between request
/// bodies and the domain models.
pub mod discover_request;
pub mod outreach_request;
