// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Utility module
///
/// Shared helpers used across the service: telemetry setup, retry
/// policy math, URL cleanup and company inference from websites.
pub mod company_inference;
pub mod retry_policy;
pub mod telemetry;
pub mod url_utils;
