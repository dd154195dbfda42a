// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Model gateway domain module
///
/// Defines the interface to the external generative model endpoint and
/// its typed error taxonomy.
pub mod gateway;
