// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod discover_handler;
pub mod outreach_handler;
