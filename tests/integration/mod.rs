// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod discover_api_test;
pub mod health_check;
pub mod helpers;
