// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::utils::company_inference::{infer_company_description, infer_company_name};

pub const DEFAULT_COMPANY_NAME: &str = "Your Company";
pub const DEFAULT_COMPANY_DESCRIPTION: &str =
    "A high-growth technology startup building innovative products.";

/// Resolved company identity used to render prompts.
///
/// Callers may omit name and description; we then infer both from the
/// website host, falling back to fixed defaults when even that is
/// unavailable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyProfile {
    pub name: String,
    pub description: String,
    pub website: String,
}

impl CompanyProfile {
    pub fn resolve(
        website: Option<&str>,
        company_name: Option<&str>,
        company_description: Option<&str>,
    ) -> Self {
        let website = website.map(str::trim).unwrap_or_default().to_string();

        let name = match company_name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(explicit) => explicit.to_string(),
            None if !website.is_empty() => infer_company_name(&website),
            None => DEFAULT_COMPANY_NAME.to_string(),
        };

        let description = match company_description.map(str::trim).filter(|d| !d.is_empty()) {
            Some(explicit) => explicit.to_string(),
            None if !website.is_empty() => infer_company_description(&website, Some(&name)),
            None => DEFAULT_COMPANY_DESCRIPTION.to_string(),
        };

        Self {
            name,
            description,
            website,
        }
    }
}
