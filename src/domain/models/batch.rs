// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use super::journalist::Journalist;
use super::outreach::OutreachDraft;

/// Typed error recorded for a single batch item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchItemError {
    pub code: String,
    pub message: String,
}

/// Terminal outcome for one journalist in an outreach batch.
///
/// Exactly one of `outreach` and `error` is populated. Items keep the
/// input order of their journalists regardless of completion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutreachBatchItem {
    pub journalist: Journalist,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outreach: Option<OutreachDraft>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<BatchItemError>,
}

impl OutreachBatchItem {
    pub fn success(journalist: Journalist, outreach: OutreachDraft) -> Self {
        Self {
            journalist,
            outreach: Some(outreach),
            error: None,
        }
    }

    pub fn failure(journalist: Journalist, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            journalist,
            outreach: None,
            error: Some(BatchItemError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}
