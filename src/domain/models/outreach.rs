// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// Per-channel outreach copy generated for one journalist.
///
/// Every field is guaranteed non-empty after normalization; a channel
/// the model skipped is backfilled with a placeholder so callers never
/// render a blank panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutreachDraft {
    pub email: String,
    pub x_direct_message: String,
    pub x_public_post: String,
    pub linked_in_direct_message: String,
    pub linked_in_public_post: String,
}

impl OutreachDraft {
    pub fn channels(&self) -> [(&'static str, &str); 5] {
        [
            ("email", self.email.as_str()),
            ("xDirectMessage", self.x_direct_message.as_str()),
            ("xPublicPost", self.x_public_post.as_str()),
            ("linkedInDirectMessage", self.linked_in_direct_message.as_str()),
            ("linkedInPublicPost", self.linked_in_public_post.as_str()),
        ]
    }
}
