use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::draft::{DraftId, PostedResponse, ResponseDraft};
use crate::enums::{IntentTier, OpportunityStatus};

/// Server-assigned opportunity identifier.
pub type OpportunityId = String;

/// List projection of an opportunity, as returned by the paginated queue.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct OpportunityListItem {
    pub id: OpportunityId,
    pub subreddit_name: String,
    pub post_title: String,
    #[serde(default)]
    pub post_body_preview: String,
    pub post_author: String,
    pub post_score: i64,
    pub post_num_comments: i64,
    pub post_created_at: DateTime<Utc>,
    #[serde(default)]
    pub post_flair: String,
    pub relevance_score: f64,
    pub status: OpportunityStatus,
    pub is_read: bool,
    pub discovered_at: DateTime<Utc>,
    pub age_hours: f64,
    pub has_drafts: bool,
    #[serde(default)]
    pub scheduled_for: Option<DateTime<Utc>>,
    #[serde(default)]
    pub intent_tier: Option<IntentTier>,
}

/// Full opportunity record including its candidate drafts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct OpportunityDetail {
    pub id: OpportunityId,
    pub subreddit_name: String,
    #[serde(default)]
    pub reddit_post_id: String,
    pub reddit_post_url: String,
    pub post_title: String,
    #[serde(default)]
    pub post_body: String,
    pub post_author: String,
    pub post_score: i64,
    pub post_num_comments: i64,
    pub post_created_at: DateTime<Utc>,
    #[serde(default)]
    pub post_flair: String,
    pub relevance_score: f64,
    #[serde(default)]
    pub relevance_reasoning: String,
    #[serde(default)]
    pub detected_keywords: Vec<String>,
    pub status: OpportunityStatus,
    pub discovered_at: DateTime<Utc>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub scheduled_for: Option<DateTime<Utc>>,
    pub age_hours: f64,
    #[serde(default)]
    pub is_respondable: bool,
    #[serde(default)]
    pub drafts: Vec<ResponseDraft>,
    #[serde(default)]
    pub posted_response: Option<PostedResponse>,
}

impl OpportunityDetail {
    /// Mirrors the list projection's `has_drafts` flag.
    #[must_use]
    pub fn has_drafts(&self) -> bool {
        !self.drafts.is_empty()
    }

    #[must_use]
    pub fn draft(&self, id: DraftId) -> Option<&ResponseDraft> {
        self.drafts.iter().find(|draft| draft.id == id)
    }

    /// The draft a reviewer starts on: the server-selected one, else the first.
    #[must_use]
    pub fn initial_draft(&self) -> Option<&ResponseDraft> {
        self.drafts
            .iter()
            .find(|draft| draft.is_selected)
            .or_else(|| self.drafts.first())
    }
}
