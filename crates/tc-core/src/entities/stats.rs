use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RejectionReason;

/// Aggregate counters shown above the queue.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OpportunityStats {
    pub total: u64,
    pub unread: u64,
    pub pending_review: u64,
    pub pending_approval: u64,
    pub approved: u64,
    pub posted: u64,
    pub rejected: u64,
    #[serde(default)]
    pub subreddits: Vec<String>,
    #[serde(default)]
    pub last_scanned: Option<DateTime<Utc>>,
}

/// Paginated list envelope.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Page<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// One entry of the rejection reason catalog.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RejectionReasonOption {
    pub value: RejectionReason,
    pub label: String,
}
