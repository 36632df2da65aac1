//! Request and response bodies for the opportunity endpoints.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use tc_core::entities::{DraftId, GeneratedDraft, OpportunityId, RejectionReasonOption};
use tc_core::enums::{IntentTier, OpportunityStatus, RejectionReason, ResponseStrategy, SortOrder, Tone};

// ── List query ─────────────────────────────────────────────────────

/// Filters accepted by `GET /opportunities/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilters {
    pub status: Option<OpportunityStatus>,
    pub is_read: Option<bool>,
    pub subreddits: Vec<String>,
    pub intent_tier: Option<IntentTier>,
    pub has_drafts: Option<bool>,
    pub sort: Option<SortOrder>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ListFilters {
    /// Encoded query string (without the leading `?`); unset filters are
    /// omitted.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(is_read) = self.is_read {
            pairs.push(("is_read", is_read.to_string()));
        }
        if !self.subreddits.is_empty() {
            pairs.push(("subreddits", self.subreddits.join(",")));
        }
        if let Some(tier) = self.intent_tier {
            pairs.push(("intent_tier", tier.as_str().to_string()));
        }
        if let Some(has_drafts) = self.has_drafts {
            pairs.push(("has_drafts", has_drafts.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if let Some(page) = self.page.filter(|page| *page > 0) {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size.filter(|size| *size > 0) {
            pairs.push(("page_size", page_size.to_string()));
        }

        pairs
            .into_iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

// ── Single-item transitions ────────────────────────────────────────

/// Body of `POST /opportunities/{id}/approve/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApproveRequest {
    pub draft_id: DraftId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_text: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_instant"
    )]
    pub scheduled_for: Option<DateTime<Utc>>,
}

/// Body of `POST /opportunities/{id}/reject/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectRequest {
    pub reason: RejectionReason,
    pub confidence: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvement_suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_id: Option<DraftId>,
}

/// Body of `POST /opportunities/{id}/regenerate/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegenerateRequest {
    pub strategy: ResponseStrategy,
    pub include_utm: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarkReadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub is_read: bool,
}

/// Response of approve and other single status transitions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub success: bool,
    pub status: OpportunityStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RejectResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub rejection_id: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegenerateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub draft: Option<GeneratedDraft>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct RejectionReasonsResponse {
    pub reasons: Vec<RejectionReasonOption>,
}

// ── Bulk ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct BulkIdsRequest<'a> {
    pub opportunity_ids: &'a [OpportunityId],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct BulkStatusRequest<'a> {
    pub opportunity_ids: &'a [OpportunityId],
    pub status: OpportunityStatus,
}

/// One (opportunity, chosen draft) pair in a bulk approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkApproval {
    pub opportunity_id: OpportunityId,
    pub draft_id: DraftId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct BulkApproveRequest<'a> {
    pub approvals: &'a [BulkApproval],
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BulkStatusResponse {
    #[serde(default)]
    pub success: bool,
    pub updated_count: u64,
    pub status: OpportunityStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BulkReadResponse {
    #[serde(default)]
    pub success: bool,
    pub updated_count: u64,
    #[serde(default)]
    pub is_read: bool,
}

/// Per-item outcome inside a bulk generate/approve result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BulkItemResult {
    pub opportunity_id: OpportunityId,
    pub success: bool,
    #[serde(default)]
    pub draft_count: Option<u32>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BulkGenerateResult {
    #[serde(default)]
    pub success: bool,
    pub generated_count: u64,
    #[serde(default)]
    pub failed_count: u64,
    #[serde(default)]
    pub results: Vec<BulkItemResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BulkApproveResult {
    #[serde(default)]
    pub success: bool,
    pub approved_count: u64,
    #[serde(default)]
    pub failed_count: u64,
    #[serde(default)]
    pub results: Vec<BulkItemResult>,
}

/// ISO-8601 UTC instant with millisecond precision and a `Z` suffix.
#[allow(clippy::ref_option)]
fn serialize_instant<S>(instant: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match instant {
        Some(instant) => {
            serializer.serialize_str(&instant.to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        None => serializer.serialize_none(),
    }
}
