//! In-memory `OpportunityApi` and a scripted `ReviewFrontend`.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tc_client::payloads::{
    ApproveRequest, BulkApproval, BulkApproveResult, BulkGenerateResult, BulkReadResponse,
    BulkStatusResponse, ListFilters, MarkReadResponse, RegenerateRequest, RegenerateResponse,
    RejectRequest, RejectResponse, StatusResponse,
};
use tc_client::{ApiError, OpportunityApi, SessionContext};
use tc_core::entities::{
    DraftId, GeneratedDraft, OpportunityDetail, OpportunityId, OpportunityListItem,
    OpportunityStats, Page, RejectionReasonOption, ResponseDraft,
};
use tc_core::enums::{OpportunityStatus, RejectionReason};
use tc_review::{
    BulkDraftPicker, Notice, RegenerateChoice, RejectionFeedback, RejectionPrompt, ReviewFrontend,
};

// ── Fixtures ───────────────────────────────────────────────────────

pub fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap()
}

pub fn item(id: &str, status: OpportunityStatus, has_drafts: bool) -> OpportunityListItem {
    OpportunityListItem {
        id: id.to_string(),
        subreddit_name: "selfhosted".into(),
        post_title: format!("Post {id}"),
        post_body_preview: String::new(),
        post_author: "someone".into(),
        post_score: 3,
        post_num_comments: 1,
        post_created_at: at(),
        post_flair: String::new(),
        relevance_score: 0.8,
        status,
        is_read: false,
        discovered_at: at(),
        age_hours: 4.0,
        has_drafts,
        scheduled_for: None,
        intent_tier: None,
    }
}

pub fn draft(id: DraftId, is_selected: bool) -> ResponseDraft {
    ResponseDraft {
        id,
        variation_number: 1,
        variation_label: format!("Variation {id}"),
        response_text: format!("generated {id}"),
        edited_text: String::new(),
        final_text: format!("generated {id}"),
        is_selected,
        created_at: at(),
    }
}

pub fn detail(id: &str, drafts: Vec<ResponseDraft>) -> OpportunityDetail {
    OpportunityDetail {
        id: id.to_string(),
        subreddit_name: "selfhosted".into(),
        reddit_post_id: format!("t3_{id}"),
        reddit_post_url: format!("https://reddit.com/r/selfhosted/{id}"),
        post_title: format!("Post {id}"),
        post_body: "body".into(),
        post_author: "someone".into(),
        post_score: 3,
        post_num_comments: 1,
        post_created_at: at(),
        post_flair: String::new(),
        relevance_score: 0.8,
        relevance_reasoning: String::new(),
        detected_keywords: vec![],
        status: OpportunityStatus::PendingApproval,
        discovered_at: at(),
        reviewed_at: None,
        scheduled_for: None,
        age_hours: 4.0,
        is_respondable: true,
        drafts,
        posted_response: None,
    }
}

// ── Fake API ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(String),
    Stats,
    Get(OpportunityId),
    MarkRead(OpportunityId),
    Approve(OpportunityId, ApproveRequest),
    Reject(OpportunityId, RejectRequest),
    Regenerate(OpportunityId, RegenerateRequest),
    RejectionReasons,
    BulkStatus(Vec<OpportunityId>, OpportunityStatus),
    BulkRead(Vec<OpportunityId>),
    BulkGenerate(Vec<OpportunityId>),
    BulkApprove(Vec<BulkApproval>),
}

#[derive(Default)]
pub struct FakeApi {
    pub items: Vec<OpportunityListItem>,
    pub details: BTreeMap<OpportunityId, OpportunityDetail>,
    pub regenerated: Option<GeneratedDraft>,
    /// Endpoint names that answer with a 500.
    pub failing: HashSet<&'static str>,
    /// Error message carried by failing endpoints; `None` sends a bare 500.
    pub failure_message: Option<String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub fn with_items(items: Vec<OpportunityListItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn with_detail(mut self, detail: OpportunityDetail) -> Self {
        self.details.insert(detail.id.clone(), detail);
        self
    }

    pub fn failing(mut self, endpoint: &'static str, message: Option<&str>) -> Self {
        self.failing.insert(endpoint);
        self.failure_message = message.map(String::from);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|call| matches(call)).count()
    }

    fn record(&self, endpoint: &'static str, call: Call) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.contains(endpoint) {
            return Err(ApiError::Api {
                status: 500,
                message: self.failure_message.clone(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl OpportunityApi for FakeApi {
    async fn list(
        &self,
        _session: &SessionContext,
        filters: &ListFilters,
    ) -> Result<Page<OpportunityListItem>, ApiError> {
        self.record("list", Call::List(filters.query_string()))?;
        let results: Vec<_> = self
            .items
            .iter()
            .filter(|item| filters.status.is_none_or(|status| item.status == status))
            .cloned()
            .collect();
        Ok(Page {
            count: results.len() as u64,
            next: None,
            previous: None,
            results,
        })
    }

    async fn stats(&self, _session: &SessionContext) -> Result<OpportunityStats, ApiError> {
        self.record("stats", Call::Stats)?;
        Ok(OpportunityStats {
            total: self.items.len() as u64,
            ..OpportunityStats::default()
        })
    }

    async fn get(
        &self,
        _session: &SessionContext,
        id: &str,
    ) -> Result<OpportunityDetail, ApiError> {
        self.record("get", Call::Get(id.to_string()))?;
        self.details.get(id).cloned().ok_or(ApiError::Api {
            status: 404,
            message: None,
        })
    }

    async fn mark_read(
        &self,
        _session: &SessionContext,
        id: &str,
    ) -> Result<MarkReadResponse, ApiError> {
        self.record("mark_read", Call::MarkRead(id.to_string()))?;
        Ok(MarkReadResponse {
            success: true,
            is_read: true,
        })
    }

    async fn approve(
        &self,
        _session: &SessionContext,
        id: &str,
        request: &ApproveRequest,
    ) -> Result<StatusResponse, ApiError> {
        self.record("approve", Call::Approve(id.to_string(), request.clone()))?;
        Ok(StatusResponse {
            success: true,
            status: OpportunityStatus::Approved,
        })
    }

    async fn reject(
        &self,
        _session: &SessionContext,
        id: &str,
        request: &RejectRequest,
    ) -> Result<RejectResponse, ApiError> {
        self.record("reject", Call::Reject(id.to_string(), request.clone()))?;
        Ok(RejectResponse {
            success: true,
            rejection_id: "rej-1".into(),
            message: String::new(),
        })
    }

    async fn regenerate(
        &self,
        _session: &SessionContext,
        id: &str,
        request: &RegenerateRequest,
    ) -> Result<RegenerateResponse, ApiError> {
        self.record("regenerate", Call::Regenerate(id.to_string(), request.clone()))?;
        Ok(RegenerateResponse {
            success: self.regenerated.is_some(),
            draft: self.regenerated.clone(),
            error: None,
        })
    }

    async fn rejection_reasons(
        &self,
        _session: &SessionContext,
    ) -> Result<Vec<RejectionReasonOption>, ApiError> {
        self.record("rejection_reasons", Call::RejectionReasons)?;
        Ok(vec![RejectionReasonOption {
            value: RejectionReason::OffTopic,
            label: "Off topic".into(),
        }])
    }

    async fn bulk_status(
        &self,
        _session: &SessionContext,
        ids: &[OpportunityId],
        status: OpportunityStatus,
    ) -> Result<BulkStatusResponse, ApiError> {
        self.record("bulk_status", Call::BulkStatus(ids.to_vec(), status))?;
        Ok(BulkStatusResponse {
            success: true,
            updated_count: ids.len() as u64,
            status,
        })
    }

    async fn bulk_read(
        &self,
        _session: &SessionContext,
        ids: &[OpportunityId],
    ) -> Result<BulkReadResponse, ApiError> {
        self.record("bulk_read", Call::BulkRead(ids.to_vec()))?;
        Ok(BulkReadResponse {
            success: true,
            updated_count: ids.len() as u64,
            is_read: true,
        })
    }

    async fn bulk_generate(
        &self,
        _session: &SessionContext,
        ids: &[OpportunityId],
    ) -> Result<BulkGenerateResult, ApiError> {
        self.record("bulk_generate", Call::BulkGenerate(ids.to_vec()))?;
        Ok(BulkGenerateResult {
            success: true,
            generated_count: ids.len() as u64,
            failed_count: 0,
            results: vec![],
        })
    }

    async fn bulk_approve(
        &self,
        _session: &SessionContext,
        approvals: &[BulkApproval],
    ) -> Result<BulkApproveResult, ApiError> {
        self.record("bulk_approve", Call::BulkApprove(approvals.to_vec()))?;
        Ok(BulkApproveResult {
            success: true,
            approved_count: approvals.len() as u64,
            failed_count: 0,
            results: vec![],
        })
    }
}

// ── Scripted frontend ──────────────────────────────────────────────

#[derive(Default)]
pub struct ScriptedFrontend {
    /// `None` cancels the picker; otherwise these overrides are applied.
    pub picks: Option<Vec<(OpportunityId, DraftId)>>,
    pub regeneration: Option<RegenerateChoice>,
    pub rejection: Option<RejectionFeedback>,
    notices: Mutex<Vec<Notice>>,
    prompts: Mutex<Vec<RejectionPrompt>>,
}

impl ScriptedFrontend {
    pub fn with_picks(picks: Vec<(OpportunityId, DraftId)>) -> Self {
        Self {
            picks: Some(picks),
            ..Self::default()
        }
    }

    pub fn with_regeneration(choice: RegenerateChoice) -> Self {
        Self {
            regeneration: Some(choice),
            ..Self::default()
        }
    }

    pub fn with_rejection(feedback: RejectionFeedback) -> Self {
        Self {
            rejection: Some(feedback),
            ..Self::default()
        }
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .map(|notice| notice.message.clone())
            .collect()
    }

    pub fn prompts(&self) -> Vec<RejectionPrompt> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReviewFrontend for ScriptedFrontend {
    async fn pick_bulk_drafts(&self, mut picker: BulkDraftPicker) -> Option<BulkDraftPicker> {
        for (opportunity_id, draft_id) in self.picks.as_ref()? {
            picker.select_draft(opportunity_id, *draft_id).ok()?;
        }
        Some(picker)
    }

    async fn choose_regeneration(&self, _post_title: &str) -> Option<RegenerateChoice> {
        self.regeneration
    }

    async fn collect_rejection(&self, prompt: &RejectionPrompt) -> Option<RejectionFeedback> {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.rejection.clone()
    }

    async fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
