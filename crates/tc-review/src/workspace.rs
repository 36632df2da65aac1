//! Async driver for the review workflow.
//!
//! [`Workspace`] owns the queue and the open detail, talks to an
//! [`OpportunityApi`] with an explicit [`SessionContext`], and asks a
//! [`ReviewFrontend`] for dialog answers and to show notices.
//!
//! Reloads run as spawned tasks. Starting a new reload aborts the one in
//! flight, and the queue's ticket check drops anything that still lands
//! late.

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, TimeZone};
use tc_client::payloads::RegenerateResponse;
use tc_client::{ApiError, OpportunityApi, SessionContext};
use tc_config::ReviewConfig;
use tc_core::entities::{OpportunityListItem, OpportunityStats, Page};
use tc_core::enums::OpportunityStatus;
use tc_core::labels::fallback_rejection_reasons;
use tokio::task::{JoinHandle, JoinSet};

use crate::detail::DraftReview;
use crate::dialogs::RejectionPrompt;
use crate::error::ReviewError;
use crate::frontend::{Notice, NoticeKind, ReviewFrontend};
use crate::picker::BulkDraftPicker;
use crate::query::{FilterKey, QueryParams};
use crate::queue::{LoadTicket, ReviewQueue};

pub const NOTHING_SELECTED: &str = "No opportunities selected";
pub const NOTHING_TO_GENERATE: &str = "All selected opportunities already have drafts";
pub const NOTHING_TO_APPROVE: &str = "No selected opportunities have drafts to approve";
pub const GENERATE_FAILED: &str = "Failed to generate drafts";
pub const REGENERATE_FAILED: &str = "Failed to generate response. Please try again.";

/// How a user action ended. Validation failures are errors instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// Nothing applicable was selected; no request was sent.
    NothingToDo,
    /// The reviewer dismissed a dialog.
    Cancelled,
    /// The API call failed and a notice was shown.
    Failed,
}

type LoadResult = (
    Result<Page<OpportunityListItem>, ApiError>,
    Result<OpportunityStats, ApiError>,
);

struct InFlight {
    ticket: LoadTicket,
    handle: JoinHandle<LoadResult>,
}

pub struct Workspace<A, F> {
    api: Arc<A>,
    frontend: F,
    session: SessionContext,
    queue: ReviewQueue,
    detail: Option<DraftReview>,
    in_flight: Option<InFlight>,
    background: JoinSet<()>,
    notice_duration: Duration,
}

impl<A, F> Workspace<A, F>
where
    A: OpportunityApi + 'static,
    F: ReviewFrontend,
{
    pub fn new(api: Arc<A>, frontend: F, session: SessionContext, config: &ReviewConfig) -> Self {
        Self {
            api,
            frontend,
            session,
            queue: ReviewQueue::new(config.page_size),
            detail: None,
            in_flight: None,
            background: JoinSet::new(),
            notice_duration: Duration::from_secs(config.notice_secs),
        }
    }

    #[must_use]
    pub const fn queue(&self) -> &ReviewQueue {
        &self.queue
    }

    /// Selection and preview toggles go straight to the queue.
    pub const fn queue_mut(&mut self) -> &mut ReviewQueue {
        &mut self.queue
    }

    #[must_use]
    pub const fn detail(&self) -> Option<&DraftReview> {
        self.detail.as_ref()
    }

    pub const fn detail_mut(&mut self) -> Option<&mut DraftReview> {
        self.detail.as_mut()
    }

    #[must_use]
    pub const fn frontend(&self) -> &F {
        &self.frontend
    }

    // ── Queue loading ──────────────────────────────────────────────

    /// Start loading `params` (list and stats), superseding any reload
    /// still in flight.
    pub fn navigate(&mut self, params: QueryParams) -> LoadTicket {
        if let Some(previous) = self.in_flight.take() {
            tracing::debug!(
                generation = previous.ticket.generation(),
                "aborting superseded reload"
            );
            previous.handle.abort();
        }
        let ticket = self.queue.begin_reload(params);
        let filters = self.queue.filters();
        let api = Arc::clone(&self.api);
        let session = self.session.clone();
        let handle = tokio::spawn(async move {
            tokio::join!(api.list(&session, &filters), api.stats(&session))
        });
        self.in_flight = Some(InFlight { ticket, handle });
        ticket
    }

    /// Wait for the reload in flight and apply it. Returns whether a page
    /// was applied.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Task`] if the load task panicked.
    pub async fn settle(&mut self) -> Result<bool, ReviewError> {
        let Some(InFlight { ticket, handle }) = self.in_flight.take() else {
            return Ok(false);
        };
        match handle.await {
            Ok((page, stats)) => {
                self.queue.apply_stats(stats);
                Ok(self.queue.apply_page(ticket, page))
            }
            Err(error) if error.is_cancelled() => Ok(false),
            Err(error) => Err(ReviewError::Task(error.to_string())),
        }
    }

    /// Navigate and wait for the result.
    ///
    /// # Errors
    ///
    /// See [`Self::settle`].
    pub async fn open(&mut self, params: QueryParams) -> Result<bool, ReviewError> {
        self.navigate(params);
        self.settle().await
    }

    /// Reload the current view.
    ///
    /// # Errors
    ///
    /// See [`Self::settle`].
    pub async fn refresh(&mut self) -> Result<bool, ReviewError> {
        self.open(self.queue.params().clone()).await
    }

    /// Change one filter control; other filters stay, `page` resets.
    ///
    /// # Errors
    ///
    /// See [`Self::settle`].
    pub async fn set_filter(
        &mut self,
        key: FilterKey,
        value: Option<&str>,
    ) -> Result<bool, ReviewError> {
        let params = self.queue.params().with_filter(key, value);
        self.open(params).await
    }

    /// Jump to a 0-based page index.
    ///
    /// # Errors
    ///
    /// See [`Self::settle`].
    pub async fn change_page(&mut self, index: u32) -> Result<bool, ReviewError> {
        let params = self.queue.params().with_page_index(index);
        self.open(params).await
    }

    async fn refresh_stats(&mut self) {
        let stats = self.api.stats(&self.session).await;
        self.queue.apply_stats(stats);
    }

    // ── Bulk actions ───────────────────────────────────────────────

    /// Mark the selection read and patch the loaded items in place.
    pub async fn bulk_mark_read(&mut self) -> Outcome {
        let ids = self.queue.selected_ids();
        if ids.is_empty() {
            self.notify(NoticeKind::Info, NOTHING_SELECTED).await;
            return Outcome::NothingToDo;
        }
        match self.api.bulk_read(&self.session, &ids).await {
            Ok(response) => {
                tracing::info!(updated = response.updated_count, "bulk marked read");
                self.queue.mark_read_locally(&ids);
                self.queue.clear_selection();
                self.refresh_stats().await;
                Outcome::Done
            }
            Err(error) => {
                self.fail(&error, "Failed to mark opportunities as read")
                    .await;
                Outcome::Failed
            }
        }
    }

    /// Reject every selected opportunity.
    ///
    /// # Errors
    ///
    /// See [`Self::settle`].
    pub async fn bulk_reject(&mut self) -> Result<Outcome, ReviewError> {
        self.bulk_set_status(OpportunityStatus::Rejected, "Failed to reject opportunities")
            .await
    }

    /// Send every selected opportunity back to review.
    ///
    /// # Errors
    ///
    /// See [`Self::settle`].
    pub async fn bulk_restore(&mut self) -> Result<Outcome, ReviewError> {
        self.bulk_set_status(
            OpportunityStatus::PendingReview,
            "Failed to restore opportunities",
        )
        .await
    }

    async fn bulk_set_status(
        &mut self,
        status: OpportunityStatus,
        failure: &str,
    ) -> Result<Outcome, ReviewError> {
        let ids = self.queue.selected_ids();
        if ids.is_empty() {
            self.notify(NoticeKind::Info, NOTHING_SELECTED).await;
            return Ok(Outcome::NothingToDo);
        }
        match self.api.bulk_status(&self.session, &ids, status).await {
            Ok(response) => {
                tracing::info!(updated = response.updated_count, %status, "bulk status change");
                self.refresh().await?;
                Ok(Outcome::Done)
            }
            Err(error) => {
                self.fail(&error, failure).await;
                Ok(Outcome::Failed)
            }
        }
    }

    /// Generate drafts for the selected items that have none.
    ///
    /// # Errors
    ///
    /// See [`Self::settle`].
    pub async fn bulk_generate(&mut self) -> Result<Outcome, ReviewError> {
        let ids = self.queue.selected_without_drafts();
        if ids.is_empty() {
            self.notify(NoticeKind::Info, NOTHING_TO_GENERATE).await;
            return Ok(Outcome::NothingToDo);
        }
        match self.api.bulk_generate(&self.session, &ids).await {
            Ok(result) => {
                let message = format!(
                    "Generated drafts for {} opportunities",
                    result.generated_count
                );
                self.notify(NoticeKind::Info, &message).await;
                self.refresh().await?;
                Ok(Outcome::Done)
            }
            Err(error) => {
                tracing::warn!(%error, "bulk generate failed");
                self.notify(NoticeKind::Error, GENERATE_FAILED).await;
                Ok(Outcome::Failed)
            }
        }
    }

    /// Load details for the selected items with drafts, let the reviewer
    /// pick one draft each, and approve them in one call.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Task`] if a detail load task panicked, or a
    /// reload error after a successful approval.
    pub async fn bulk_approve(&mut self) -> Result<Outcome, ReviewError> {
        let ids = self.queue.selected_with_drafts();
        if ids.is_empty() {
            self.notify(NoticeKind::Info, NOTHING_TO_APPROVE).await;
            return Ok(Outcome::NothingToDo);
        }

        let mut loads = JoinSet::new();
        for (index, id) in ids.into_iter().enumerate() {
            let api = Arc::clone(&self.api);
            let session = self.session.clone();
            loads.spawn(async move { (index, api.get(&session, &id).await) });
        }
        let mut details = Vec::with_capacity(loads.len());
        while let Some(joined) = loads.join_next().await {
            let (index, result) = joined.map_err(|error| ReviewError::Task(error.to_string()))?;
            match result {
                Ok(detail) => details.push((index, detail)),
                Err(error) => {
                    loads.abort_all();
                    self.fail(&error, "Failed to load opportunities").await;
                    return Ok(Outcome::Failed);
                }
            }
        }
        details.sort_by_key(|(index, _)| *index);

        let picker = BulkDraftPicker::new(details.into_iter().map(|(_, detail)| detail));
        let Some(picker) = self.frontend.pick_bulk_drafts(picker).await else {
            return Ok(Outcome::Cancelled);
        };
        let approvals = picker.approvals();
        if approvals.is_empty() {
            return Ok(Outcome::Cancelled);
        }

        match self.api.bulk_approve(&self.session, &approvals).await {
            Ok(result) => {
                if result.failed_count > 0 {
                    tracing::warn!(failed = result.failed_count, "some approvals failed");
                }
                let message = format!("Approved {} opportunities", result.approved_count);
                self.notify(NoticeKind::Info, &message).await;
                self.refresh().await?;
                Ok(Outcome::Done)
            }
            Err(error) => {
                self.fail(&error, "Failed to approve opportunities").await;
                Ok(Outcome::Failed)
            }
        }
    }

    // ── Detail ─────────────────────────────────────────────────────

    /// Open an opportunity. Unless the loaded page already shows it as
    /// read, it is marked read locally right away and on the server in the
    /// background.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Api`] if the detail cannot be loaded.
    pub async fn view(&mut self, id: &str) -> Result<&DraftReview, ReviewError> {
        if self.queue.item(id).is_none_or(|item| !item.is_read) {
            self.queue.mark_read_locally(&[id.to_string()]);
            let api = Arc::clone(&self.api);
            let session = self.session.clone();
            let id = id.to_string();
            self.background.spawn(async move {
                if let Err(error) = api.mark_read(&session, &id).await {
                    tracing::warn!(%id, %error, "mark read failed");
                }
            });
        }
        self.load_detail(id).await
    }

    /// Load one opportunity into the detail view.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Api`] if the request fails.
    pub async fn load_detail(&mut self, id: &str) -> Result<&DraftReview, ReviewError> {
        let detail = self.api.get(&self.session, id).await?;
        tracing::debug!(%id, drafts = detail.drafts.len(), "detail loaded");
        Ok(&*self.detail.insert(DraftReview::new(detail)))
    }

    /// Approve the open draft, then show the approved queue.
    ///
    /// # Errors
    ///
    /// Validation problems (no draft, bad schedule) are returned before any
    /// request is sent.
    pub async fn approve<Tz: TimeZone>(
        &mut self,
        today: NaiveDate,
        tz: &Tz,
    ) -> Result<Outcome, ReviewError> {
        let review = self.detail.as_ref().ok_or(ReviewError::NoDetail)?;
        let request = review.approval_request(today, tz)?;
        let id = review.opportunity().id.clone();

        match self.api.approve(&self.session, &id, &request).await {
            Ok(response) => {
                tracing::info!(%id, status = %response.status, "opportunity approved");
                self.detail = None;
                let params = QueryParams::default()
                    .with_filter(FilterKey::Status, Some(OpportunityStatus::Approved.as_str()));
                self.open(params).await?;
                Ok(Outcome::Done)
            }
            Err(error) => {
                self.fail(&error, "Failed to approve opportunity").await;
                Ok(Outcome::Failed)
            }
        }
    }

    /// Collect structured feedback and reject the open opportunity, then
    /// show the unfiltered queue.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the dialog answer lacks a reason.
    pub async fn reject(&mut self) -> Result<Outcome, ReviewError> {
        let review = self.detail.as_ref().ok_or(ReviewError::NoDetail)?;
        let opportunity_id = review.opportunity().id.clone();
        let post_title = review.opportunity().post_title.clone();
        let draft_id = review.selected_draft().map(|draft| draft.id);

        let reasons = match self.api.rejection_reasons(&self.session).await {
            Ok(reasons) if !reasons.is_empty() => reasons,
            Ok(_) => fallback_rejection_reasons(),
            Err(error) => {
                tracing::warn!(%error, "using built-in rejection reasons");
                fallback_rejection_reasons()
            }
        };
        let prompt = RejectionPrompt {
            opportunity_id,
            post_title,
            draft_id,
            reasons,
        };
        let Some(feedback) = self.frontend.collect_rejection(&prompt).await else {
            return Ok(Outcome::Cancelled);
        };
        let request = feedback.to_request(prompt.draft_id)?;

        match self
            .api
            .reject(&self.session, &prompt.opportunity_id, &request)
            .await
        {
            Ok(response) => {
                tracing::info!(
                    id = %prompt.opportunity_id,
                    rejection = %response.rejection_id,
                    "opportunity rejected"
                );
                self.detail = None;
                self.open(QueryParams::default()).await?;
                Ok(Outcome::Done)
            }
            Err(error) => {
                self.fail(&error, "Failed to reject opportunity").await;
                Ok(Outcome::Failed)
            }
        }
    }

    /// Ask for a strategy and generate one more draft for the open
    /// opportunity. On failure the drafts and selection are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::NoDetail`] when nothing is open.
    pub async fn regenerate(&mut self) -> Result<Outcome, ReviewError> {
        let review = self.detail.as_ref().ok_or(ReviewError::NoDetail)?;
        let id = review.opportunity().id.clone();
        let post_title = review.opportunity().post_title.clone();

        let Some(choice) = self.frontend.choose_regeneration(&post_title).await else {
            return Ok(Outcome::Cancelled);
        };

        let message = match self
            .api
            .regenerate(&self.session, &id, &choice.to_request())
            .await
        {
            Ok(RegenerateResponse {
                success: true,
                draft: Some(draft),
                ..
            }) => {
                tracing::info!(%id, draft = draft.id, "draft regenerated");
                if let Some(review) = self.detail.as_mut() {
                    review.apply_regenerated(draft);
                }
                return Ok(Outcome::Done);
            }
            Ok(response) => response
                .error
                .filter(|error| !error.trim().is_empty())
                .unwrap_or_else(|| REGENERATE_FAILED.to_string()),
            Err(error) => error.user_message(REGENERATE_FAILED),
        };
        self.notify(NoticeKind::Error, &message).await;
        Ok(Outcome::Failed)
    }

    // ── Background work and notices ────────────────────────────────

    /// Wait for fire-and-forget requests (such as mark-read) to finish.
    pub async fn finish_background(&mut self) {
        while let Some(joined) = self.background.join_next().await {
            if let Err(error) = joined {
                tracing::warn!(%error, "background task failed");
            }
        }
    }

    async fn notify(&self, kind: NoticeKind, message: &str) {
        self.frontend
            .notify(Notice {
                kind,
                message: message.to_string(),
                duration: self.notice_duration,
            })
            .await;
    }

    async fn fail(&self, error: &ApiError, fallback: &str) {
        tracing::warn!(%error, "{fallback}");
        self.notify(NoticeKind::Error, &error.user_message(fallback))
            .await;
    }
}
