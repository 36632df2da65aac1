//! Single-opportunity review: draft selection, editing, and scheduling.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use tc_client::payloads::ApproveRequest;
use tc_core::entities::{DraftId, GeneratedDraft, OpportunityDetail, ResponseDraft};

use crate::error::ValidationError;

/// Optional "post later" inputs. Date and time are only checked when
/// `enabled` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleInput {
    pub enabled: bool,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

impl ScheduleInput {
    /// Enabled as soon as either half is given.
    #[must_use]
    pub const fn from_parts(date: Option<NaiveDate>, time: Option<NaiveTime>) -> Self {
        Self {
            enabled: date.is_some() || time.is_some(),
            date,
            time,
        }
    }

    /// Combine date and time in `tz` into a UTC instant.
    ///
    /// Returns `Ok(None)` when scheduling is off.
    ///
    /// # Errors
    ///
    /// Fails if either half is missing, the date is before `today`, or the
    /// wall-clock time does not exist in `tz`.
    pub fn resolve<Tz: TimeZone>(
        &self,
        today: NaiveDate,
        tz: &Tz,
    ) -> Result<Option<DateTime<Utc>>, ValidationError> {
        if !self.enabled {
            return Ok(None);
        }
        let (Some(date), Some(time)) = (self.date, self.time) else {
            return Err(ValidationError::IncompleteSchedule);
        };
        if date < today {
            return Err(ValidationError::ScheduleInPast);
        }
        let local = date.and_time(time);
        tz.from_local_datetime(&local)
            .earliest()
            .map(|at| Some(at.with_timezone(&Utc)))
            .ok_or_else(|| ValidationError::NonexistentLocalTime(local.to_string()))
    }
}

/// Today's date in `tz`; the earliest date a post may be scheduled for.
#[must_use]
pub fn today_in<Tz: TimeZone>(tz: &Tz) -> NaiveDate {
    Utc::now().with_timezone(tz).date_naive()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DraftReview {
    opportunity: OpportunityDetail,
    selected_draft: Option<DraftId>,
    edited_text: String,
    show_edit_mode: bool,
    schedule: ScheduleInput,
}

impl DraftReview {
    /// Start on the server-selected draft, else the first one.
    #[must_use]
    pub fn new(opportunity: OpportunityDetail) -> Self {
        let (selected_draft, edited_text) = opportunity
            .initial_draft()
            .map_or((None, String::new()), |draft| {
                (Some(draft.id), draft.working_text().to_string())
            });
        Self {
            opportunity,
            selected_draft,
            edited_text,
            show_edit_mode: false,
            schedule: ScheduleInput::default(),
        }
    }

    #[must_use]
    pub const fn opportunity(&self) -> &OpportunityDetail {
        &self.opportunity
    }

    #[must_use]
    pub fn selected_draft(&self) -> Option<&ResponseDraft> {
        self.selected_draft
            .and_then(|id| self.opportunity.draft(id))
    }

    #[must_use]
    pub fn edited_text(&self) -> &str {
        &self.edited_text
    }

    #[must_use]
    pub const fn show_edit_mode(&self) -> bool {
        self.show_edit_mode
    }

    #[must_use]
    pub const fn schedule(&self) -> &ScheduleInput {
        &self.schedule
    }

    /// Switch drafts; the edit buffer is reset and edit mode is left.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownDraft`] for a draft not on this
    /// opportunity.
    pub fn select_draft(&mut self, id: DraftId) -> Result<(), ValidationError> {
        let draft = self
            .opportunity
            .draft(id)
            .ok_or(ValidationError::UnknownDraft(id))?;
        self.edited_text = draft.working_text().to_string();
        self.selected_draft = Some(id);
        self.show_edit_mode = false;
        Ok(())
    }

    pub const fn toggle_edit_mode(&mut self) {
        self.show_edit_mode = !self.show_edit_mode;
    }

    pub fn set_edited_text(&mut self, text: impl Into<String>) {
        self.edited_text = text.into();
    }

    pub const fn set_schedule(&mut self, schedule: ScheduleInput) {
        self.schedule = schedule;
    }

    /// Build the approve body.
    ///
    /// `edited_text` is only sent when it differs from the draft's generated
    /// text.
    ///
    /// # Errors
    ///
    /// Fails without a selected draft or with an invalid schedule.
    pub fn approval_request<Tz: TimeZone>(
        &self,
        today: NaiveDate,
        tz: &Tz,
    ) -> Result<ApproveRequest, ValidationError> {
        let draft = self
            .selected_draft()
            .ok_or(ValidationError::NoDraftSelected)?;
        let scheduled_for = self.schedule.resolve(today, tz)?;
        let edited_text =
            (self.edited_text != draft.response_text).then(|| self.edited_text.clone());
        Ok(ApproveRequest {
            draft_id: draft.id,
            edited_text,
            scheduled_for,
        })
    }

    /// Append a freshly generated draft and select it.
    pub fn apply_regenerated(&mut self, generated: GeneratedDraft) {
        let draft = ResponseDraft::from(generated);
        let id = draft.id;
        self.edited_text = draft.working_text().to_string();
        self.opportunity.drafts.push(draft);
        self.selected_draft = Some(id);
        self.show_edit_mode = false;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDateTime};
    use pretty_assertions::assert_eq;
    use tc_core::enums::OpportunityStatus;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap()
    }

    pub(crate) fn draft(id: DraftId, is_selected: bool) -> ResponseDraft {
        let response_text = format!("generated {id}");
        ResponseDraft {
            id,
            variation_number: u32::try_from(id).unwrap_or(0),
            variation_label: String::new(),
            final_text: response_text.clone(),
            response_text,
            edited_text: String::new(),
            is_selected,
            created_at: at(),
        }
    }

    pub(crate) fn detail(id: &str, drafts: Vec<ResponseDraft>) -> OpportunityDetail {
        OpportunityDetail {
            id: id.to_string(),
            subreddit_name: "selfhosted".into(),
            reddit_post_id: String::new(),
            reddit_post_url: format!("https://reddit.com/{id}"),
            post_title: format!("Post {id}"),
            post_body: String::new(),
            post_author: "someone".into(),
            post_score: 1,
            post_num_comments: 0,
            post_created_at: at(),
            post_flair: String::new(),
            relevance_score: 0.5,
            relevance_reasoning: String::new(),
            detected_keywords: Vec::new(),
            status: OpportunityStatus::PendingApproval,
            discovered_at: at(),
            reviewed_at: None,
            scheduled_for: None,
            age_hours: 1.0,
            is_respondable: true,
            drafts,
            posted_response: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 4).unwrap()
    }

    #[test]
    fn starts_on_server_selected_draft() {
        let mut b = draft(2, true);
        b.edited_text = "hand edited".into();
        let review = DraftReview::new(detail("x", vec![draft(1, false), b]));

        assert_eq!(review.selected_draft().map(|d| d.id), Some(2));
        assert_eq!(review.edited_text(), "hand edited");
    }

    #[test]
    fn no_drafts_means_nothing_to_approve() {
        let review = DraftReview::new(detail("x", vec![]));
        assert_eq!(
            review.approval_request(today(), &Utc),
            Err(ValidationError::NoDraftSelected)
        );
    }

    #[test]
    fn selecting_a_draft_resets_edit_state() {
        let mut review = DraftReview::new(detail("x", vec![draft(1, false), draft(2, false)]));
        review.toggle_edit_mode();
        review.set_edited_text("scratch");

        review.select_draft(2).unwrap();

        assert!(!review.show_edit_mode());
        assert_eq!(review.edited_text(), "generated 2");
        assert_eq!(review.select_draft(9), Err(ValidationError::UnknownDraft(9)));
    }

    #[test]
    fn unchanged_text_is_not_sent() {
        let review = DraftReview::new(detail("x", vec![draft(1, false)]));
        let request = review.approval_request(today(), &Utc).unwrap();
        assert_eq!(
            request,
            ApproveRequest {
                draft_id: 1,
                edited_text: None,
                scheduled_for: None,
            }
        );
    }

    #[test]
    fn changed_text_is_sent() {
        let mut review = DraftReview::new(detail("x", vec![draft(1, false)]));
        review.set_edited_text("better words");
        let request = review.approval_request(today(), &Utc).unwrap();
        assert_eq!(request.edited_text.as_deref(), Some("better words"));
    }

    #[test]
    fn half_a_schedule_is_rejected() {
        let mut review = DraftReview::new(detail("x", vec![draft(1, false)]));
        review.set_schedule(ScheduleInput::from_parts(Some(today()), None));
        assert_eq!(
            review.approval_request(today(), &Utc),
            Err(ValidationError::IncompleteSchedule)
        );

        review.set_schedule(ScheduleInput::from_parts(None, NaiveTime::from_hms_opt(9, 0, 0)));
        assert_eq!(
            review.approval_request(today(), &Utc),
            Err(ValidationError::IncompleteSchedule)
        );
    }

    #[test]
    fn past_dates_are_rejected() {
        let schedule = ScheduleInput::from_parts(
            NaiveDate::from_ymd_opt(2026, 3, 3),
            NaiveTime::from_hms_opt(9, 0, 0),
        );
        assert_eq!(
            schedule.resolve(today(), &Utc),
            Err(ValidationError::ScheduleInPast)
        );
    }

    #[test]
    fn schedule_is_converted_from_local_time() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let schedule = ScheduleInput::from_parts(Some(today()), NaiveTime::from_hms_opt(16, 30, 0));
        let expected = NaiveDateTime::new(today(), NaiveTime::from_hms_opt(14, 30, 0).unwrap())
            .and_utc();
        assert_eq!(schedule.resolve(today(), &tz), Ok(Some(expected)));
    }

    #[test]
    fn regenerated_draft_is_appended_and_selected() {
        let mut review = DraftReview::new(detail("x", vec![draft(1, true)]));
        review.toggle_edit_mode();
        review.apply_regenerated(GeneratedDraft {
            id: 7,
            variation_number: 2,
            variation_label: "Fresh".into(),
            response_text: "brand new".into(),
            created_at: at(),
        });

        let selected = review.selected_draft().unwrap();
        assert_eq!(selected.id, 7);
        assert_eq!(selected.final_text, "brand new");
        assert!(selected.edited_text.is_empty());
        assert!(!selected.is_selected);
        assert_eq!(review.edited_text(), "brand new");
        assert_eq!(review.opportunity().drafts.len(), 2);
        assert!(!review.show_edit_mode());
    }
}
