use tc_client::ApiError;
use tc_core::entities::{DraftId, OpportunityId};

/// Input problems caught before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select a draft to approve.")]
    NoDraftSelected,

    #[error("Please select both a date and time for scheduling.")]
    IncompleteSchedule,

    #[error("Scheduled date cannot be before today.")]
    ScheduleInPast,

    #[error("{0} does not exist in the local time zone.")]
    NonexistentLocalTime(String),

    #[error("Please select a rejection reason.")]
    MissingReason,

    #[error("Confidence must be between 1 and 5, got {0}.")]
    ConfidenceOutOfRange(u8),

    #[error("Draft {0} does not belong to this opportunity.")]
    UnknownDraft(DraftId),
}

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("opportunity {0} is not on the loaded page")]
    NotOnPage(OpportunityId),

    #[error("no opportunity is open")]
    NoDetail,

    #[error("load task failed: {0}")]
    Task(String),
}
