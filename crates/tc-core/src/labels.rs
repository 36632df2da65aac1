//! Human-facing labels, descriptions, and style classes.
//!
//! One mapping function per enum lives here so every frontend renders the
//! same text for the same value.

use crate::entities::RejectionReasonOption;
use crate::enums::{
    DraftFilter, IntentTier, OpportunityStatus, RejectionReason, ResponseStrategy, SortOrder,
    StatusFilter, Tone,
};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[must_use]
pub const fn status_label(status: OpportunityStatus) -> &'static str {
    match status {
        OpportunityStatus::PendingReview => "Pending Review",
        OpportunityStatus::Generating => "Generating",
        OpportunityStatus::PendingApproval => "Pending Approval",
        OpportunityStatus::Approved => "Approved",
        OpportunityStatus::Posted => "Posted",
        OpportunityStatus::Rejected => "Rejected",
        OpportunityStatus::Failed => "Failed",
        OpportunityStatus::Expired => "Expired",
    }
}

/// Style class used to color a status badge.
#[must_use]
pub const fn status_class(status: OpportunityStatus) -> &'static str {
    match status {
        OpportunityStatus::PendingReview
        | OpportunityStatus::PendingApproval
        | OpportunityStatus::Generating => "status-pending",
        OpportunityStatus::Approved => "status-approved",
        OpportunityStatus::Posted => "status-posted",
        OpportunityStatus::Rejected => "status-rejected",
        OpportunityStatus::Failed => "status-failed",
        OpportunityStatus::Expired => "status-expired",
    }
}

#[must_use]
pub const fn status_filter_label(filter: StatusFilter) -> &'static str {
    match filter {
        StatusFilter::All => "All",
        StatusFilter::Unread => "Unread",
        StatusFilter::Status(status) => status_label(status),
    }
}

// ---------------------------------------------------------------------------
// Queue controls
// ---------------------------------------------------------------------------

#[must_use]
pub const fn sort_label(sort: SortOrder) -> &'static str {
    match sort {
        SortOrder::Newest => "Newest First",
        SortOrder::Oldest => "Oldest First",
        SortOrder::Relevance => "Highest Relevance",
        SortOrder::Score => "Highest Score",
        SortOrder::SubredditAsc => "Subreddit A-Z",
        SortOrder::SubredditDesc => "Subreddit Z-A",
    }
}

#[must_use]
pub const fn draft_filter_label(filter: DraftFilter) -> &'static str {
    match filter {
        DraftFilter::All => "All",
        DraftFilter::WithDrafts => "With Drafts",
        DraftFilter::WithoutDrafts => "Without Drafts",
    }
}

// ---------------------------------------------------------------------------
// Intent tier
// ---------------------------------------------------------------------------

#[must_use]
pub const fn intent_tier_label(tier: IntentTier) -> &'static str {
    match tier {
        IntentTier::Tier1 => "Active Seeking",
        IntentTier::Tier2 => "Pain Expression",
        IntentTier::Tier3 => "Implicit Need",
        IntentTier::Tier4 => "Engagement Only",
    }
}

/// Compact label used on queue cards.
#[must_use]
pub const fn intent_tier_short_label(tier: IntentTier) -> &'static str {
    match tier {
        IntentTier::Tier1 => "T1 - High",
        IntentTier::Tier2 => "T2 - Medium",
        IntentTier::Tier3 => "T3 - Low",
        IntentTier::Tier4 => "T4 - Engage",
    }
}

#[must_use]
pub const fn intent_tier_description(tier: IntentTier) -> &'static str {
    match tier {
        IntentTier::Tier1 => "Explicitly looking for a solution (5-15% conversion)",
        IntentTier::Tier2 => "Expressing frustration the product could solve (2-5% conversion)",
        IntentTier::Tier3 => "Discussing relevant topics, might benefit (0.5-2% conversion)",
        IntentTier::Tier4 => "Community engagement, no purchase intent (<0.1% conversion)",
    }
}

// ---------------------------------------------------------------------------
// Regeneration
// ---------------------------------------------------------------------------

#[must_use]
pub const fn strategy_label(strategy: ResponseStrategy) -> &'static str {
    match strategy {
        ResponseStrategy::EngageOnly => "Pure Engagement",
        ResponseStrategy::SoftMention => "Soft Mention",
        ResponseStrategy::WithLink => "With Link",
    }
}

#[must_use]
pub const fn strategy_description(strategy: ResponseStrategy) -> &'static str {
    match strategy {
        ResponseStrategy::EngageOnly => {
            "Genuine community response with no product mention. Best for building trust and rapport."
        }
        ResponseStrategy::SoftMention => {
            "Natural conversation that may mention your product by name, without a link."
        }
        ResponseStrategy::WithLink => {
            "Helpful response that includes a tracked link to your product when relevant."
        }
    }
}

#[must_use]
pub const fn tone_label(tone: Tone) -> &'static str {
    match tone {
        Tone::Casual => "Casual",
        Tone::Enthusiast => "Enthusiast",
        Tone::Helpful => "Helpful",
        Tone::Empathetic => "Empathetic",
        Tone::Witty => "Witty",
        Tone::Expert => "Expert",
    }
}

// ---------------------------------------------------------------------------
// Rejection
// ---------------------------------------------------------------------------

#[must_use]
pub const fn rejection_reason_label(reason: RejectionReason) -> &'static str {
    match reason {
        RejectionReason::ToneMismatch => "Tone Mismatch - Doesn't fit the context",
        RejectionReason::TooPromotional => "Too Promotional - Sounds salesy/spammy",
        RejectionReason::FactuallyWrong => "Factually Wrong - Contains errors",
        RejectionReason::OffTopic => "Off Topic - Doesn't address the post",
        RejectionReason::LowQuality => "Low Quality - Poorly written",
        RejectionReason::WrongStrategy => "Wrong Strategy - Too direct/subtle",
        RejectionReason::TimingBad => "Bad Timing - Post too old or wrong time",
        RejectionReason::Duplicate => "Duplicate - Already responded",
        RejectionReason::NotRelevant => "Not Relevant - Post isn't a good fit",
        RejectionReason::RiskySubreddit => "Risky Subreddit - Too dangerous to post",
        RejectionReason::Other => "Other - Custom reason",
    }
}

/// Built-in catalog used when the server's reason list cannot be loaded.
#[must_use]
pub fn fallback_rejection_reasons() -> Vec<RejectionReasonOption> {
    RejectionReason::ALL
        .iter()
        .map(|reason| RejectionReasonOption {
            value: *reason,
            label: rejection_reason_label(*reason).to_string(),
        })
        .collect()
}

/// Label for a 1-5 rejection confidence; empty outside the range.
#[must_use]
pub const fn confidence_label(confidence: u8) -> &'static str {
    match confidence {
        1 => "Not sure",
        2 => "Somewhat unsure",
        3 => "Neutral",
        4 => "Fairly confident",
        5 => "Very confident",
        _ => "",
    }
}
