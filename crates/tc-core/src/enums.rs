//! Status, filter, and choice enums for ThreadCatch.
//!
//! Every enum serializes to the exact string the API uses. `as_str()` returns
//! the same value, `FromStr` accepts it back (hyphens are treated as
//! underscores so CLI input like `pending-review` also parses), and `ALL`
//! lists the variants in display order.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Implements `as_str`, `ALL`, `Display`, and `FromStr` for a unit enum from
/// one variant/string table.
macro_rules! wire_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let normalized = raw.trim().replace('-', "_");
                match normalized.as_str() {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err(CoreError::UnknownVariant {
                        kind: $kind,
                        value: raw.to_string(),
                    }),
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
// OpportunityStatus
// ---------------------------------------------------------------------------

/// Server-side lifecycle of an opportunity.
///
/// ```text
/// pending_review → generating → pending_approval → approved → posted
///        ↘ rejected     ↘ failed                       ↘ expired
/// ```
///
/// The client never moves an opportunity between states on its own. It only
/// displays the current value and asks the API for a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityStatus {
    PendingReview,
    Generating,
    PendingApproval,
    Approved,
    Posted,
    Rejected,
    Failed,
    Expired,
}

wire_enum!(OpportunityStatus, "status", {
    PendingReview => "pending_review",
    Generating => "generating",
    PendingApproval => "pending_approval",
    Approved => "approved",
    Posted => "posted",
    Rejected => "rejected",
    Failed => "failed",
    Expired => "expired",
});

impl OpportunityStatus {
    /// Whether the opportunity is still waiting on a human decision.
    #[must_use]
    pub const fn is_awaiting_review(self) -> bool {
        matches!(
            self,
            Self::PendingReview | Self::Generating | Self::PendingApproval
        )
    }

    /// Terminal or side-branch states with no further forward transition.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Posted | Self::Rejected | Self::Failed | Self::Expired
        )
    }
}

// ---------------------------------------------------------------------------
// StatusFilter
// ---------------------------------------------------------------------------

/// The queue's status filter control.
///
/// `All` sends no status parameter; `Unread` sends `is_read=false` instead
/// of a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Unread,
    Status(OpportunityStatus),
}

impl StatusFilter {
    /// Options offered by the filter bar, in order.
    pub const OPTIONS: &'static [Self] = &[
        Self::All,
        Self::Unread,
        Self::Status(OpportunityStatus::PendingReview),
        Self::Status(OpportunityStatus::PendingApproval),
        Self::Status(OpportunityStatus::Approved),
        Self::Status(OpportunityStatus::Posted),
        Self::Status(OpportunityStatus::Rejected),
        Self::Status(OpportunityStatus::Expired),
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Unread => "unread",
            Self::Status(status) => status.as_str(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "" | "all" => Ok(Self::All),
            "unread" => Ok(Self::Unread),
            other => other
                .parse::<OpportunityStatus>()
                .map(Self::Status)
                .map_err(|_| CoreError::UnknownVariant {
                    kind: "status filter",
                    value: raw.to_string(),
                }),
        }
    }
}

// ---------------------------------------------------------------------------
// IntentTier
// ---------------------------------------------------------------------------

/// Coarse purchase-intent bucket assigned to a post by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum IntentTier {
    #[serde(rename = "tier_1")]
    Tier1,
    #[serde(rename = "tier_2")]
    Tier2,
    #[serde(rename = "tier_3")]
    Tier3,
    #[serde(rename = "tier_4")]
    Tier4,
}

wire_enum!(IntentTier, "intent tier", {
    Tier1 => "tier_1",
    Tier2 => "tier_2",
    Tier3 => "tier_3",
    Tier4 => "tier_4",
});

// ---------------------------------------------------------------------------
// DraftFilter
// ---------------------------------------------------------------------------

/// Whether the queue shows only items with drafts, only without, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DraftFilter {
    #[default]
    All,
    WithDrafts,
    WithoutDrafts,
}

impl DraftFilter {
    /// Query-parameter value; `All` has none.
    #[must_use]
    pub const fn as_param(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::WithDrafts => Some("true"),
            Self::WithoutDrafts => Some("false"),
        }
    }

    /// Value sent to the list endpoint as `has_drafts`.
    #[must_use]
    pub const fn has_drafts(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::WithDrafts => Some(true),
            Self::WithoutDrafts => Some(false),
        }
    }
}

impl FromStr for DraftFilter {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "" | "all" => Ok(Self::All),
            "true" => Ok(Self::WithDrafts),
            "false" => Ok(Self::WithoutDrafts),
            _ => Err(CoreError::UnknownVariant {
                kind: "draft filter",
                value: raw.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// SortOrder
// ---------------------------------------------------------------------------

/// Sort orders accepted by the list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "time")]
    Newest,
    #[serde(rename = "-time")]
    Oldest,
    #[serde(rename = "relevance")]
    Relevance,
    #[serde(rename = "score")]
    Score,
    #[serde(rename = "subreddit")]
    SubredditAsc,
    #[serde(rename = "-subreddit")]
    SubredditDesc,
}

impl SortOrder {
    pub const ALL: &'static [Self] = &[
        Self::Newest,
        Self::Oldest,
        Self::Relevance,
        Self::Score,
        Self::SubredditAsc,
        Self::SubredditDesc,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "time",
            Self::Oldest => "-time",
            Self::Relevance => "relevance",
            Self::Score => "score",
            Self::SubredditAsc => "subreddit",
            Self::SubredditDesc => "-subreddit",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    // Leading '-' is meaningful here, so no hyphen normalization.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|sort| sort.as_str() == raw.trim())
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "sort",
                value: raw.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// ResponseStrategy
// ---------------------------------------------------------------------------

/// Generation strategy requested when regenerating a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStrategy {
    #[default]
    EngageOnly,
    SoftMention,
    WithLink,
}

wire_enum!(ResponseStrategy, "strategy", {
    EngageOnly => "engage_only",
    SoftMention => "soft_mention",
    WithLink => "with_link",
});

impl ResponseStrategy {
    /// Only link-bearing responses can carry a tracked link.
    #[must_use]
    pub const fn supports_tracked_link(self) -> bool {
        matches!(self, Self::WithLink)
    }
}

// ---------------------------------------------------------------------------
// Tone
// ---------------------------------------------------------------------------

/// Optional voice for a regenerated draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Casual,
    Enthusiast,
    Helpful,
    Empathetic,
    Witty,
    Expert,
}

wire_enum!(Tone, "tone", {
    Casual => "casual",
    Enthusiast => "enthusiast",
    Helpful => "helpful",
    Empathetic => "empathetic",
    Witty => "witty",
    Expert => "expert",
});

// ---------------------------------------------------------------------------
// RejectionReason
// ---------------------------------------------------------------------------

/// Structured reason attached to a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    ToneMismatch,
    TooPromotional,
    FactuallyWrong,
    OffTopic,
    LowQuality,
    WrongStrategy,
    TimingBad,
    Duplicate,
    NotRelevant,
    RiskySubreddit,
    Other,
}

wire_enum!(RejectionReason, "rejection reason", {
    ToneMismatch => "tone_mismatch",
    TooPromotional => "too_promotional",
    FactuallyWrong => "factually_wrong",
    OffTopic => "off_topic",
    LowQuality => "low_quality",
    WrongStrategy => "wrong_strategy",
    TimingBad => "timing_bad",
    Duplicate => "duplicate",
    NotRelevant => "not_relevant",
    RiskySubreddit => "risky_subreddit",
    Other => "other",
});
