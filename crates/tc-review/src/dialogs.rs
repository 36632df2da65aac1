//! Values returned by the regenerate and reject dialogs.

use tc_client::payloads::{RegenerateRequest, RejectRequest};
use tc_core::entities::{DraftId, OpportunityId, RejectionReasonOption};
use tc_core::enums::{RejectionReason, ResponseStrategy, Tone};

use crate::error::ValidationError;

pub const DEFAULT_CONFIDENCE: u8 = 3;
pub const CONFIDENCE_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

// ── Regenerate ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegenerateChoice {
    pub strategy: ResponseStrategy,
    pub tone: Option<Tone>,
    /// Only honoured for [`ResponseStrategy::WithLink`].
    pub include_utm: bool,
}

impl RegenerateChoice {
    #[must_use]
    pub fn to_request(self) -> RegenerateRequest {
        RegenerateRequest {
            strategy: self.strategy,
            include_utm: self.include_utm && self.strategy.supports_tracked_link(),
            tone: self.tone,
        }
    }
}

// ── Reject ─────────────────────────────────────────────────────────

/// Context handed to the rejection dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionPrompt {
    pub opportunity_id: OpportunityId,
    pub post_title: String,
    pub draft_id: Option<DraftId>,
    pub reasons: Vec<RejectionReasonOption>,
}

/// Structured rejection feedback as entered by the reviewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionFeedback {
    pub reason: Option<RejectionReason>,
    pub confidence: u8,
    pub explanation: String,
    pub improvement_suggestion: String,
}

impl Default for RejectionFeedback {
    fn default() -> Self {
        Self {
            reason: None,
            confidence: DEFAULT_CONFIDENCE,
            explanation: String::new(),
            improvement_suggestion: String::new(),
        }
    }
}

impl RejectionFeedback {
    #[must_use]
    pub fn with_reason(reason: RejectionReason) -> Self {
        Self {
            reason: Some(reason),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.reason.is_some() && CONFIDENCE_RANGE.contains(&self.confidence)
    }

    /// Build the reject body; blank texts are omitted.
    ///
    /// # Errors
    ///
    /// Fails without a reason or with a confidence outside 1..=5.
    pub fn to_request(&self, draft_id: Option<DraftId>) -> Result<RejectRequest, ValidationError> {
        let reason = self.reason.ok_or(ValidationError::MissingReason)?;
        if !CONFIDENCE_RANGE.contains(&self.confidence) {
            return Err(ValidationError::ConfidenceOutOfRange(self.confidence));
        }
        Ok(RejectRequest {
            reason,
            confidence: self.confidence,
            explanation: trimmed(&self.explanation),
            improvement_suggestion: trimmed(&self.improvement_suggestion),
            draft_id,
        })
    }
}

fn trimmed(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(ResponseStrategy::EngageOnly, true, false)]
    #[case(ResponseStrategy::SoftMention, true, false)]
    #[case(ResponseStrategy::WithLink, true, true)]
    #[case(ResponseStrategy::WithLink, false, false)]
    fn tracked_link_only_with_link(
        #[case] strategy: ResponseStrategy,
        #[case] include_utm: bool,
        #[case] expected: bool,
    ) {
        let choice = RegenerateChoice {
            strategy,
            tone: None,
            include_utm,
        };
        assert_eq!(choice.to_request().include_utm, expected);
    }

    #[test]
    fn default_choice_is_pure_engagement() {
        let request = RegenerateChoice::default().to_request();
        assert_eq!(request.strategy, ResponseStrategy::EngageOnly);
        assert_eq!(request.tone, None);
    }

    #[test]
    fn reject_requires_reason() {
        let feedback = RejectionFeedback::default();
        assert!(!feedback.can_submit());
        assert_eq!(feedback.to_request(None), Err(ValidationError::MissingReason));
    }

    #[test]
    fn reject_checks_confidence_range() {
        let mut feedback = RejectionFeedback::with_reason(RejectionReason::OffTopic);
        feedback.confidence = 0;
        assert_eq!(
            feedback.to_request(None),
            Err(ValidationError::ConfidenceOutOfRange(0))
        );
    }

    #[test]
    fn reject_trims_texts_and_attaches_draft() {
        let feedback = RejectionFeedback {
            reason: Some(RejectionReason::TooPromotional),
            confidence: 5,
            explanation: "  reads like an ad  ".into(),
            improvement_suggestion: "   ".into(),
        };
        assert_eq!(
            feedback.to_request(Some(12)).unwrap(),
            RejectRequest {
                reason: RejectionReason::TooPromotional,
                confidence: 5,
                explanation: Some("reads like an ad".into()),
                improvement_suggestion: None,
                draft_id: Some(12),
            }
        );
    }
}
