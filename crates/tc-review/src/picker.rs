//! Draft picker for bulk approval.

use tc_client::payloads::BulkApproval;
use tc_core::entities::{DraftId, OpportunityDetail};

use crate::error::ValidationError;

/// One opportunity in the picker and the draft chosen for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerEntry {
    pub opportunity: OpportunityDetail,
    pub chosen_draft: Option<DraftId>,
}

/// Per-item draft choice for a bulk approval.
///
/// Details with no drafts are dropped on construction and every remaining
/// item starts on its first draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkDraftPicker {
    entries: Vec<PickerEntry>,
}

impl BulkDraftPicker {
    #[must_use]
    pub fn new(details: impl IntoIterator<Item = OpportunityDetail>) -> Self {
        let entries = details
            .into_iter()
            .filter_map(|opportunity| {
                let first = opportunity.drafts.first()?.id;
                Some(PickerEntry {
                    opportunity,
                    chosen_draft: Some(first),
                })
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[PickerEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Choose `draft_id` for one opportunity.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownDraft`] if the draft does not belong
    /// to that opportunity (or the opportunity is not in the picker).
    pub fn select_draft(
        &mut self,
        opportunity_id: &str,
        draft_id: DraftId,
    ) -> Result<(), ValidationError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.opportunity.id == opportunity_id)
            .filter(|entry| entry.opportunity.draft(draft_id).is_some())
            .ok_or(ValidationError::UnknownDraft(draft_id))?;
        entry.chosen_draft = Some(draft_id);
        Ok(())
    }

    /// Leave one opportunity out of the approval.
    pub fn skip(&mut self, opportunity_id: &str) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.opportunity.id == opportunity_id)
        {
            entry.chosen_draft = None;
        }
    }

    #[must_use]
    pub fn can_approve(&self) -> bool {
        self.entries.iter().any(|entry| entry.chosen_draft.is_some())
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.chosen_draft.is_some())
            .count()
    }

    /// The (opportunity, draft) pairs to submit.
    #[must_use]
    pub fn approvals(&self) -> Vec<BulkApproval> {
        self.entries
            .iter()
            .filter_map(|entry| {
                Some(BulkApproval {
                    opportunity_id: entry.opportunity.id.clone(),
                    draft_id: entry.chosen_draft?,
                    edited_text: None,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::tests::{detail, draft};
    use pretty_assertions::assert_eq;

    fn picker() -> BulkDraftPicker {
        BulkDraftPicker::new([
            detail("a", vec![draft(1, false), draft(2, true)]),
            detail("empty", vec![]),
            detail("b", vec![draft(3, false)]),
        ])
    }

    #[test]
    fn drops_items_without_drafts_and_preselects_first() {
        let picker = picker();
        let chosen: Vec<_> = picker
            .entries()
            .iter()
            .map(|entry| (entry.opportunity.id.as_str(), entry.chosen_draft))
            .collect();
        assert_eq!(chosen, vec![("a", Some(1)), ("b", Some(3))]);
        assert_eq!(picker.selected_count(), 2);
    }

    #[test]
    fn select_draft_rejects_foreign_drafts() {
        let mut picker = picker();
        picker.select_draft("a", 2).unwrap();
        assert_eq!(
            picker.select_draft("a", 3),
            Err(ValidationError::UnknownDraft(3))
        );
        assert_eq!(
            picker.approvals(),
            vec![
                BulkApproval {
                    opportunity_id: "a".into(),
                    draft_id: 2,
                    edited_text: None,
                },
                BulkApproval {
                    opportunity_id: "b".into(),
                    draft_id: 3,
                    edited_text: None,
                },
            ]
        );
    }

    #[test]
    fn skipping_everything_disables_approve() {
        let mut picker = picker();
        picker.skip("a");
        assert!(picker.can_approve());
        picker.skip("b");
        assert!(!picker.can_approve());
        assert!(picker.approvals().is_empty());
    }
}
