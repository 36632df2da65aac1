use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Server-assigned draft identifier.
pub type DraftId = i64;

/// A generated (and possibly hand-edited) candidate reply.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResponseDraft {
    pub id: DraftId,
    pub variation_number: u32,
    #[serde(default)]
    pub variation_label: String,
    pub response_text: String,
    #[serde(default)]
    pub edited_text: String,
    #[serde(default)]
    pub final_text: String,
    #[serde(default)]
    pub is_selected: bool,
    pub created_at: DateTime<Utc>,
}

impl ResponseDraft {
    /// Edited text when present, otherwise the generated text.
    #[must_use]
    pub fn working_text(&self) -> &str {
        if self.edited_text.is_empty() {
            &self.response_text
        } else {
            &self.edited_text
        }
    }

    /// Label shown next to the draft, falling back to its variation number.
    #[must_use]
    pub fn display_label(&self) -> String {
        if self.variation_label.is_empty() {
            format!("Draft {}", self.variation_number)
        } else {
            self.variation_label.clone()
        }
    }
}

/// Draft payload returned by the regenerate endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GeneratedDraft {
    pub id: DraftId,
    pub variation_number: u32,
    #[serde(default)]
    pub variation_label: String,
    pub response_text: String,
    pub created_at: DateTime<Utc>,
}

impl From<GeneratedDraft> for ResponseDraft {
    fn from(draft: GeneratedDraft) -> Self {
        Self {
            id: draft.id,
            variation_number: draft.variation_number,
            variation_label: draft.variation_label,
            final_text: draft.response_text.clone(),
            response_text: draft.response_text,
            edited_text: String::new(),
            is_selected: false,
            created_at: draft.created_at,
        }
    }
}

/// Record of a reply that has been posted to Reddit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PostedResponse {
    pub reddit_comment_id: String,
    pub reddit_comment_url: String,
    pub final_text: String,
    pub posted_at: DateTime<Utc>,
    #[serde(default)]
    pub posted_by_username: String,
    #[serde(default)]
    pub comment_score: i64,
    #[serde(default)]
    pub reply_count: u32,
    #[serde(default)]
    pub was_removed: bool,
    #[serde(default)]
    pub was_edited_after_post: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(edited: &str) -> ResponseDraft {
        ResponseDraft {
            id: 7,
            variation_number: 2,
            variation_label: String::new(),
            response_text: "generated".into(),
            edited_text: edited.into(),
            final_text: String::new(),
            is_selected: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn working_text_prefers_edit() {
        assert_eq!(draft("").working_text(), "generated");
        assert_eq!(draft("edited").working_text(), "edited");
    }

    #[test]
    fn display_label_falls_back_to_variation_number() {
        assert_eq!(draft("").display_label(), "Draft 2");
    }

    #[test]
    fn generated_draft_converts_unselected_with_final_text() {
        let generated = GeneratedDraft {
            id: 9,
            variation_number: 3,
            variation_label: "Soft mention".into(),
            response_text: "fresh".into(),
            created_at: Utc::now(),
        };
        let draft = ResponseDraft::from(generated);
        assert_eq!(draft.final_text, "fresh");
        assert!(draft.edited_text.is_empty());
        assert!(!draft.is_selected);
    }
}
