//! The seam between the workspace and whatever renders it.

use std::time::Duration;

use async_trait::async_trait;

use crate::dialogs::{RegenerateChoice, RejectionFeedback, RejectionPrompt};
use crate::picker::BulkDraftPicker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A short-lived message for the reviewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub duration: Duration,
}

/// Dialogs and notices requested by the workspace.
///
/// Dialog methods return the reviewer's answer (`None` on cancel) and never
/// touch workspace state themselves.
#[async_trait]
pub trait ReviewFrontend: Send + Sync {
    /// Let the reviewer confirm or change the draft chosen per item.
    async fn pick_bulk_drafts(&self, picker: BulkDraftPicker) -> Option<BulkDraftPicker>;

    /// Ask for a strategy, tone, and tracked-link preference.
    async fn choose_regeneration(&self, post_title: &str) -> Option<RegenerateChoice>;

    /// Ask why the opportunity is being rejected.
    async fn collect_rejection(&self, prompt: &RejectionPrompt) -> Option<RejectionFeedback>;

    async fn notify(&self, notice: Notice);
}
