//! Non-interactive [`ReviewFrontend`]: dialog answers come from command-line
//! flags, notices go to stderr.

use async_trait::async_trait;
use tc_core::entities::OpportunityId;
use tc_core::enums::{ResponseStrategy, Tone};
use tc_review::{
    BulkDraftPicker, Notice, NoticeKind, RegenerateChoice, RejectionFeedback, RejectionPrompt,
    ReviewFrontend,
};

use crate::cli::root_commands::{BulkAction, Commands};
use crate::commands::shared::parse::{Pick, parse_enum, parse_pick};

/// Answers the workspace will receive when it opens a dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogAnswers {
    pub picks: Vec<(OpportunityId, Pick)>,
    pub regeneration: Option<RegenerateChoice>,
    pub rejection: Option<RejectionFeedback>,
}

impl DialogAnswers {
    /// Pull dialog answers out of the parsed command so bad values fail
    /// before any request is made.
    pub fn from_command(command: &Commands) -> anyhow::Result<Self> {
        let mut answers = Self::default();
        match command {
            Commands::Bulk(args) => {
                if args.action != BulkAction::Approve && !args.picks.is_empty() {
                    tracing::warn!("--pick only applies to bulk approve; ignoring");
                } else {
                    answers.picks = args
                        .picks
                        .iter()
                        .map(|raw| parse_pick(raw))
                        .collect::<anyhow::Result<_>>()?;
                }
            }
            Commands::Regenerate(args) => {
                let strategy = args
                    .strategy
                    .as_deref()
                    .map(|raw| parse_enum::<ResponseStrategy>(raw, "strategy"))
                    .transpose()?
                    .unwrap_or_default();
                let tone = args
                    .tone
                    .as_deref()
                    .map(|raw| parse_enum::<Tone>(raw, "tone"))
                    .transpose()?;
                answers.regeneration = Some(RegenerateChoice {
                    strategy,
                    tone,
                    include_utm: !args.no_utm,
                });
            }
            Commands::Reject(args) => {
                answers.rejection = Some(RejectionFeedback {
                    reason: Some(parse_enum(&args.reason, "rejection reason")?),
                    confidence: args.confidence,
                    explanation: args.explanation.clone().unwrap_or_default(),
                    improvement_suggestion: args.suggestion.clone().unwrap_or_default(),
                });
            }
            _ => {}
        }
        Ok(answers)
    }
}

pub struct CliFrontend {
    quiet: bool,
    answers: DialogAnswers,
}

impl CliFrontend {
    pub const fn new(quiet: bool, answers: DialogAnswers) -> Self {
        Self { quiet, answers }
    }

    fn print(&self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Error => eprintln!("error: {}", notice.message),
            NoticeKind::Info if !self.quiet => eprintln!("{}", notice.message),
            NoticeKind::Info => {}
        }
    }
}

#[async_trait]
impl ReviewFrontend for CliFrontend {
    async fn pick_bulk_drafts(&self, mut picker: BulkDraftPicker) -> Option<BulkDraftPicker> {
        for (id, pick) in &self.answers.picks {
            match pick {
                Pick::Skip => picker.skip(id),
                Pick::Draft(draft_id) => {
                    if let Err(error) = picker.select_draft(id, *draft_id) {
                        self.print(&Notice {
                            kind: NoticeKind::Error,
                            message: format!("{id}: {error}"),
                            duration: std::time::Duration::ZERO,
                        });
                        return None;
                    }
                }
            }
        }
        if !self.quiet {
            for entry in picker.entries() {
                match entry.chosen_draft {
                    Some(draft) => eprintln!("{} -> draft {draft}", entry.opportunity.id),
                    None => eprintln!("{} -> skipped", entry.opportunity.id),
                }
            }
        }
        Some(picker)
    }

    async fn choose_regeneration(&self, post_title: &str) -> Option<RegenerateChoice> {
        tracing::debug!(%post_title, "regeneration requested");
        self.answers.regeneration
    }

    async fn collect_rejection(&self, prompt: &RejectionPrompt) -> Option<RejectionFeedback> {
        let feedback = self.answers.rejection.clone()?;
        let known = feedback
            .reason
            .is_none_or(|reason| prompt.reasons.iter().any(|option| option.value == reason));
        if !known {
            tracing::warn!(
                opportunity = %prompt.opportunity_id,
                "rejection reason is not in the server's catalog"
            );
        }
        Some(feedback)
    }

    async fn notify(&self, notice: Notice) {
        self.print(&notice);
    }
}
