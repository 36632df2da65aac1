use chrono::{Local, Utc};
use serde::Serialize;
use tc_core::entities::{DraftId, OpportunityDetail};
use tc_core::enums::OpportunityStatus;
use tc_core::format::{format_status, scheduled_label, time_ago, truncate};
use tc_review::DraftReview;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

const DRAFT_PREVIEW_WIDTH: usize = 100;

/// `tcatch show`: load without touching the read flag.
pub async fn handle_show(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let review = ctx.workspace.load_detail(id).await?;
    render_review(review, flags)
}

/// `tcatch open`: the detail view as reached from the queue, which marks the
/// opportunity read.
pub async fn handle_open(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let review = ctx.workspace.view(id).await?;
    render_review(review, flags)
}

#[derive(Debug, Serialize)]
struct DetailView<'a> {
    opportunity: &'a OpportunityDetail,
    selected_draft: Option<DraftId>,
    working_text: &'a str,
}

#[derive(Debug, Serialize)]
struct DraftRow {
    id: DraftId,
    label: String,
    selected: bool,
    edited: bool,
    text: String,
}

/// Review commands that still apply to an opportunity in `status`.
/// Approved and scheduled items print nothing; they can only be posted.
fn available_actions(status: OpportunityStatus) -> Option<&'static str> {
    if status.is_awaiting_review() {
        Some("approve, reject, regenerate")
    } else if status.is_terminal() {
        Some("none (read-only)")
    } else {
        None
    }
}

pub fn render_review(review: &DraftReview, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format != OutputFormat::Table {
        return output(
            &DetailView {
                opportunity: review.opportunity(),
                selected_draft: review.selected_draft().map(|draft| draft.id),
                working_text: review.edited_text(),
            },
            flags.format,
        );
    }

    let opportunity = review.opportunity();
    println!("{}", opportunity.post_title);
    println!(
        "r/{} | u/{} | {} | {} points, {} comments",
        opportunity.subreddit_name,
        opportunity.post_author,
        time_ago(opportunity.age_hours),
        opportunity.post_score,
        opportunity.post_num_comments
    );
    println!("status: {}", format_status(opportunity.status.as_str()));
    if let Some(actions) = available_actions(opportunity.status) {
        println!("actions: {actions}");
    }
    if let Some(at) = opportunity.scheduled_for {
        println!("scheduled: {}", scheduled_label(at, Utc::now(), &Local));
    }
    println!("relevance: {:.0}%", opportunity.relevance_score * 100.0);
    if !opportunity.relevance_reasoning.is_empty() {
        println!("why: {}", opportunity.relevance_reasoning);
    }
    if !opportunity.detected_keywords.is_empty() {
        println!("keywords: {}", opportunity.detected_keywords.join(", "));
    }
    println!("{}", opportunity.reddit_post_url);
    if let Some(posted) = &opportunity.posted_response {
        println!("posted: {}", posted.reddit_comment_url);
    }
    if !opportunity.post_body.is_empty() {
        println!();
        println!("{}", opportunity.post_body);
    }
    println!();

    if !opportunity.has_drafts() {
        println!("no drafts yet");
        return Ok(());
    }
    let selected = review.selected_draft().map(|draft| draft.id);
    let rows = opportunity
        .drafts
        .iter()
        .map(|draft| DraftRow {
            id: draft.id,
            label: draft.display_label(),
            selected: Some(draft.id) == selected,
            edited: !draft.edited_text.is_empty(),
            text: truncate(draft.working_text(), DRAFT_PREVIEW_WIDTH),
        })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tc_core::enums::OpportunityStatus;

    use super::available_actions;

    #[test]
    fn reviewable_statuses_offer_review_actions() {
        for status in [
            OpportunityStatus::PendingReview,
            OpportunityStatus::Generating,
            OpportunityStatus::PendingApproval,
        ] {
            assert_eq!(available_actions(status), Some("approve, reject, regenerate"));
        }
    }

    #[test]
    fn finished_statuses_are_read_only() {
        for status in [
            OpportunityStatus::Posted,
            OpportunityStatus::Rejected,
            OpportunityStatus::Failed,
            OpportunityStatus::Expired,
        ] {
            assert_eq!(available_actions(status), Some("none (read-only)"));
        }
    }

    #[test]
    fn approved_items_list_no_actions() {
        assert_eq!(available_actions(OpportunityStatus::Approved), None);
    }
}
