use tc_review::{Outcome, ReviewError};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{BulkAction, BulkArgs};
use crate::commands::queue::build_params;
use crate::commands::shared::outcome::{ActionReport, ensure_not_failed};
use crate::context::AppContext;
use crate::output::output;

/// Load the page the ids are on, select them, and run the action the way
/// the queue's bulk bar does.
pub async fn handle(args: &BulkArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let params = build_params(&args.queue)?;
    ctx.workspace.open(params).await?;

    let queue = ctx.workspace.queue_mut();
    for id in &args.ids {
        if queue.is_selected(id) {
            continue;
        }
        if !queue.toggle_selection(id) {
            return Err(ReviewError::NotOnPage(id.clone()).into());
        }
    }
    let selected = queue.selected_ids();
    tracing::debug!(action = ?args.action, count = selected.len(), "running bulk action");

    let outcome = match args.action {
        BulkAction::Read => ctx.workspace.bulk_mark_read().await,
        BulkAction::Reject => ctx.workspace.bulk_reject().await?,
        BulkAction::Restore => ctx.workspace.bulk_restore().await?,
        BulkAction::Generate => ctx.workspace.bulk_generate().await?,
        BulkAction::Approve => ctx.workspace.bulk_approve().await?,
    };
    ensure_not_failed(outcome, action_name(args.action))?;
    if outcome == Outcome::Cancelled && !flags.quiet {
        eprintln!("nothing approved");
    }
    output(
        &ActionReport::new(action_name(args.action), selected, outcome),
        flags.format,
    )
}

const fn action_name(action: BulkAction) -> &'static str {
    match action {
        BulkAction::Read => "bulk read",
        BulkAction::Reject => "bulk reject",
        BulkAction::Restore => "bulk restore",
        BulkAction::Generate => "bulk generate",
        BulkAction::Approve => "bulk approve",
    }
}
