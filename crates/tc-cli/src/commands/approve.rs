use anyhow::Context;
use chrono::Local;
use tc_review::{ScheduleInput, today_in};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ApproveArgs;
use crate::commands::shared::outcome::{ActionReport, ensure_not_failed};
use crate::commands::shared::parse::{parse_date, parse_time};
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(args: &ApproveArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let date = args.date.as_deref().map(parse_date).transpose()?;
    let time = args.time.as_deref().map(parse_time).transpose()?;

    ctx.workspace.load_detail(&args.id).await?;
    let review = ctx
        .workspace
        .detail_mut()
        .context("opportunity detail was not loaded")?;
    if let Some(draft) = args.draft {
        review.select_draft(draft)?;
    }
    if let Some(text) = &args.text {
        review.set_edited_text(text.clone());
    }
    review.set_schedule(ScheduleInput::from_parts(date, time));

    let outcome = ctx.workspace.approve(today_in(&Local), &Local).await?;
    ensure_not_failed(outcome, "approve")?;
    output(
        &ActionReport::new("approve", vec![args.id.clone()], outcome),
        flags.format,
    )
}
