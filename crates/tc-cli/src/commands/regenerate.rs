use anyhow::Context;
use tc_review::Outcome;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RegenerateArgs;
use crate::commands::shared::outcome::ensure_not_failed;
use crate::commands::show::render_review;
use crate::context::AppContext;

/// Generate one more draft and show the opportunity with it selected.
pub async fn handle(
    args: &RegenerateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.workspace.load_detail(&args.id).await?;
    let outcome = ctx.workspace.regenerate().await?;
    ensure_not_failed(outcome, "regenerate")?;
    if outcome == Outcome::Done && !flags.quiet {
        eprintln!("Generated a new draft");
    }
    let review = ctx
        .workspace
        .detail()
        .context("opportunity detail was not loaded")?;
    render_review(review, flags)
}
