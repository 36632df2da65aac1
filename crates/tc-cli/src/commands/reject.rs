use crate::cli::GlobalFlags;
use crate::cli::root_commands::RejectArgs;
use crate::commands::shared::outcome::{ActionReport, ensure_not_failed};
use crate::context::AppContext;
use crate::output::output;

/// Feedback fields were already parsed into the frontend's answers.
pub async fn handle(args: &RejectArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.workspace.load_detail(&args.id).await?;
    let outcome = ctx.workspace.reject().await?;
    ensure_not_failed(outcome, "reject")?;
    output(
        &ActionReport::new("reject", vec![args.id.clone()], outcome),
        flags.format,
    )
}
