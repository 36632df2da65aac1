use tc_client::OpportunityApi;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = ctx.api.stats(&ctx.session).await?;
    output(&stats, flags.format)
}
