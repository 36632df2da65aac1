use tc_client::OpportunityApi;
use tc_core::labels::fallback_rejection_reasons;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// The server catalog, or the built-in list when it is unavailable.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reasons = match ctx.api.rejection_reasons(&ctx.session).await {
        Ok(reasons) if !reasons.is_empty() => reasons,
        Ok(_) => fallback_rejection_reasons(),
        Err(error) => {
            tracing::warn!(%error, "using built-in rejection reasons");
            fallback_rejection_reasons()
        }
    };
    output(&reasons, flags.format)
}
