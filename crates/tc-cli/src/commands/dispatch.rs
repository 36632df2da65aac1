use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Queue(args) => commands::queue::handle(&args, ctx, flags).await,
        Commands::Stats => commands::stats::handle(ctx, flags).await,
        Commands::Show { id } => commands::show::handle_show(&id, ctx, flags).await,
        Commands::Open { id } => commands::show::handle_open(&id, ctx, flags).await,
        Commands::Approve(args) => commands::approve::handle(&args, ctx, flags).await,
        Commands::Reject(args) => commands::reject::handle(&args, ctx, flags).await,
        Commands::Regenerate(args) => commands::regenerate::handle(&args, ctx, flags).await,
        Commands::Bulk(args) => commands::bulk::handle(&args, ctx, flags).await,
        Commands::Reasons => commands::reasons::handle(ctx, flags).await,
    }
}
