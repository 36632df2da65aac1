use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod frontend;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("tcatch error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;
    ui::init(&flags);

    let config = bootstrap::load_config(&flags)?;
    let answers = frontend::DialogAnswers::from_command(&cli.command)?;
    let frontend = frontend::CliFrontend::new(flags.quiet, answers);

    let mut ctx = context::AppContext::init(&config, frontend)
        .context("failed to initialize threadcatch client")?;

    let result = commands::dispatch::dispatch(cli.command, &mut ctx, &flags).await;
    ctx.workspace.finish_background().await;
    result
}

/// Default filter when `THREADCATCH_LOG` is unset. `--quiet` wins over
/// `--verbose`.
const fn log_level(flags: &cli::GlobalFlags) -> &'static str {
    if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    }
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("THREADCATCH_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level(flags)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::log_level;
    use crate::cli::Cli;

    fn level(args: &[&str]) -> &'static str {
        let cli = Cli::try_parse_from(args).expect("cli should parse");
        log_level(&cli.global_flags())
    }

    #[test]
    fn log_level_follows_quiet_and_verbose() {
        assert_eq!(level(&["tcatch", "stats"]), "warn");
        assert_eq!(level(&["tcatch", "stats", "--verbose"]), "debug");
        assert_eq!(level(&["tcatch", "-q", "stats"]), "error");
        assert_eq!(level(&["tcatch", "-q", "-v", "stats"]), "error");
    }
}
