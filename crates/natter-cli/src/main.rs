//! Natter CLI entry point.
//!
//! Binary name: `natter`
//!
//! Parses CLI arguments, loads the profile configuration, then
//! dispatches to the interactive chat loop or one of the utility
//! commands.

mod cli;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,natter=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need configuration
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "natter", &mut std::io::stdout());
        return Ok(());
    }

    let data_dir = natter_infra::config::resolve_data_dir();
    let config = natter_infra::config::load_config(&data_dir).await;

    match cli.command {
        Commands::Chat {
            profile,
            endpoint,
            label,
            tone,
            name,
        } => {
            let overrides = cli::chat::SessionOverrides {
                endpoint,
                label,
                tone,
                name,
            };
            cli::chat::run_chat_loop(&config, profile.as_deref(), overrides).await?;
        }

        Commands::Profiles => {
            cli::profiles::list_profiles(&config, cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
