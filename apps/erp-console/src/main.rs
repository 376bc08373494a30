use std::path::PathBuf;

use clap::Parser;
use erp_core::config::core_config::AppConfig;
use erp_console::ConsoleConfig;
use erp_console::command::Command;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// additional config files, merged over `config/config.yml`
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<Vec<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config_files = cli.config.unwrap_or_default();
    config_files.insert(0, "config/config.yml".into());

    let app_config: AppConfig<ConsoleConfig> = AppConfig::from_files(&config_files)?;

    initialize_tracing(&app_config.app)?;
    tracing::debug!(files = ?config_files, base_url = %app_config.core.api.base_url, "Configuration loaded");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(cli.command.run(&app_config.core))
}

fn initialize_tracing(config: &ConsoleConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().or_else(|_| {
        tracing_subscriber::EnvFilter::try_new(config.trace_level.as_deref().unwrap_or("info"))
    })?;

    let tracing_layer = tracing_subscriber::registry().with(filter);

    if config.trace_json.unwrap_or_default() {
        tracing_layer
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_layer
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    };

    Ok(())
}
