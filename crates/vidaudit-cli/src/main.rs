mod videos;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vidaudit_core::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "vidaudit")]
#[command(about = "Report which catalog products carry video files, per variant")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Write the per-variant product video report (default when no command is given)
    Videos {
        /// Report destination; overrides `VIDAUDIT_OUTPUT_PATH`
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Database utilities
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Check that the catalog database is reachable
    Ping,
}

/// `--output` wins over `VIDAUDIT_OUTPUT_PATH`, which already carries the default.
fn resolve_output_path(cli_output: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    cli_output.unwrap_or_else(|| config.output_path.clone())
}

fn done_message(output_path: &Path) -> String {
    format!("Done writing to {}", output_path.display())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = vidaudit_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let pool_config = vidaudit_db::PoolConfig::from_app_config(&config);
    let pool = vidaudit_db::connect_pool(&config.database_url, pool_config)
        .await
        .context("failed to connect to the catalog database")?;

    match cli.command.unwrap_or(Commands::Videos { output: None }) {
        Commands::Videos { output } => {
            let output_path = resolve_output_path(output, &config);
            videos::run_videos_report(&pool, &output_path).await?;
            println!("{}", done_message(&output_path));
        }
        Commands::Db {
            command: DbCommands::Ping,
        } => {
            vidaudit_db::health_check(&pool).await?;
            println!("database reachable");
        }
    }

    pool.close().await;
    Ok(())
}
