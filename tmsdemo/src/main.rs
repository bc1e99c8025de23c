use std::fs::File;

use tms_axum::{document, start_server};
use tms_core::models::DateTime;
use tms_sqlite::Db;
use tmsdemo::{AppConfig, Cli, Commands, impls::DemoApp, seed::Directory};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Every crate in the workspace reports through `tracing`; print those
    // events to stdout, filtered by RUST_LOG.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;
    let AppConfig { server, database } = AppConfig::load(&cli)?;

    match cli.command.unwrap_or_default() {
        Commands::Schema { file } => {
            serde_json::to_writer_pretty(File::create(file)?, &document::<DemoApp>())?;
        }
        Commands::Seed { file } => {
            let directory = Directory::read(&file)?;
            let db = Db::open(&database).await?;
            directory.load(&db, DateTime::now()).await?;
        }
        Commands::Serve { seed } => {
            let db = Db::open(&database).await?;
            if let Some(file) = seed {
                Directory::read(&file)?.load(&db, DateTime::now()).await?;
            }
            start_server(server, DemoApp { db }).await?;
        }
    }

    Ok(())
}
