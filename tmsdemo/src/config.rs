//! Layered settings for the server and its database.

use crate::Cli;
use anyhow::{Context as _, bail};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tms_axum::config::AxumConfig;
use tms_sqlite::config::SqliteConfig;

/// Everything the binary can be configured with.
///
/// Each key is looked up in the environment first, then in the TOML file
/// named on the command line, and falls back to the built-in default.
/// Environment variables are named `APP_<SECTION>__<KEY>`:
///
/// ```bash
/// export APP_SERVER__BIND_ADDRESS="127.0.0.1:3000"
/// export APP_SERVER__PAGE_LIMIT=50
/// export APP_DATABASE__DATABASE_PATH="/var/lib/tenders.db"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// The `[server]` section
    #[serde(default)]
    pub server: AxumConfig,

    /// The `[database]` section
    #[serde(default)]
    pub database: SqliteConfig,
}

impl AppConfig {
    /// Merge the defaults, the config file and the environment.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(path) = &cli.config {
            if !path.exists() {
                bail!("config file {} does not exist", path.display());
            }
            builder = builder.add_source(File::from(path.as_path()));
        }

        builder
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .context("invalid configuration")
    }
}
