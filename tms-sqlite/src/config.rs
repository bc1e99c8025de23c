//! Where the database lives.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location and creation policy of the SQLite database.
///
/// Without a `database_path` the database is held in memory and lost on
/// shutdown, which suits tests and demos:
///
/// ```
/// use tms_sqlite::config::SqliteConfig;
///
/// let scratch = SqliteConfig::default();
/// assert_eq!(scratch.filename(), ":memory:");
///
/// let durable = SqliteConfig {
///     database_path: Some("tenders.db".into()),
///     create_if_missing: false,
/// };
/// assert_eq!(durable.filename(), "tenders.db");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SqliteConfig {
    /// The database file. `None` keeps the database in memory.
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Create the file on open if it is missing, instead of failing
    #[serde(default = "create_by_default")]
    pub create_if_missing: bool,
}

impl SqliteConfig {
    /// The filename handed to SQLite
    pub fn filename(&self) -> String {
        match &self.database_path {
            Some(path) => path.to_string_lossy().into_owned(),
            None => ":memory:".to_owned(),
        }
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            create_if_missing: create_by_default(),
        }
    }
}

fn create_by_default() -> bool {
    true
}
