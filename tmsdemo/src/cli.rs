//! Command-line interface definition and parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the tender management server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, env = "APP_CONFIG")]
    pub config: Option<PathBuf>,

    /// What to do. Defaults to `serve`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// The actions the binary can take
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// A JSON directory file to load before listening
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Load a directory file into the database and exit
    Seed {
        /// The JSON directory file to load
        file: PathBuf,
    },
    /// Write the OpenAPI document and exit
    Schema {
        /// Where to write the document
        file: PathBuf,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Serve { seed: None }
    }
}

impl Cli {
    /// Parse command-line arguments.
    pub fn import() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
