#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod impls;
pub mod seed;

mod cli;
pub use cli::{Cli, Commands};

mod config;
pub use config::AppConfig;
