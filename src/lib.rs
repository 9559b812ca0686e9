//! gg - A terminal view of GitHub repositories, workflows and pull requests

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod logging;
pub mod output;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::Config;
