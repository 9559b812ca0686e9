//! Base types and traits for the command pattern

use crate::config::Config;
use crate::output;
use anyhow::Result;
use colored::*;
use gg_github::{ClientProvider, GitHubClient, GitHubError};
use serde::Serialize;

/// Context passed to all commands containing shared configuration and the API client
pub struct CommandContext {
    /// The loaded configuration
    pub config: Config,
    /// Builds the authenticated client the first time a command needs it
    pub provider: ClientProvider,
}

impl CommandContext {
    pub fn new(config: Config) -> Self {
        let provider = config.client_provider();
        Self { config, provider }
    }

    /// The shared API client, resolving credentials on first use
    pub fn client(&self) -> gg_github::Result<&GitHubClient> {
        self.provider.get()
    }

    /// Size requested on the command line, or the configured default
    pub fn size_or_default(&self, size: Option<u32>) -> u32 {
        size.unwrap_or(self.config.default_size)
    }

    /// Print a failed query in place of its output
    ///
    /// Query failures are reported and the command still succeeds; only
    /// usage and configuration problems exit non-zero.
    pub fn report(&self, err: &GitHubError) -> Result<()> {
        tracing::debug!(error = ?err, "query failed");
        println!(
            "{}",
            output::format_error(err, self.provider.token_var()).red()
        );
        Ok(())
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
