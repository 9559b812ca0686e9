//! Pull request command implementations

use super::{Command, CommandContext, print_json, print_lines};
use crate::output;
use anyhow::Result;
use async_trait::async_trait;
use gg_github::{Issue, PrWithStatus, PullRequest};

/// List pull requests opened by a user across all repositories
pub struct PrAuthorCommand {
    pub username: String,
    pub size: Option<u32>,
    /// Output in JSON format
    pub json: bool,
}

impl PrAuthorCommand {
    pub async fn fetch(&self, context: &CommandContext) -> gg_github::Result<Vec<Issue>> {
        let size = context.size_or_default(self.size);
        context
            .client()?
            .pull_requests_by_author(&self.username, size)
            .await
    }
}

#[async_trait]
impl Command for PrAuthorCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let pull_requests = match self.fetch(context).await {
            Ok(pull_requests) => pull_requests,
            Err(err) => return context.report(&err),
        };

        if self.json {
            return print_json(&pull_requests);
        }

        print_lines(&output::format_listed(&pull_requests));
        Ok(())
    }
}

/// Open pull requests of a repository, with or without their commit status
#[derive(Debug, PartialEq)]
pub enum PrRepoListing {
    Plain(Vec<PullRequest>),
    WithStatus(Vec<PrWithStatus>),
}

/// List the open pull requests of a repository
pub struct PrRepoCommand {
    pub repo_path: String,
    /// Look up the combined status of each pull request's head commit
    pub status: bool,
    pub size: Option<u32>,
    /// Output in JSON format
    pub json: bool,
}

impl PrRepoCommand {
    pub async fn fetch(&self, context: &CommandContext) -> gg_github::Result<PrRepoListing> {
        let client = context.client()?;
        let size = context.size_or_default(self.size);

        if self.status {
            client
                .pull_requests_with_status(&self.repo_path, size)
                .await
                .map(PrRepoListing::WithStatus)
        } else {
            client
                .pull_requests(&self.repo_path, size)
                .await
                .map(PrRepoListing::Plain)
        }
    }
}

#[async_trait]
impl Command for PrRepoCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let listing = match self.fetch(context).await {
            Ok(listing) => listing,
            Err(err) => return context.report(&err),
        };

        match (&listing, self.json) {
            (PrRepoListing::Plain(pull_requests), true) => print_json(pull_requests)?,
            (PrRepoListing::WithStatus(pull_requests), true) => print_json(pull_requests)?,
            (PrRepoListing::Plain(pull_requests), false) => {
                print_lines(&output::format_listed(pull_requests))
            }
            (PrRepoListing::WithStatus(pull_requests), false) => {
                print_lines(&output::format_with_status(pull_requests))
            }
        }

        Ok(())
    }
}
