//! Repository command implementations

use super::{Command, CommandContext, print_json, print_lines};
use crate::output;
use anyhow::Result;
use async_trait::async_trait;
use gg_github::{GitHubClient, Repository, Workflows};
use serde::Serialize;

/// Which repository lists `repo list` shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoScope {
    Both,
    Owned,
    Followed,
}

impl RepoScope {
    /// `--owned` and `--followed` are exclusive; neither means both
    pub fn from_flags(owned: bool, followed: bool) -> Self {
        match (owned, followed) {
            (true, false) => RepoScope::Owned,
            (false, true) => RepoScope::Followed,
            _ => RepoScope::Both,
        }
    }

    pub fn sections(self) -> &'static [RepoSection] {
        match self {
            RepoScope::Both => &[RepoSection::Owned, RepoSection::Followed],
            RepoScope::Owned => &[RepoSection::Owned],
            RepoScope::Followed => &[RepoSection::Followed],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoSection {
    Owned,
    Followed,
}

impl RepoSection {
    pub fn heading(self) -> &'static str {
        match self {
            RepoSection::Owned => output::OWNED_HEADING,
            RepoSection::Followed => output::FOLLOWED_HEADING,
        }
    }

    async fn fetch(
        self,
        client: &GitHubClient,
        username: &str,
        size: u32,
    ) -> gg_github::Result<Vec<Repository>> {
        match self {
            RepoSection::Owned => client.owned_repositories(username, size).await,
            RepoSection::Followed => client.followed_repositories(username, size).await,
        }
    }
}

/// Repositories fetched by `repo list`, keyed by section
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct RepoListing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned: Option<Vec<Repository>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followed: Option<Vec<Repository>>,
}

/// List the repositories a user owns and/or watches
pub struct RepoListCommand {
    pub username: String,
    pub scope: RepoScope,
    pub size: Option<u32>,
    /// Output in JSON format
    pub json: bool,
}

impl RepoListCommand {
    /// Fetch every section in scope, failing on the first section that fails
    pub async fn fetch(&self, context: &CommandContext) -> gg_github::Result<RepoListing> {
        let client = context.client()?;
        let size = context.size_or_default(self.size);

        let mut listing = RepoListing::default();
        for &section in self.scope.sections() {
            let repositories = section.fetch(client, &self.username, size).await?;
            match section {
                RepoSection::Owned => listing.owned = Some(repositories),
                RepoSection::Followed => listing.followed = Some(repositories),
            }
        }
        Ok(listing)
    }
}

#[async_trait]
impl Command for RepoListCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        if self.json {
            return match self.fetch(context).await {
                Ok(listing) => print_json(&listing),
                Err(err) => context.report(&err),
            };
        }

        let client = match context.client() {
            Ok(client) => client,
            Err(err) => return context.report(&err),
        };
        let size = context.size_or_default(self.size);

        // Each section prints as soon as it arrives; a failure stops the rest.
        for &section in self.scope.sections() {
            match section.fetch(client, &self.username, size).await {
                Ok(repositories) => print_lines(&output::format_repository_section(
                    section.heading(),
                    &repositories,
                )),
                Err(err) => return context.report(&err),
            }
        }

        Ok(())
    }
}

/// List the workflows defined in a repository
pub struct RepoWorkflowCommand {
    pub repo_path: String,
    /// Output in JSON format
    pub json: bool,
}

impl RepoWorkflowCommand {
    pub async fn fetch(&self, context: &CommandContext) -> gg_github::Result<Workflows> {
        context.client()?.workflows(&self.repo_path).await
    }
}

#[async_trait]
impl Command for RepoWorkflowCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let workflows = match self.fetch(context).await {
            Ok(workflows) => workflows,
            Err(err) => return context.report(&err),
        };

        if self.json {
            return print_json(&workflows.workflows);
        }

        print_lines(&output::format_workflows(&workflows));
        Ok(())
    }
}
