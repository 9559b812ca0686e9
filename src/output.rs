//! Line formatting for command output
//!
//! Formatters are pure: they return the lines a command prints so they can be
//! asserted on without capturing stdout.

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use gg_github::{GitHubError, Issue, PrWithStatus, PullRequest, Repository, Workflows};

pub const OWNED_HEADING: &str = "***OWNED REPOS***";
pub const FOLLOWED_HEADING: &str = "***FOLLOWED REPOS***";
pub const NO_WORKFLOWS: &str = "The repository does not have workflows.";

/// A record listed as `title created_at`
pub trait Listed {
    fn title(&self) -> &str;
    fn created_at(&self) -> Option<DateTime<Utc>>;
}

impl Listed for PullRequest {
    fn title(&self) -> &str {
        &self.title
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl Listed for Issue {
    fn title(&self) -> &str {
        &self.title
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

pub fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(timestamp) => timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "unknown".to_string(),
    }
}

pub fn format_listed<T: Listed>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .map(|item| format!("{} {}", item.title(), format_timestamp(item.created_at())))
        .collect()
}

/// Color a combined-status state by outcome
pub fn colorize_status(status: &str) -> ColoredString {
    match status {
        "success" => status.green(),
        "pending" => status.yellow(),
        "failure" | "error" => status.red(),
        _ => status.normal(),
    }
}

pub fn format_with_status(pull_requests: &[PrWithStatus]) -> Vec<String> {
    pull_requests
        .iter()
        .map(|pr| format!("{}: {}", pr.pull_request.title, colorize_status(&pr.status)))
        .collect()
}

/// A blank line, the heading, then one repository name per line
pub fn format_repository_section(heading: &str, repositories: &[Repository]) -> Vec<String> {
    let mut lines = Vec::with_capacity(repositories.len() + 2);
    lines.push(String::new());
    lines.push(heading.bold().to_string());
    lines.extend(repositories.iter().map(|repo| repo.name.clone()));
    lines
}

pub fn format_workflows(workflows: &Workflows) -> Vec<String> {
    if workflows.workflows.is_empty() {
        return vec![NO_WORKFLOWS.to_string()];
    }
    workflows
        .workflows
        .iter()
        .map(|workflow| format!("{} (#{})", workflow.name, workflow.id))
        .collect()
}

/// The single line printed when a query fails
///
/// Upstream failures get a hint naming what to check, including the token
/// variable the credential was read from.
pub fn format_error(err: &GitHubError, token_var: &str) -> String {
    match err {
        GitHubError::Upstream { target, .. } => {
            format!("{}, {} and {} is set and valid", err, target.hint(), token_var)
        }
        _ => err.to_string(),
    }
}
