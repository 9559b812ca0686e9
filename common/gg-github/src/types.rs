//! Records returned by the REST API
//!
//! Only the fields the CLI displays or needs for follow-up requests are kept;
//! everything else in the JSON payloads is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub private: bool,
    pub fork: bool,
    pub language: Option<String>,
    pub stargazers_count: u64,
}

/// Branch tip a pull request points at
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitRef {
    #[serde(rename = "ref")]
    pub ref_name: Option<String>,
    pub sha: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub html_url: String,
    pub user: Option<User>,
    pub created_at: Option<DateTime<Utc>>,
    pub head: Option<CommitRef>,
}

impl PullRequest {
    /// SHA of the head commit, if the payload carried one
    pub fn head_sha(&self) -> Option<&str> {
        self.head
            .as_ref()
            .and_then(|head| head.sha.as_deref())
            .filter(|sha| !sha.is_empty())
    }
}

/// A pull request paired with the combined status of its head commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrWithStatus {
    pub pull_request: PullRequest,
    pub status: String,
}

/// Issue-shaped record returned by the search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub html_url: String,
    pub user: Option<User>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults<T> {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workflow {
    pub id: u64,
    pub name: String,
    pub path: String,
    pub state: String,
    pub html_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workflows {
    pub total_count: u64,
    pub workflows: Vec<Workflow>,
}

/// Aggregate of every status reported against a commit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombinedStatus {
    pub state: String,
    pub sha: String,
    pub total_count: u64,
}
