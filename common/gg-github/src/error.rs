//! Error types for GitHub queries

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitHubError>;

/// Errors surfaced by credential resolution, input validation and API calls
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error(
        "could not find {var}. Make sure token is set in env or add it to a .env file in your project root"
    )]
    MissingCredential { var: String },

    #[error("invalid repo path '{path}'")]
    InvalidRepoPath { path: String },

    #[error("invalid pull request")]
    InvalidPullRequest,

    #[error("{target}")]
    Upstream {
        target: QueryTarget,
        #[source]
        source: ApiError,
    },

    #[error("failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),
}

impl GitHubError {
    pub(crate) fn upstream(target: QueryTarget) -> impl FnOnce(ApiError) -> Self {
        move |source| GitHubError::Upstream { target, source }
    }
}

/// Failure talking to the REST API, before it is attributed to a query
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("GitHub API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request to GitHub failed")]
    Transport(#[source] reqwest::Error),

    #[error("could not decode GitHub response")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// HTTP status code, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) | ApiError::Decode(err) => err.status().map(|s| s.as_u16()),
        }
    }
}

/// The entity a query was trying to retrieve when it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryTarget {
    OwnedRepositories { username: String },
    FollowedRepositories { username: String },
    Workflows { repo: String },
    PullRequests { repo: String },
    PullRequestStatus { repo: String },
    AuthorPullRequests { author: String },
}

impl QueryTarget {
    /// What the user should double check, phrased to follow the error message
    pub fn hint(&self) -> &'static str {
        match self {
            QueryTarget::OwnedRepositories { .. }
            | QueryTarget::FollowedRepositories { .. }
            | QueryTarget::AuthorPullRequests { .. } => "make sure the username is valid",
            QueryTarget::Workflows { .. }
            | QueryTarget::PullRequests { .. }
            | QueryTarget::PullRequestStatus { .. } => "make sure the repository exists",
        }
    }
}

impl fmt::Display for QueryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryTarget::OwnedRepositories { username } => {
                write!(f, "could not retrieve repositories for user '{username}'")
            }
            QueryTarget::FollowedRepositories { username } => {
                write!(
                    f,
                    "could not retrieve followed repositories for user '{username}'"
                )
            }
            QueryTarget::Workflows { repo } => {
                write!(f, "could not retrieve workflows for repo '{repo}'")
            }
            QueryTarget::PullRequests { repo } => {
                write!(f, "could not retrieve pull requests for repo '{repo}'")
            }
            QueryTarget::PullRequestStatus { repo } => {
                write!(
                    f,
                    "could not retrieve status for pull request in '{repo}'"
                )
            }
            QueryTarget::AuthorPullRequests { author } => {
                write!(f, "could not retrieve pull requests for author '{author}'")
            }
        }
    }
}
