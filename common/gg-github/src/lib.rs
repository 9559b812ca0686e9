//! GitHub REST API client library
//!
//! Read-only queries behind the `gg` command line tool: repository, workflow
//! and pull request listings, combined commit statuses and pull request search.
//!
//! ## Modules
//!
//! - [`client`]: authenticated client and its once-only provider
//! - [`credentials`]: access token lookup in the environment and `.env` files
//! - [`pagination`]: fetch-until-size-satisfied paging
//! - [`repo_path`]: `owner/name` parsing
//! - [`repositories`]: owned/followed repositories and workflows
//! - [`pull_requests`]: pull requests, statuses and author search

pub mod client;
pub mod credentials;
pub mod error;
pub mod pagination;
pub mod pull_requests;
pub mod repo_path;
pub mod repositories;
pub mod types;

// Re-export public API
pub use client::{
    ClientProvider, ClientSettings, DEFAULT_API_URL, DEFAULT_USER_AGENT, GitHubClient,
};
pub use credentials::{Credential, CredentialResolver, DEFAULT_DOTENV_FILE, DEFAULT_TOKEN_VAR};
pub use error::{ApiError, GitHubError, QueryTarget, Result};
pub use pagination::{PAGE_SIZE_MAX, PageRequest, Paginator};
pub use repo_path::RepoPath;
pub use types::{
    CombinedStatus, CommitRef, Issue, PrWithStatus, PullRequest, Repository, SearchResults, User,
    Workflow, Workflows,
};
