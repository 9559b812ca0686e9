//! Repository and workflow listings

use crate::client::GitHubClient;
use crate::error::{GitHubError, QueryTarget, Result};
use crate::repo_path::RepoPath;
use crate::types::{Repository, Workflows};

impl GitHubClient {
    /// List up to `size` repositories owned by `username`
    ///
    /// # Errors
    /// Any failing page aborts the listing with [`GitHubError::Upstream`].
    pub async fn owned_repositories(&self, username: &str, size: u32) -> Result<Vec<Repository>> {
        let path = format!("/users/{username}/repos");
        self.paginator()
            .fetch_up_to(size, |page| {
                let path = path.as_str();
                async move { self.get_json::<Vec<Repository>>(path, &page.query()).await }
            })
            .await
            .map_err(GitHubError::upstream(QueryTarget::OwnedRepositories {
                username: username.to_string(),
            }))
    }

    /// List up to `size` repositories `username` is watching
    ///
    /// # Errors
    /// Any failing page aborts the listing with [`GitHubError::Upstream`].
    pub async fn followed_repositories(
        &self,
        username: &str,
        size: u32,
    ) -> Result<Vec<Repository>> {
        let path = format!("/users/{username}/subscriptions");
        self.paginator()
            .fetch_up_to(size, |page| {
                let path = path.as_str();
                async move { self.get_json::<Vec<Repository>>(path, &page.query()).await }
            })
            .await
            .map_err(GitHubError::upstream(QueryTarget::FollowedRepositories {
                username: username.to_string(),
            }))
    }

    /// List the workflow definitions of `repo_path` (`owner/name`)
    ///
    /// Workflow counts are small, so this is a single unpaged request.
    ///
    /// # Errors
    /// Returns [`GitHubError::InvalidRepoPath`] before any request when the
    /// path is malformed, [`GitHubError::Upstream`] when the request fails.
    pub async fn workflows(&self, repo_path: &str) -> Result<Workflows> {
        let repo = RepoPath::parse(repo_path)?;
        let path = format!("/repos/{}/{}/actions/workflows", repo.owner, repo.name);

        self.get_json(&path, &[])
            .await
            .map_err(GitHubError::upstream(QueryTarget::Workflows {
                repo: repo_path.to_string(),
            }))
    }
}
