//! Pull request listings, combined statuses and author search

use crate::client::GitHubClient;
use crate::error::{GitHubError, QueryTarget, Result};
use crate::repo_path::RepoPath;
use crate::types::{CombinedStatus, Issue, PrWithStatus, PullRequest, SearchResults};

impl GitHubClient {
    /// List up to `size` open pull requests of `repo_path`, newest first
    ///
    /// # Errors
    /// Returns [`GitHubError::InvalidRepoPath`] before any request when the
    /// path is malformed, [`GitHubError::Upstream`] when any page fails.
    pub async fn pull_requests(&self, repo_path: &str, size: u32) -> Result<Vec<PullRequest>> {
        let repo = RepoPath::parse(repo_path)?;
        let path = format!("/repos/{}/{}/pulls", repo.owner, repo.name);

        self.paginator()
            .fetch_up_to(size, |page| {
                let path = path.as_str();
                async move {
                    let [page, per_page] = page.query();
                    let query = [
                        ("state", "open".to_string()),
                        ("sort", "created".to_string()),
                        ("direction", "desc".to_string()),
                        page,
                        per_page,
                    ];
                    self.get_json::<Vec<PullRequest>>(path, &query).await
                }
            })
            .await
            .map_err(GitHubError::upstream(QueryTarget::PullRequests {
                repo: repo_path.to_string(),
            }))
    }

    /// Combined status state (`success`, `pending`, `failure`, ...) of the
    /// head commit of `pull_request`
    ///
    /// # Errors
    /// Returns [`GitHubError::InvalidPullRequest`] when there is no pull
    /// request or it carries no head SHA, and [`GitHubError::InvalidRepoPath`]
    /// for a malformed path; neither issues a request.
    pub async fn pull_request_status(
        &self,
        repo_path: &str,
        pull_request: Option<&PullRequest>,
    ) -> Result<String> {
        let pull_request = pull_request.ok_or(GitHubError::InvalidPullRequest)?;
        let repo = RepoPath::parse(repo_path)?;
        let sha = pull_request
            .head_sha()
            .ok_or(GitHubError::InvalidPullRequest)?;

        let path = format!("/repos/{}/{}/commits/{sha}/status", repo.owner, repo.name);
        let status: CombinedStatus = self.get_json(&path, &[]).await.map_err(
            GitHubError::upstream(QueryTarget::PullRequestStatus {
                repo: repo_path.to_string(),
            }),
        )?;

        Ok(status.state)
    }

    /// Open pull requests of `repo_path`, each paired with its combined status
    ///
    /// Status lookups run one after another. The first failing lookup fails
    /// the whole call.
    pub async fn pull_requests_with_status(
        &self,
        repo_path: &str,
        size: u32,
    ) -> Result<Vec<PrWithStatus>> {
        let pull_requests = self.pull_requests(repo_path, size).await?;

        let mut enriched = Vec::with_capacity(pull_requests.len());
        for pull_request in pull_requests {
            let status = self
                .pull_request_status(repo_path, Some(&pull_request))
                .await?;
            enriched.push(PrWithStatus {
                pull_request,
                status,
            });
        }

        Ok(enriched)
    }

    /// Search up to `size` pull requests opened by `author`, newest first
    ///
    /// # Errors
    /// Any failing page aborts the search with [`GitHubError::Upstream`].
    pub async fn pull_requests_by_author(&self, author: &str, size: u32) -> Result<Vec<Issue>> {
        let q = format!("is:pr author:{author}");

        self.paginator()
            .fetch_up_to(size, |page| {
                let q = q.clone();
                async move {
                    let [page, per_page] = page.query();
                    let query = [
                        ("q", q),
                        ("sort", "created".to_string()),
                        ("order", "desc".to_string()),
                        page,
                        per_page,
                    ];
                    self.get_json::<SearchResults<Issue>>("/search/issues", &query)
                        .await
                        .map(|results| results.items)
                }
            })
            .await
            .map_err(GitHubError::upstream(QueryTarget::AuthorPullRequests {
                author: author.to_string(),
            }))
    }
}
