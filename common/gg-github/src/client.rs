//! GitHub client implementation

use crate::credentials::{Credential, CredentialResolver};
use crate::error::{ApiError, GitHubError, Result};
use crate::pagination::{PAGE_SIZE_MAX, Paginator};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::sync::OnceLock;

/// Public GitHub REST API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default User-Agent header for API requests
pub const DEFAULT_USER_AGENT: &str = concat!("gg/", env!("CARGO_PKG_VERSION"));

/// Connection settings shared by every request the client makes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// API root without a trailing slash, e.g. `https://ghe.example.com/api/v3`
    pub api_url: String,
    pub user_agent: String,
    pub paginator: Paginator,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            paginator: Paginator::new(PAGE_SIZE_MAX),
        }
    }
}

/// Authenticated GitHub API client
///
/// Query operations live in sibling modules as `impl GitHubClient` blocks:
/// `repositories.rs` for repository and workflow listings, `pull_requests.rs`
/// for pull requests, statuses and author search.
#[derive(Debug)]
pub struct GitHubClient {
    pub(crate) http: reqwest::Client,
    pub(crate) credential: Credential,
    pub(crate) settings: ClientSettings,
}

impl GitHubClient {
    /// Create a client for `settings.api_url` authenticated with `credential`
    ///
    /// # Errors
    /// Returns [`GitHubError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new(mut settings: ClientSettings, credential: Credential) -> Result<Self> {
        settings.api_url = settings.api_url.trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static("2022-11-28"),
        );

        let http = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(GitHubError::ClientBuild)?;

        tracing::debug!(api_url = %settings.api_url, "constructed GitHub client");

        Ok(Self {
            http,
            credential,
            settings,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.settings.api_url
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn paginator(&self) -> Paginator {
        self.settings.paginator
    }

    /// GET `path` (relative to the API root) and decode the JSON body
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> std::result::Result<T, ApiError> {
        let url = format!("{}{}", self.settings.api_url, path);
        tracing::debug!(%url, ?query, "GET");

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.credential.expose())
            .query(query)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%url, status = status.as_u16(), "request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(ApiError::Decode)
    }
}

/// Builds the [`GitHubClient`] on first use and hands out the same instance
/// afterwards. Credentials are resolved exactly once, on the first successful
/// call; a failed attempt leaves the provider empty.
#[derive(Debug)]
pub struct ClientProvider {
    settings: ClientSettings,
    resolver: CredentialResolver,
    client: OnceLock<GitHubClient>,
}

impl ClientProvider {
    pub fn new(settings: ClientSettings, resolver: CredentialResolver) -> Self {
        Self {
            settings,
            resolver,
            client: OnceLock::new(),
        }
    }

    /// Name of the environment variable credentials are read from
    pub fn token_var(&self) -> &str {
        self.resolver.var()
    }

    /// Return the shared client, constructing it on the first call
    ///
    /// # Errors
    /// Returns [`GitHubError::MissingCredential`] when no token can be found,
    /// or [`GitHubError::ClientBuild`] if the HTTP client cannot be built.
    pub fn get(&self) -> Result<&GitHubClient> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }

        let credential = self.resolver.resolve()?;
        let client = GitHubClient::new(self.settings.clone(), credential)?;
        Ok(self.client.get_or_init(|| client))
    }
}
