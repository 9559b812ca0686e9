//! Access token resolution from the environment or a local dotfile

use crate::error::{GitHubError, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable holding the access token unless configured otherwise
pub const DEFAULT_TOKEN_VAR: &str = "GITHUB_ACCESS_TOKEN";

/// Dotfile consulted when the variable is not set
pub const DEFAULT_DOTENV_FILE: &str = ".env";

/// Bearer token used to authenticate API requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Looks up the access token, first in the process environment and then in a
/// `KEY=VALUE` dotfile. Values already present in the environment win.
#[derive(Debug, Clone)]
pub struct CredentialResolver {
    var: String,
    dotenv_path: PathBuf,
}

impl CredentialResolver {
    pub fn new(var: impl Into<String>, dotenv_path: impl Into<PathBuf>) -> Self {
        Self {
            var: var.into(),
            dotenv_path: dotenv_path.into(),
        }
    }

    /// Name of the variable this resolver reads
    pub fn var(&self) -> &str {
        &self.var
    }

    pub fn dotenv_path(&self) -> &Path {
        &self.dotenv_path
    }

    /// Resolve the token: a non-empty environment variable first, then the
    /// same key in the dotfile
    ///
    /// # Errors
    /// Returns [`GitHubError::MissingCredential`] when neither source has a
    /// non-empty value. An absent or unreadable dotfile counts as no value.
    pub fn resolve(&self) -> Result<Credential> {
        if let Some(token) = std::env::var(&self.var).ok().filter(|t| !t.is_empty()) {
            tracing::debug!(var = %self.var, "using access token from environment");
            return Ok(Credential::new(token));
        }

        if let Some(token) = self
            .read_dotenv()
            .remove(&self.var)
            .filter(|t| !t.is_empty())
        {
            tracing::debug!(
                var = %self.var,
                path = %self.dotenv_path.display(),
                "using access token from dotfile"
            );
            return Ok(Credential::new(token));
        }

        Err(GitHubError::MissingCredential {
            var: self.var.clone(),
        })
    }

    fn read_dotenv(&self) -> HashMap<String, String> {
        match std::fs::read(&self.dotenv_path) {
            Ok(bytes) => parse_dotenv(&String::from_utf8_lossy(&bytes)),
            Err(err) => {
                tracing::debug!(
                    path = %self.dotenv_path.display(),
                    error = %err,
                    "dotfile not loaded"
                );
                HashMap::new()
            }
        }
    }
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_VAR, DEFAULT_DOTENV_FILE)
    }
}

/// Parse `.env` style content without touching the process environment
///
/// Lines that do not parse are skipped. Later keys overwrite earlier ones.
pub fn parse_dotenv(content: &str) -> HashMap<String, String> {
    dotenvy::from_read_iter(content.as_bytes())
        .filter_map(|entry| match entry {
            Ok(pair) => Some(pair),
            Err(err) => {
                tracing::debug!(error = %err, "skipping malformed dotfile line");
                None
            }
        })
        .collect()
}
