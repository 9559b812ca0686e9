//! `owner/name` repository path parsing

use crate::error::{GitHubError, Result};
use std::fmt;

/// A repository identified by its owner and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPath {
    pub owner: String,
    pub name: String,
}

impl RepoPath {
    /// Parse an `owner/name` string.
    ///
    /// Succeeds only when splitting on `/` yields exactly two non-empty
    /// segments. Segments are kept verbatim, without trimming or case folding.
    ///
    /// # Errors
    /// Returns [`GitHubError::InvalidRepoPath`] carrying the original input.
    pub fn parse(path: &str) -> Result<Self> {
        let invalid = || GitHubError::InvalidRepoPath {
            path: path.to_string(),
        };

        let mut segments = path.split('/');
        let (Some(owner), Some(name), None) = (segments.next(), segments.next(), segments.next())
        else {
            return Err(invalid());
        };

        if owner.is_empty() || name.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
