//! Configuration file loading

use super::validation;
use crate::constants;
use anyhow::{Context, Result};
use gg_github::{ClientProvider, ClientSettings, CredentialResolver, Paginator};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// REST API root, e.g. `https://ghe.example.com/api/v3` for GitHub Enterprise
    pub api_url: String,
    pub user_agent: String,
    /// Environment variable holding the access token
    pub token_env: String,
    /// `KEY=VALUE` file consulted when `token_env` is not set
    pub dotenv_file: PathBuf,
    /// Results fetched when `--size` is omitted
    pub default_size: u32,
    pub page_size_max: u32,
    /// Stop paging once a page comes back short instead of paging on until
    /// the requested size is reached
    pub stop_on_short_page: bool,
}

impl Config {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            api_url: constants::github::API_BASE.to_string(),
            user_agent: constants::github::DEFAULT_USER_AGENT.to_string(),
            token_env: constants::github::TOKEN_ENV.to_string(),
            dotenv_file: PathBuf::from(constants::github::DOTENV_FILE),
            default_size: constants::query::DEFAULT_SIZE,
            page_size_max: constants::github::PAGE_SIZE_MAX,
            stop_on_short_page: false,
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;

        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load the configuration for a command line invocation
    ///
    /// An explicit path must exist. Without one, `gg.yaml` in the working
    /// directory is used when present and defaults otherwise.
    pub fn load_config(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(constants::config::DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::new())
                }
            }
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self).map_err(validation::validation_errors_to_anyhow)
    }

    /// Connection settings for the API client
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            api_url: self.api_url.clone(),
            user_agent: self.user_agent.clone(),
            paginator: Paginator::new(self.page_size_max)
                .stop_on_short_page(self.stop_on_short_page),
        }
    }

    pub fn credential_resolver(&self) -> CredentialResolver {
        CredentialResolver::new(&self.token_env, &self.dotenv_file)
    }

    /// Provider that builds the API client on first use
    pub fn client_provider(&self) -> ClientProvider {
        ClientProvider::new(self.client_settings(), self.credential_resolver())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
