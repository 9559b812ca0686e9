//! Central constants for the gg application

/// Default values for GitHub operations
pub mod github {
    /// GitHub API base URL
    pub const API_BASE: &str = gg_github::DEFAULT_API_URL;

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = gg_github::DEFAULT_USER_AGENT;

    /// Environment variable holding the access token
    pub const TOKEN_ENV: &str = gg_github::DEFAULT_TOKEN_VAR;

    /// Dotfile read when the token variable is not set
    pub const DOTENV_FILE: &str = gg_github::DEFAULT_DOTENV_FILE;

    /// Largest page the API serves
    pub const PAGE_SIZE_MAX: u32 = gg_github::PAGE_SIZE_MAX;
}

/// Default values for listing commands
pub mod query {
    /// Number of results fetched when `--size` is not given
    pub const DEFAULT_SIZE: u32 = 30;
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "gg.yaml";
}

/// Diagnostic logging
pub mod logging {
    /// Environment variable holding a tracing filter directive
    pub const LOG_ENV: &str = "GG_LOG";

    /// Filter used when neither `--verbose` nor `GG_LOG` is set
    pub const DEFAULT_LEVEL: &str = "warn";
}
