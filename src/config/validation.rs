//! Configuration validation utilities

use super::Config;
use crate::constants;
use anyhow::anyhow;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// API URL is empty
    EmptyApiUrl,
    /// API URL does not use http(s)
    InvalidApiUrl(String),
    /// User agent is empty
    EmptyUserAgent,
    /// Token variable name is empty or contains `=`
    InvalidTokenEnv(String),
    /// Page size outside what the API accepts
    PageSizeOutOfRange(u32),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyApiUrl => write!(f, "api_url cannot be empty"),
            ValidationError::InvalidApiUrl(url) => {
                write!(f, "api_url must start with http:// or https://: '{}'", url)
            }
            ValidationError::EmptyUserAgent => write!(f, "user_agent cannot be empty"),
            ValidationError::InvalidTokenEnv(name) => {
                write!(f, "token_env is not a valid variable name: '{}'", name)
            }
            ValidationError::PageSizeOutOfRange(size) => write!(
                f,
                "page_size_max must be between 1 and {}, got {}",
                constants::github::PAGE_SIZE_MAX,
                size
            ),
        }
    }
}

/// Validates a complete configuration, collecting every problem found
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.api_url.trim().is_empty() {
        errors.push(ValidationError::EmptyApiUrl);
    } else if !is_valid_api_url(&config.api_url) {
        errors.push(ValidationError::InvalidApiUrl(config.api_url.clone()));
    }

    if config.user_agent.trim().is_empty() {
        errors.push(ValidationError::EmptyUserAgent);
    }

    if config.token_env.trim().is_empty() || config.token_env.contains('=') {
        errors.push(ValidationError::InvalidTokenEnv(config.token_env.clone()));
    }

    if !(1..=constants::github::PAGE_SIZE_MAX).contains(&config.page_size_max) {
        errors.push(ValidationError::PageSizeOutOfRange(config.page_size_max));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_valid_api_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Converts validation errors to a user-friendly anyhow error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Validation errors: {}", error_messages.join("; "))
}
