//! GitHub Discussions configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default GraphQL endpoint.
fn default_endpoint() -> String {
    String::from("https://api.github.com/graphql")
}

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Deserialize, Serialize)]
pub struct GithubConfig {
    /// Token with `discussions: write` on the target repository.
    #[serde(default)]
    pub token: String,

    /// Repository owner (user or organization).
    #[serde(default)]
    pub owner: String,

    /// Repository name.
    #[serde(default)]
    pub repo: String,

    /// Discussion category slug new threads are created in.
    #[serde(default)]
    pub category: String,

    /// GraphQL endpoint (GitHub Enterprise installs differ).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout applied by the HTTP client.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            owner: String::new(),
            repo: String::new(),
            category: String::new(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// Hand-written so the token never reaches logs.
impl fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubConfig")
            .field("token", &if self.token.is_empty() { "" } else { "***" })
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("category", &self.category)
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GithubConfig {
    /// The token, or an error naming where to set it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if the token is empty.
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        let token = self.token.trim();
        if token.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "github",
                field: "token",
                flag: "token",
                env: "GITHUB_TOKEN",
            });
        }
        Ok(token)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "github.endpoint".to_string(),
                reason: format!("'{}' is not an http(s) URL", self.endpoint),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "github.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
