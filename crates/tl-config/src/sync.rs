//! Sync behaviour configuration.

use serde::{Deserialize, Serialize};

use tl_core::DEFAULT_INVITATION;

use crate::error::ConfigError;

/// A single result cannot reveal a duplicate thread.
pub const MIN_SEARCH_LIMIT: u32 = 2;
/// GitHub's page size ceiling.
pub const MAX_SEARCH_LIMIT: u32 = 100;

/// Default number of search results requested per lookup.
const fn default_search_limit() -> u32 {
    10
}

fn default_invitation() -> String {
    String::from(DEFAULT_INVITATION)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncConfig {
    /// Search page size, 2..=100. Two results are enough to detect a
    /// duplicate; more only lengthen the list an ambiguity error reports.
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,

    /// Sentence appended to created discussion bodies.
    #[serde(default = "default_invitation")]
    pub invitation: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            search_limit: default_search_limit(),
            invitation: default_invitation(),
        }
    }
}

impl SyncConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SEARCH_LIMIT..=MAX_SEARCH_LIMIT).contains(&self.search_limit) {
            return Err(ConfigError::InvalidValue {
                field: "sync.search_limit".to_string(),
                reason: format!(
                    "{} is outside {MIN_SEARCH_LIMIT}..={MAX_SEARCH_LIMIT}",
                    self.search_limit
                ),
            });
        }
        Ok(())
    }
}
