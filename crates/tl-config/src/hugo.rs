//! Hugo site configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_binary() -> String {
    String::from("hugo")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HugoConfig {
    /// Site root: where `hugo list all` runs and post paths are relative to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Hugo executable name or path.
    #[serde(default = "default_binary")]
    pub binary: String,
}

impl Default for HugoConfig {
    fn default() -> Self {
        Self {
            root: None,
            binary: default_binary(),
        }
    }
}

impl HugoConfig {
    /// The site root, or an error naming where to set it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if no root was given.
    pub fn require_root(&self) -> Result<&Path, ConfigError> {
        self.root
            .as_deref()
            .filter(|root| !root.as_os_str().is_empty())
            .ok_or(ConfigError::NotConfigured {
                section: "hugo",
                field: "root",
                flag: "content-root",
                env: "THREADLINK_HUGO__ROOT",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = HugoConfig::default();
        assert_eq!(config.binary, "hugo");
        assert!(config.require_root().is_err());
    }

    #[test]
    fn empty_root_counts_as_missing() {
        let config = HugoConfig {
            root: Some(PathBuf::new()),
            ..HugoConfig::default()
        };
        assert!(config.require_root().is_err());
    }
}
