//! # tl-config
//!
//! Layered configuration loading for threadlink using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Command-line flags ([`ConfigOverrides`])
//! 2. Environment variables (`THREADLINK_*` prefix, `__` as separator)
//! 3. Project-level `.threadlink/config.toml`
//! 4. User-level `~/.config/threadlink/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `THREADLINK_GITHUB__OWNER` -> `github.owner`,
//! `THREADLINK_HUGO__ROOT` -> `hugo.root`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use tl_config::{ConfigOverrides, ThreadlinkConfig};
//!
//! let config = ThreadlinkConfig::load_with_overrides(&ConfigOverrides::default())
//!     .expect("config");
//! let target = config.require_target().expect("owner/repo/category set");
//! println!("syncing into {}", target.name_with_owner());
//! ```

mod error;
mod github;
mod hugo;
mod sync;

pub use error::ConfigError;
pub use github::GithubConfig;
pub use hugo::HugoConfig;
pub use sync::SyncConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use tl_core::Target;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThreadlinkConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub hugo: HugoConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

/// Values given on the command line. `None` leaves lower layers untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    pub github: GithubOverrides,
    pub hugo: HugoOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GithubOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HugoOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

impl ThreadlinkConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_overrides`] for the
    /// full CLI chain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Load `.env`, then every layer, with command-line values on top.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load_with_overrides(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::extract(Self::figment().merge(Serialized::defaults(overrides)))
    }

    /// Build the figment provider chain, without command-line values.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".threadlink/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables
        figment.merge(Env::prefixed("THREADLINK_").split("__"))
    }

    /// Extract from any figment and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.github.validate()?;
        config.sync.validate()?;
        Ok(config)
    }

    /// The owner/repository/category triple every sync needs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] naming the first missing value.
    pub fn require_target(&self) -> Result<Target, ConfigError> {
        for (field, value) in [
            ("owner", &self.github.owner),
            ("repo", &self.github.repo),
            ("category", &self.github.category),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::NotConfigured {
                    section: "github",
                    field,
                    flag: field,
                    env: match field {
                        "owner" => "THREADLINK_GITHUB__OWNER",
                        "repo" => "THREADLINK_GITHUB__REPO",
                        _ => "THREADLINK_GITHUB__CATEGORY",
                    },
                });
            }
        }

        Target::new(&self.github.owner, &self.github.repo, &self.github.category).map_err(
            |error| ConfigError::InvalidValue {
                field: "github".to_string(),
                reason: error.to_string(),
            },
        )
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("threadlink").join("config.toml"))
    }
}
