use anyhow::Context;
use tl_config::{ConfigOverrides, GithubOverrides, HugoOverrides, ThreadlinkConfig};

use crate::cli::root_commands::SyncArgs;

/// Load configuration with the `sync` flags layered on top.
pub fn load_config(args: &SyncArgs) -> anyhow::Result<ThreadlinkConfig> {
    ThreadlinkConfig::load_with_overrides(&overrides(args))
        .context("failed to load threadlink configuration")
}

fn overrides(args: &SyncArgs) -> ConfigOverrides {
    ConfigOverrides {
        github: GithubOverrides {
            token: args.token.clone(),
            owner: args.owner.clone(),
            repo: args.repo.clone(),
            category: args.category.clone(),
        },
        hugo: HugoOverrides {
            root: args.content_root.clone(),
        },
    }
}
