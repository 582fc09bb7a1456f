use std::time::Duration;

use anyhow::Context;
use tl_github::GithubClient;
use tl_hugo::HugoSite;
use tl_sync::{SyncOptions, Synchronizer};

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::SyncArgs;
use crate::output::output;

/// Handle `threadlink sync`.
pub async fn handle(args: &SyncArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config(args)?;
    let target = config.require_target()?;
    let token = config.github.require_token()?;
    let site = HugoSite::new(config.hugo.require_root()?, config.hugo.binary.as_str());

    let client = GithubClient::new(
        token,
        config.github.endpoint.as_str(),
        Duration::from_secs(config.github.timeout_secs),
    )
    .context("failed to build GitHub client")?;

    let options = SyncOptions {
        search_limit: config.sync.search_limit,
        invitation: config.sync.invitation.clone(),
        dry_run: args.dry_run,
    };
    let synchronizer = Synchronizer::new(&client, &target, site.root(), options);

    tracing::debug!(
        repository = %target.name_with_owner(),
        category = %target.category,
        root = %site.root().display(),
        dry_run = args.dry_run,
        "starting sync"
    );

    let report = if let Some(listing) = &args.listing {
        let posts = HugoSite::read_listing(listing)
            .with_context(|| format!("failed to read listing {}", listing.display()))?;
        synchronizer.run(posts).await
    } else {
        let posts = site
            .list_posts()
            .await
            .context("failed to list posts with hugo")?;
        synchronizer.run(posts).await
    }
    .context("sync aborted")?;

    output(&report, flags.format)
}
