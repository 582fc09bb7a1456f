use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create or find a discussion for every opted-in post and link it back.
    Sync(SyncArgs),
    /// Print the fingerprint marker embedded for a permalink.
    Fingerprint(FingerprintArgs),
}

/// Arguments for `threadlink sync`.
///
/// Every value may also come from configuration; flags win.
#[derive(Clone, Debug, Args)]
pub struct SyncArgs {
    /// Hugo site root (where `hugo list all` runs)
    #[arg(long, value_name = "DIR")]
    pub content_root: Option<PathBuf>,

    /// GitHub token with discussions write access
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Repository owner
    #[arg(long)]
    pub owner: Option<String>,

    /// Repository name
    #[arg(long)]
    pub repo: Option<String>,

    /// Discussion category slug
    #[arg(long, value_name = "SLUG")]
    pub category: Option<String>,

    /// Read posts from a captured `hugo list all` CSV instead of running Hugo
    #[arg(long, value_name = "CSV")]
    pub listing: Option<PathBuf>,

    /// Search only: never create discussions or modify posts
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `threadlink fingerprint`.
#[derive(Clone, Debug, Args)]
pub struct FingerprintArgs {
    /// Full post permalink, exactly as Hugo reports it
    pub permalink: String,
}
