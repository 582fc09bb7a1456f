use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `threadlink` binary.
#[derive(Debug, Parser)]
#[command(
    name = "threadlink",
    version,
    about = "Link Hugo posts to GitHub Discussions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sync_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "threadlink",
            "sync",
            "--content-root",
            "/srv/blog",
            "--token",
            "ghp_test",
            "--owner",
            "octo",
            "--repo",
            "blog",
            "--category",
            "blog-posts",
            "--listing",
            "posts.csv",
            "--dry-run",
        ])
        .expect("cli should parse");

        let Commands::Sync(args) = cli.command else {
            panic!("expected sync");
        };
        assert_eq!(args.content_root, Some(PathBuf::from("/srv/blog")));
        assert_eq!(args.token.as_deref(), Some("ghp_test"));
        assert_eq!(args.owner.as_deref(), Some("octo"));
        assert_eq!(args.repo.as_deref(), Some("blog"));
        assert_eq!(args.category.as_deref(), Some("blog-posts"));
        assert_eq!(args.listing, Some(PathBuf::from("posts.csv")));
        assert!(args.dry_run);
    }

    #[test]
    fn sync_flags_are_optional() {
        let cli = Cli::try_parse_from(["threadlink", "sync"]).expect("cli should parse");
        let Commands::Sync(args) = cli.command else {
            panic!("expected sync");
        };
        assert_eq!(args.owner, None);
        assert!(!args.dry_run);
    }

    #[test]
    fn fingerprint_requires_permalink() {
        assert!(Cli::try_parse_from(["threadlink", "fingerprint"]).is_err());

        let cli = Cli::try_parse_from(["threadlink", "fingerprint", "https://x/a"])
            .expect("cli should parse");
        assert!(
            matches!(cli.command, Commands::Fingerprint(ref args) if args.permalink == "https://x/a")
        );
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "threadlink",
            "--format",
            "raw",
            "--verbose",
            "fingerprint",
            "p",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["threadlink", "sync", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        let flags = cli.global_flags();
        assert_eq!(flags.format, OutputFormat::Raw);
        assert!(flags.quiet);
        assert!(matches!(cli.command, Commands::Sync(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["threadlink", "--format", "table", "sync"]);
        assert!(parsed.is_err());
    }
}
