//! Integration tests for configuration layering.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use std::path::PathBuf;

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use tl_config::{ConfigError, ConfigOverrides, GithubOverrides, HugoOverrides, ThreadlinkConfig};

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[github]
owner = "octo"
repo = "blog"
category = "blog-posts"
timeout_secs = 5

[hugo]
root = "site"
binary = "/usr/local/bin/hugo"

[sync]
search_limit = 3
invitation = "Say hi"
"#,
        )?;

        let config = ThreadlinkConfig::extract(
            Figment::from(Serialized::defaults(ThreadlinkConfig::default()))
                .merge(Toml::file("config.toml")),
        )
        .expect("config extracts");

        assert_eq!(config.github.owner, "octo");
        assert_eq!(config.github.repo, "blog");
        assert_eq!(config.github.category, "blog-posts");
        assert_eq!(config.github.timeout_secs, 5);
        assert_eq!(config.github.endpoint, "https://api.github.com/graphql");
        assert_eq!(config.hugo.root, Some(PathBuf::from("site")));
        assert_eq!(config.hugo.binary, "/usr/local/bin/hugo");
        assert_eq!(config.sync.search_limit, 3);
        assert_eq!(config.sync.invitation, "Say hi");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".threadlink")?;
        jail.create_file(
            ".threadlink/config.toml",
            r#"
[github]
owner = "from-file"
repo = "blog"
category = "posts"
"#,
        )?;

        let config = ThreadlinkConfig::load().expect("config loads");
        assert_eq!(config.github.owner, "from-file");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".threadlink")?;
        jail.create_file(
            ".threadlink/config.toml",
            r#"
[github]
owner = "from-file"
"#,
        )?;
        jail.set_env("THREADLINK_GITHUB__OWNER", "from-env");
        jail.set_env("THREADLINK_SYNC__SEARCH_LIMIT", "25");

        let config = ThreadlinkConfig::load().expect("config loads");
        assert_eq!(config.github.owner, "from-env");
        assert_eq!(config.sync.search_limit, 25);
        Ok(())
    });
}

#[test]
fn cli_overrides_beat_env() {
    Jail::expect_with(|jail| {
        jail.set_env("THREADLINK_GITHUB__OWNER", "from-env");
        jail.set_env("THREADLINK_GITHUB__REPO", "env-repo");

        let overrides = ConfigOverrides {
            github: GithubOverrides {
                owner: Some("from-cli".to_string()),
                token: Some("ghp_cli".to_string()),
                ..GithubOverrides::default()
            },
            hugo: HugoOverrides {
                root: Some(PathBuf::from("/srv/site")),
            },
        };

        let config = ThreadlinkConfig::load_with_overrides(&overrides).expect("config loads");
        assert_eq!(config.github.owner, "from-cli");
        assert_eq!(config.github.repo, "env-repo");
        assert_eq!(config.github.token, "ghp_cli");
        assert_eq!(config.hugo.root, Some(PathBuf::from("/srv/site")));
        Ok(())
    });
}

#[test]
fn invalid_search_limit_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("THREADLINK_SYNC__SEARCH_LIMIT", "0");
        let err = ThreadlinkConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }), "{err}");
        Ok(())
    });
}

#[test]
fn single_result_search_limit_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("THREADLINK_SYNC__SEARCH_LIMIT", "1");
        let err = ThreadlinkConfig::load().unwrap_err();
        assert!(err.to_string().contains("2..=100"), "{err}");
        Ok(())
    });
}
