//! Sync error types.
//!
//! Every variant aborts the run. Items written before the failure stay
//! written, so rerunning after fixing the cause resumes where it stopped.

use thiserror::Error;
use tl_frontmatter::FrontmatterError;
use tl_github::GithubError;
use tl_hugo::HugoError;

#[derive(Debug, Error)]
pub enum SyncError {
    /// More than one discussion carries the same fingerprint marker. Needs a
    /// human to delete or edit the duplicates.
    #[error("more than one discussion carries {marker}: {}", urls.join(", "))]
    AmbiguousMatch { marker: String, urls: Vec<String> },

    /// The configured category slug does not exist in the repository.
    #[error("discussion category '{slug}' not found in {owner}/{repo}")]
    CategoryNotFound {
        owner: String,
        repo: String,
        slug: String,
    },

    /// Transport, authentication, GraphQL, or rate-limit failure.
    #[error("remote error: {0}")]
    Remote(#[source] GithubError),

    /// A post file could not be read, parsed, or rewritten.
    #[error(transparent)]
    MalformedItem(#[from] FrontmatterError),

    /// The post listing could not be produced or decoded.
    #[error("item source error: {0}")]
    Source(#[from] HugoError),
}

impl From<GithubError> for SyncError {
    fn from(error: GithubError) -> Self {
        match error {
            GithubError::CategoryNotFound { owner, repo, slug } => {
                Self::CategoryNotFound { owner, repo, slug }
            }
            other => Self::Remote(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_not_found_is_lifted() {
        let err = SyncError::from(GithubError::CategoryNotFound {
            owner: "octo".to_string(),
            repo: "blog".to_string(),
            slug: "posts".to_string(),
        });
        assert!(matches!(err, SyncError::CategoryNotFound { .. }));
        assert_eq!(
            err.to_string(),
            "discussion category 'posts' not found in octo/blog"
        );
    }

    #[test]
    fn other_github_errors_are_remote() {
        let err = SyncError::from(GithubError::RateLimited {
            retry_after_secs: 60,
        });
        assert!(matches!(err, SyncError::Remote(_)));
    }

    #[test]
    fn ambiguous_match_lists_urls() {
        let err = SyncError::AmbiguousMatch {
            marker: "<!-- abc -->".to_string(),
            urls: vec!["https://a".to_string(), "https://b".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "more than one discussion carries <!-- abc -->: https://a, https://b"
        );
    }
}
