//! GitHub client error types.

use thiserror::Error;

use crate::graphql::GraphQlError;

/// Errors that can occur when talking to the GitHub GraphQL API.
#[derive(Debug, Error)]
pub enum GithubError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code (bad token, missing scope, ...).
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by GitHub.
        status: u16,
        /// Response body.
        message: String,
    },

    /// Primary or secondary rate limit hit.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The response carried GraphQL `errors`.
    #[error("GraphQL error: {}", join_messages(.0))]
    GraphQl(Vec<GraphQlError>),

    /// The response did not have the shape the query asked for.
    #[error("parse error: {0}")]
    Parse(String),

    /// The category slug (or the repository itself) does not exist.
    #[error("discussion category '{slug}' not found in {owner}/{repo}")]
    CategoryNotFound {
        owner: String,
        repo: String,
        slug: String,
    },
}

fn join_messages(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
