//! Shared HTTP response checks.
//!
//! GitHub signals rate limiting either with 429 or with 403 plus
//! `x-ratelimit-remaining: 0`; both become [`GithubError::RateLimited`].
//! Every other non-success status becomes [`GithubError::Api`].

use reqwest::StatusCode;

use crate::error::GithubError;

const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GithubError> {
    let status = resp.status();
    if status == StatusCode::TOO_MANY_REQUESTS
        || (status == StatusCode::FORBIDDEN && is_rate_limit_exhausted(&resp))
    {
        return Err(GithubError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !status.is_success() {
        return Err(GithubError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn is_rate_limit_exhausted(resp: &reqwest::Response) -> bool {
    resp.headers().contains_key(reqwest::header::RETRY_AFTER)
        || resp
            .headers()
            .get(RATE_LIMIT_REMAINING)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.trim() == "0")
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
