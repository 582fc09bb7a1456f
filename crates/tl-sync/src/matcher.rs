//! Find the discussion already created for a post.

use tl_core::{Discussion, Fingerprint, Target};
use tl_github::DiscussionApi;

use crate::error::SyncError;

/// Escape a term for use inside a quoted search phrase.
#[must_use]
pub fn escape_search_term(term: &str) -> String {
    term.replace('\\', "\\\\").replace('"', "\\\"")
}

/// The full-text query looking for `fingerprint`'s marker in `target`'s
/// discussion bodies.
#[must_use]
pub fn search_query(target: &Target, fingerprint: &Fingerprint) -> String {
    format!(
        "repo:{} \"{}\" in:body",
        target.name_with_owner(),
        escape_search_term(&fingerprint.marker())
    )
}

/// Fewest results a lookup asks for; one result would hide a duplicate.
pub const MIN_SEARCH_RESULTS: u32 = 2;

/// Look up the discussion carrying `fingerprint`, searching at most `limit`
/// results (raised to [`MIN_SEARCH_RESULTS`] when lower).
///
/// Search is fuzzy, so hits whose body lacks the marker verbatim are
/// discarded before counting.
///
/// # Errors
///
/// Returns [`SyncError::AmbiguousMatch`] if more than one discussion carries
/// the marker, or [`SyncError::Remote`] if the search fails.
pub async fn find_discussion<A: DiscussionApi>(
    api: &A,
    target: &Target,
    fingerprint: &Fingerprint,
    limit: u32,
) -> Result<Option<Discussion>, SyncError> {
    let limit = limit.max(MIN_SEARCH_RESULTS);
    let query = search_query(target, fingerprint);
    tracing::debug!(%query, limit, "searching for an existing discussion");

    let hits = api.search_discussions(&query, limit).await?;
    let (mut matches, discarded): (Vec<_>, Vec<_>) = hits
        .into_iter()
        .partition(|discussion| fingerprint.is_marked_in(&discussion.body));

    for discussion in &discarded {
        tracing::warn!(
            url = %discussion.url,
            marker = %fingerprint,
            "ignoring search hit without the exact marker"
        );
    }

    match matches.len() {
        0 => Ok(None),
        1 => Ok(matches.pop()),
        _ => Err(SyncError::AmbiguousMatch {
            marker: fingerprint.marker(),
            urls: matches.into_iter().map(|d| d.url).collect(),
        }),
    }
}
