//! Create the discussion for a post.

use tl_core::{Discussion, Fingerprint, Target};
use tl_github::{DiscussionApi, NewDiscussion};

use crate::error::SyncError;

/// The body of a new discussion: the fingerprint marker on the first line,
/// a link back to the post, then the invitation.
#[must_use]
pub fn discussion_body(
    fingerprint: &Fingerprint,
    title: &str,
    permalink: &str,
    invitation: &str,
) -> String {
    format!("{fingerprint}\nPost link: [{title}]({permalink})\n\n{invitation}")
}

/// Resolve the target category and create a discussion in it.
///
/// Repository and category ids are resolved on every call.
///
/// # Errors
///
/// Returns [`SyncError::CategoryNotFound`] if the slug or repository does not
/// resolve, or [`SyncError::Remote`] for any other remote failure.
pub async fn create_discussion<A: DiscussionApi>(
    api: &A,
    target: &Target,
    title: &str,
    body: &str,
) -> Result<Discussion, SyncError> {
    let repository = api.resolve_category(target).await?;
    tracing::debug!(
        repository_id = %repository.id,
        category = %repository.category.name,
        "resolved discussion category"
    );

    let input = NewDiscussion {
        repository_id: repository.id,
        category_id: repository.category.id,
        title: title.to_string(),
        body: body.to_string(),
    };
    let discussion = api.create_discussion(&input).await?;
    tracing::info!(url = %discussion.url, number = discussion.number, "created discussion");
    Ok(discussion)
}
