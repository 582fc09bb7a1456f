//! Batch synchronization of posts with discussions.
//!
//! Each post moves through a small state machine:
//!
//! ```text
//! front matter ── discuss != true or discussAt set ──▶ SKIPPED
//!      │
//!      ▼
//! UNRESOLVED ── search hit ──▶ RESOLVED (reused)
//!      │
//!      └─────── no hit ── create ──▶ RESOLVED (created)
//! ```
//!
//! A resolved post has its `discussAt` written back before the next post is
//! touched. The first error stops the batch; posts written until then stay
//! written, so a rerun skips them and resumes with the failed one.

use std::path::{Path, PathBuf};

use tl_core::{DEFAULT_INVITATION, Discussion, Fingerprint, Item, PostInfo, Target};
use tl_github::DiscussionApi;

use crate::creator::{create_discussion, discussion_body};
use crate::error::SyncError;
use crate::matcher::find_discussion;
use crate::report::{ItemOutcome, ItemStatus, SkipReason, SyncReport};

/// Run-wide knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Maximum number of search results requested per lookup.
    pub search_limit: u32,
    /// Closing line of created discussion bodies.
    pub invitation: String,
    /// Search, but never create discussions or write files.
    pub dry_run: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            search_limit: 10,
            invitation: DEFAULT_INVITATION.to_string(),
            dry_run: false,
        }
    }
}

enum Resolution {
    Reused(Discussion),
    Created(Discussion),
    WouldCreate,
}

/// Drives posts through the sync state machine against one target.
pub struct Synchronizer<'a, A> {
    api: &'a A,
    target: &'a Target,
    content_root: PathBuf,
    options: SyncOptions,
}

impl<'a, A: DiscussionApi> Synchronizer<'a, A> {
    /// `content_root` is the directory listing paths are relative to.
    pub fn new(
        api: &'a A,
        target: &'a Target,
        content_root: impl Into<PathBuf>,
        options: SyncOptions,
    ) -> Self {
        Self {
            api,
            target,
            content_root: content_root.into(),
            options,
        }
    }

    #[must_use]
    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// Synchronize `posts` in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first [`SyncError`] raised by the listing or by any post.
    pub async fn run<I, E>(&self, posts: I) -> Result<SyncReport, SyncError>
    where
        I: IntoIterator<Item = Result<PostInfo, E>>,
        SyncError: From<E>,
    {
        let mut report = SyncReport::new(self.options.dry_run);
        for post in posts {
            let outcome = self.sync_post(post?).await?;
            report.push(outcome);
        }
        tracing::info!(
            total = report.total(),
            created = report.created,
            reused = report.reused,
            skipped = report.skipped,
            dry_run = report.dry_run,
            "sync finished"
        );
        Ok(report)
    }

    /// Synchronize one post.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::MalformedItem`] if the post file cannot be read,
    /// parsed, or rewritten, and the matcher or creator errors otherwise.
    pub async fn sync_post(&self, post: PostInfo) -> Result<ItemOutcome, SyncError> {
        let path = self.content_root.join(&post.path);
        let document = tl_frontmatter::load(&path)?;
        let item = Item::from_post(post, document.discuss(), document.discuss_at());

        if !item.discuss {
            tracing::debug!(path = %item.path.display(), "post did not opt in, skipping");
            return Ok(skipped(item, SkipReason::NotOptedIn));
        }
        if let Some(url) = &item.discuss_at {
            tracing::debug!(
                path = %item.path.display(),
                url = %url,
                "post already linked, skipping"
            );
            return Ok(skipped(item, SkipReason::AlreadyLinked));
        }

        tracing::info!(
            path = %item.path.display(),
            permalink = %item.permalink,
            "found post to discuss"
        );

        let status = match self.resolve(&item).await? {
            Resolution::Reused(discussion) => {
                tracing::info!(url = %discussion.url, "reusing existing discussion");
                self.link(&path, &discussion)?;
                ItemStatus::Reused {
                    url: discussion.url,
                    number: discussion.number,
                }
            }
            Resolution::Created(discussion) => {
                self.link(&path, &discussion)?;
                ItemStatus::Created {
                    url: discussion.url,
                    number: discussion.number,
                }
            }
            Resolution::WouldCreate => {
                tracing::info!(permalink = %item.permalink, "dry run: would create discussion");
                ItemStatus::WouldCreate
            }
        };
        Ok(ItemOutcome::new(item, status))
    }

    async fn resolve(&self, item: &Item) -> Result<Resolution, SyncError> {
        let fingerprint = Fingerprint::of(&item.permalink);
        if let Some(existing) =
            find_discussion(self.api, self.target, &fingerprint, self.options.search_limit)
                .await?
        {
            return Ok(Resolution::Reused(existing));
        }

        if self.options.dry_run {
            return Ok(Resolution::WouldCreate);
        }

        let body = discussion_body(
            &fingerprint,
            &item.title,
            &item.permalink,
            &self.options.invitation,
        );
        let created = create_discussion(self.api, self.target, &item.title, &body).await?;
        Ok(Resolution::Created(created))
    }

    fn link(&self, path: &Path, discussion: &Discussion) -> Result<(), SyncError> {
        if self.options.dry_run {
            tracing::info!(path = %path.display(), url = %discussion.url, "dry run: would link");
            return Ok(());
        }
        tl_frontmatter::write_discuss_at(path, &discussion.url)?;
        tracing::info!(path = %path.display(), url = %discussion.url, "discussing at");
        Ok(())
    }
}

fn skipped(item: Item, reason: SkipReason) -> ItemOutcome {
    ItemOutcome::new(item, ItemStatus::Skipped { reason })
}
