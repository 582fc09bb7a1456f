use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One published post as reported by the site listing.
///
/// `path` is relative to the content root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostInfo {
    pub path: PathBuf,
    pub permalink: String,
    pub title: String,
}

/// A post together with the two front matter fields the sync protocol reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub path: PathBuf,
    pub permalink: String,
    pub title: String,
    pub discuss: bool,
    pub discuss_at: Option<String>,
}

impl Item {
    /// Combine a listing row with the flags read from the post's front matter.
    #[must_use]
    pub fn from_post(post: PostInfo, discuss: bool, discuss_at: Option<String>) -> Self {
        Self {
            path: post.path,
            permalink: post.permalink,
            title: post.title,
            discuss,
            discuss_at,
        }
    }

    /// Whether the post opted in and has not been linked yet.
    #[must_use]
    pub const fn needs_discussion(&self) -> bool {
        self.discuss && self.discuss_at.is_none()
    }
}
