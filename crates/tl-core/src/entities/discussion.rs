use serde::{Deserialize, Serialize};

/// Default closing line of a created discussion body.
pub const DEFAULT_INVITATION: &str = "Comment, complain, and ask questions 🙂";

/// A discussion thread owned by the remote service.
///
/// Every field is required when deserializing: a response missing one is a
/// malformed response, not a thread with defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Discussion {
    pub title: String,
    pub body: String,
    pub url: String,
    pub number: u64,
}

/// A discussion category, resolved by slug on every run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Repository node id plus the category a new discussion goes into.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Repository {
    pub id: String,
    pub category: Category,
}
