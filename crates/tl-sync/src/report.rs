//! Run report.

use std::path::PathBuf;

use serde::Serialize;
use tl_core::Item;

/// Why an item was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// `discuss` is missing or not `true`.
    NotOptedIn,
    /// `discussAt` already holds a link.
    AlreadyLinked,
}

/// Final state of one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemStatus {
    Skipped { reason: SkipReason },
    /// An existing discussion carries the post's marker.
    Reused { url: String, number: u64 },
    Created { url: String, number: u64 },
    /// Dry run only: no discussion exists and one would be created.
    WouldCreate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemOutcome {
    pub path: PathBuf,
    pub permalink: String,
    pub title: String,
    #[serde(flatten)]
    pub status: ItemStatus,
}

impl ItemOutcome {
    #[must_use]
    pub fn new(item: Item, status: ItemStatus) -> Self {
        Self {
            path: item.path,
            permalink: item.permalink,
            title: item.title,
            status,
        }
    }

    /// The discussion the item is linked to, if it was resolved.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match &self.status {
            ItemStatus::Reused { url, .. } | ItemStatus::Created { url, .. } => Some(url),
            ItemStatus::Skipped { .. } | ItemStatus::WouldCreate => None,
        }
    }
}

/// Outcome of every item in listing order, plus totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub dry_run: bool,
    pub skipped: usize,
    pub reused: usize,
    pub created: usize,
    pub would_create: usize,
    pub items: Vec<ItemOutcome>,
}

impl SyncReport {
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    pub fn push(&mut self, outcome: ItemOutcome) {
        match outcome.status {
            ItemStatus::Skipped { .. } => self.skipped += 1,
            ItemStatus::Reused { .. } => self.reused += 1,
            ItemStatus::Created { .. } => self.created += 1,
            ItemStatus::WouldCreate => self.would_create += 1,
        }
        self.items.push(outcome);
    }

    /// Number of items seen, skipped ones included.
    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }
}
