//! # tl-sync
//!
//! Idempotent synchronization of blog posts with GitHub Discussions.
//!
//! Every opted-in post that has no `discussAt` link gets exactly one
//! discussion. The post's permalink is fingerprinted and the marker embedded
//! in the discussion body, so a later run finds the thread again through
//! search instead of creating a duplicate:
//! - [`matcher`] looks up the discussion carrying a fingerprint,
//! - [`creator`] builds the body and creates the discussion,
//! - [`orchestrator`] runs the per-post state machine and writes links back.
//!
//! Search is eventually consistent, so two concurrent runs may still both
//! create a thread for the same post.

pub mod creator;
mod error;
pub mod matcher;
pub mod orchestrator;
pub mod report;
mod test_support;

pub use error::SyncError;
pub use orchestrator::{SyncOptions, Synchronizer};
pub use report::{ItemOutcome, ItemStatus, SkipReason, SyncReport};
