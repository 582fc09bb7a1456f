//! # tl-core
//!
//! Core types, fingerprints, and error types for threadlink.
//!
//! This crate provides the foundational types shared across all threadlink crates:
//! - Entity structs for posts, discussions, categories, and repositories
//! - The sync target (owner, repository, category slug)
//! - Deterministic permalink fingerprints embedded in discussion bodies
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod fingerprint;

pub use entities::{
    Category, DEFAULT_INVITATION, Discussion, Item, PostInfo, Repository, Target,
};
pub use errors::CoreError;
pub use fingerprint::Fingerprint;
