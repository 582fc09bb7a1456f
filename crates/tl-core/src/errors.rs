//! Cross-cutting error types for threadlink.
//!
//! Domain-specific errors (`GithubError`, `FrontmatterError`, `SyncError`) are
//! defined in their respective crates. The binary converges them with `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any threadlink crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A required target field was left empty.
    #[error("Invalid target: {field} must not be empty")]
    EmptyTargetField { field: &'static str },
}
