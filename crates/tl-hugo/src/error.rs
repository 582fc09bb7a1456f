//! Hugo listing error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HugoError {
    /// The Hugo binary could not be started.
    #[error("failed to run '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// `hugo list all` ran but failed.
    #[error("'{binary} list all' exited with {status}: {stderr}")]
    Command {
        binary: String,
        status: String,
        stderr: String,
    },

    /// A listing file could not be opened.
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The listing is not valid CSV or a row does not fit the columns.
    #[error("invalid listing CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The listing header lacks a column the sync needs.
    #[error("listing is missing the '{0}' column")]
    MissingColumn(&'static str),
}
