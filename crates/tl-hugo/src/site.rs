//! A Hugo site on disk.

use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::error::HugoError;
use crate::listing::{Listing, parse_listing};

#[derive(Debug, Clone)]
pub struct HugoSite {
    root: PathBuf,
    binary: String,
}

impl HugoSite {
    pub fn new(root: impl Into<PathBuf>, binary: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            binary: binary.into(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run `hugo list all` in the site root and parse its output.
    ///
    /// # Errors
    ///
    /// Returns [`HugoError`] if Hugo cannot be started, exits unsuccessfully,
    /// or prints a listing without the required columns.
    pub async fn list_posts(&self) -> Result<Listing<Cursor<Vec<u8>>>, HugoError> {
        tracing::debug!(root = %self.root.display(), binary = %self.binary, "listing posts");
        let output = Command::new(&self.binary)
            .args(["list", "all"])
            .current_dir(&self.root)
            .output()
            .await
            .map_err(|source| HugoError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(HugoError::Command {
                binary: self.binary.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_listing(Cursor::new(output.stdout))
    }

    /// Parse a listing captured earlier with `hugo list all > listing.csv`.
    ///
    /// # Errors
    ///
    /// Returns [`HugoError`] if the file cannot be opened or lacks required columns.
    pub fn read_listing(path: &Path) -> Result<Listing<File>, HugoError> {
        let file = File::open(path).map_err(|source| HugoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse_listing(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_binary_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let site = HugoSite::new(dir.path(), "threadlink-no-such-hugo-binary");
        let err = site.list_posts().await.err().unwrap();
        assert!(matches!(err, HugoError::Spawn { .. }), "{err}");
    }

    #[test]
    fn missing_listing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = HugoSite::read_listing(&dir.path().join("listing.csv"))
            .err()
            .unwrap();
        assert!(matches!(err, HugoError::Io { .. }));
    }
}
