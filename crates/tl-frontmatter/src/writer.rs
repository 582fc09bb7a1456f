//! Load and store post files.

use std::fs;
use std::path::Path;

use crate::document::Document;
use crate::error::FrontmatterError;

/// Read and parse a post file.
///
/// # Errors
///
/// Returns [`FrontmatterError::Io`] if the file cannot be read and
/// [`FrontmatterError::Malformed`] if its front matter cannot be parsed.
pub fn load(path: &Path) -> Result<Document, FrontmatterError> {
    let text = fs::read_to_string(path).map_err(|source| FrontmatterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Document::parse(&text).map_err(|source| FrontmatterError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist `discussAt = url` into the post at `path`.
///
/// The whole file is loaded, modified, and written back; nothing but the
/// `discussAt` line changes. There is no rollback once written.
///
/// # Errors
///
/// Returns [`FrontmatterError`] if the file cannot be read, parsed, or written.
pub fn write_discuss_at(path: &Path, url: &str) -> Result<Document, FrontmatterError> {
    let mut document = load(path)?;
    document
        .set_discuss_at(url)
        .map_err(|source| FrontmatterError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    fs::write(path, document.render()).map_err(|source| FrontmatterError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), url, "post updated with discussion link");
    Ok(document)
}
