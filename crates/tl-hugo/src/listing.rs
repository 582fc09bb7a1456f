//! Parsing of `hugo list all` CSV output.

use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;
use tl_core::PostInfo;

use crate::error::HugoError;

const REQUIRED_COLUMNS: [&str; 4] = ["path", "permalink", "title", "draft"];

#[derive(Debug, Deserialize)]
struct ListingRow {
    path: String,
    permalink: String,
    title: String,
    draft: String,
}

/// Published posts of a listing, lazily decoded in listing order.
pub struct Listing<R> {
    rows: csv::DeserializeRecordsIntoIter<R, ListingRow>,
}

/// Start reading a listing, checking its header row first.
///
/// # Errors
///
/// Returns [`HugoError::Csv`] if the header cannot be read and
/// [`HugoError::MissingColumn`] if a required column is absent.
pub fn parse_listing<R: Read>(reader: R) -> Result<Listing<R>, HugoError> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(HugoError::MissingColumn(column));
        }
    }
    Ok(Listing {
        rows: reader.into_deserialize(),
    })
}

impl<R: Read> Iterator for Listing<R> {
    type Item = Result<PostInfo, HugoError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let row = match self.rows.next()? {
                Ok(row) => row,
                Err(error) => return Some(Err(error.into())),
            };
            // Only rows explicitly marked as published are eligible.
            if row.draft != "false" {
                tracing::debug!(path = %row.path, draft = %row.draft, "skipping unpublished post");
                continue;
            }
            return Some(Ok(PostInfo {
                path: PathBuf::from(row.path),
                permalink: row.permalink,
                title: row.title,
            }));
        }
    }
}
