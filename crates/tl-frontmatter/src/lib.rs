//! # tl-frontmatter
//!
//! Front matter handling for threadlink posts.
//!
//! Reads the `discuss` opt-in flag and the `discussAt` link from YAML (`---`)
//! or TOML (`+++`) front matter, and writes `discussAt` back while leaving
//! every other header line and the body byte-for-byte intact.

mod document;
mod error;
mod writer;

pub use document::{DISCUSS_AT_KEY, DISCUSS_KEY, Document, HeaderFormat};
pub use error::{FrontmatterError, ParseError};
pub use writer::{load, write_discuss_at};
