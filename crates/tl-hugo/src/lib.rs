//! # tl-hugo
//!
//! Post enumeration for Hugo sites.
//!
//! Posts come from `hugo list all`, run in the site root, whose CSV output is
//! decoded lazily; only rows with `draft == "false"` are yielded, in listing
//! order. A listing captured to a file can be read instead.

mod error;
mod listing;
mod site;

pub use error::HugoError;
pub use listing::{Listing, parse_listing};
pub use site::HugoSite;
