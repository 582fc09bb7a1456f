//! Entity structs for threadlink domain objects.

mod discussion;
mod post;
mod target;

pub use discussion::{Category, DEFAULT_INVITATION, Discussion, Repository};
pub use post::{Item, PostInfo};
pub use target::Target;
