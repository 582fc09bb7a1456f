use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Where discussions live: a repository and the category new threads go into.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Target {
    pub owner: String,
    pub repo: String,
    /// Category slug, e.g. `blog-posts`.
    pub category: String,
}

impl Target {
    /// Build a target, rejecting blank fields.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyTargetField`] if any field is empty after trimming.
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let target = Self {
            owner: owner.into().trim().to_string(),
            repo: repo.into().trim().to_string(),
            category: category.into().trim().to_string(),
        };
        for (field, value) in [
            ("owner", &target.owner),
            ("repo", &target.repo),
            ("category", &target.category),
        ] {
            if value.is_empty() {
                return Err(CoreError::EmptyTargetField { field });
            }
        }
        Ok(target)
    }

    /// `owner/repo`, as used in search qualifiers.
    #[must_use]
    pub fn name_with_owner(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
