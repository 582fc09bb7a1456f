//! # tl-github
//!
//! GitHub Discussions client for threadlink, over the GraphQL API.
//!
//! Three operations are exposed through [`DiscussionApi`]:
//! - full-text search restricted to discussions,
//! - resolving a repository and a category slug to their node ids,
//! - creating a discussion.
//!
//! The sync engine is generic over [`DiscussionApi`], so tests drive it with
//! an in-memory fake and production code with [`GithubClient`].

mod error;
pub mod graphql;
mod http;
pub mod queries;

pub use error::GithubError;
pub use graphql::GraphQlError;

use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tl_core::{Discussion, Repository, Target};

use crate::graphql::{GraphQlRequest, parse_response};
use crate::http::check_response;
use crate::queries::{
    CREATE_DISCUSSION, CategoryData, CategoryVariables, CreateData, RESOLVE_CATEGORY,
    SEARCH_DISCUSSIONS, SearchData, SearchVariables,
};

/// Input of the create mutation; serialized as-is into its variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDiscussion {
    pub repository_id: String,
    pub category_id: String,
    pub title: String,
    pub body: String,
}

/// The remote operations the sync protocol needs.
#[allow(async_fn_in_trait)]
pub trait DiscussionApi {
    /// Run a discussion search and return the matching threads in rank order.
    async fn search_discussions(
        &self,
        query: &str,
        first: u32,
    ) -> Result<Vec<Discussion>, GithubError>;

    /// Resolve the target repository and category slug to node ids.
    ///
    /// Fails with [`GithubError::CategoryNotFound`] when either is unknown.
    async fn resolve_category(&self, target: &Target) -> Result<Repository, GithubError>;

    /// Create a discussion and return it with its assigned url and number.
    async fn create_discussion(&self, input: &NewDiscussion) -> Result<Discussion, GithubError>;
}

/// HTTP client for the GitHub GraphQL endpoint.
pub struct GithubClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl GithubClient {
    /// Build a client authenticating with `token`.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(
        token: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GithubError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("threadlink/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }

    /// POST one GraphQL operation and decode its `data`.
    async fn execute<V, T>(&self, operation: &str, query: &str, variables: V) -> Result<T, GithubError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        tracing::debug!(operation, endpoint = %self.endpoint, "sending GraphQL request");
        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;
        let body = check_response(resp).await?.text().await?;
        parse_response(&body)
    }
}

impl DiscussionApi for GithubClient {
    async fn search_discussions(
        &self,
        query: &str,
        first: u32,
    ) -> Result<Vec<Discussion>, GithubError> {
        let data: SearchData = self
            .execute(
                "SearchDiscussions",
                SEARCH_DISCUSSIONS,
                SearchVariables { query, first },
            )
            .await?;
        Ok(data.search.nodes)
    }

    async fn resolve_category(&self, target: &Target) -> Result<Repository, GithubError> {
        let not_found = || GithubError::CategoryNotFound {
            owner: target.owner.clone(),
            repo: target.repo.clone(),
            slug: target.category.clone(),
        };

        let result = self
            .execute::<_, CategoryData>(
                "ResolveCategory",
                RESOLVE_CATEGORY,
                CategoryVariables {
                    owner: &target.owner,
                    repo: &target.repo,
                    slug: &target.category,
                },
            )
            .await;

        let data = match result {
            Ok(data) => data,
            Err(GithubError::GraphQl(errors)) if errors.iter().all(GraphQlError::is_not_found) => {
                return Err(not_found());
            }
            Err(error) => return Err(error),
        };

        let repository = data.repository.ok_or_else(not_found)?;
        let category = repository.discussion_category.ok_or_else(not_found)?;
        Ok(Repository {
            id: repository.id,
            category,
        })
    }

    async fn create_discussion(&self, input: &NewDiscussion) -> Result<Discussion, GithubError> {
        let data: CreateData = self
            .execute("CreateDiscussion", CREATE_DISCUSSION, input)
            .await?;
        Ok(data.create_discussion.discussion)
    }
}
