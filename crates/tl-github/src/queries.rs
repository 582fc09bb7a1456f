//! GraphQL documents and their typed variables/results.

use serde::{Deserialize, Serialize};
use tl_core::{Category, Discussion};

pub const SEARCH_DISCUSSIONS: &str = r"
query SearchDiscussions($query: String!, $first: Int!) {
  search(query: $query, type: DISCUSSION, first: $first) {
    nodes {
      ... on Discussion {
        title
        body
        url
        number
      }
    }
  }
}
";

pub const RESOLVE_CATEGORY: &str = r"
query ResolveCategory($owner: String!, $repo: String!, $slug: String!) {
  repository(owner: $owner, name: $repo) {
    id
    discussionCategory(slug: $slug) {
      id
      name
    }
  }
}
";

pub const CREATE_DISCUSSION: &str = r"
mutation CreateDiscussion(
  $repositoryId: ID!
  $categoryId: ID!
  $title: String!
  $body: String!
) {
  createDiscussion(
    input: {
      repositoryId: $repositoryId
      categoryId: $categoryId
      title: $title
      body: $body
    }
  ) {
    discussion {
      id
      title
      body
      url
      number
    }
  }
}
";

#[derive(Debug, Serialize)]
pub struct SearchVariables<'a> {
    pub query: &'a str,
    pub first: u32,
}

#[derive(Debug, Deserialize)]
pub struct SearchData {
    pub search: SearchConnection,
}

#[derive(Debug, Deserialize)]
pub struct SearchConnection {
    pub nodes: Vec<Discussion>,
}

#[derive(Debug, Serialize)]
pub struct CategoryVariables<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
    pub slug: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct CategoryData {
    pub repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryNode {
    pub id: String,
    #[serde(rename = "discussionCategory")]
    pub discussion_category: Option<Category>,
}

#[derive(Debug, Deserialize)]
pub struct CreateData {
    #[serde(rename = "createDiscussion")]
    pub create_discussion: CreatePayload,
}

#[derive(Debug, Deserialize)]
pub struct CreatePayload {
    pub discussion: Discussion,
}
