//! Gazer GitHub - GraphQL client for the GitHub API
//!
//! This crate provides access to a repository's open issues (with cursor
//! pagination and page merging) and to the star/unstar mutations.

mod client;
mod error;
mod graphql;
mod issues;
mod star;

pub use client::GitHubClient;
pub use error::{Error, Result};
pub use issues::{
    Issue, IssueConnection, IssueEdge, Organization, PageInfo, Reaction, ReactionConnection,
    ReactionEdge, Repository, StargazerCount,
};
