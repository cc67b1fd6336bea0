//! Error types for GitHub operations

use thiserror::Error;

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub operations
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the GraphQL endpoint
    #[error("GraphQL request failed with status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as far as it could be read
        body: String,
    },

    /// Authentication error
    #[error("GitHub authentication error: {0}")]
    Auth(String),

    /// GraphQL-level errors reported by the server
    #[error("GraphQL errors: {}", .0.join(", "))]
    GraphQl(Vec<String>),

    /// Repository not found or not accessible
    #[error("Repository {0} not found or not accessible")]
    RepositoryNotFound(String),

    /// Successful response carried no data
    #[error("GraphQL response missing data")]
    MissingData,

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}
