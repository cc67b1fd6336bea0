//! GraphQL request execution and response envelope

use crate::{Error, GitHubClient, Result};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// GraphQL query response wrapper
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

/// GraphQL error entry
///
/// `path` elements may be field names or list indices, so they stay raw
/// JSON values.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub path: Vec<serde_json::Value>,
}

impl GitHubClient {
    /// Execute a GraphQL document against the configured endpoint
    ///
    /// GraphQL-level errors are surfaced as [`Error::GraphQl`] even when the
    /// response carries partial data.
    pub(crate) async fn graphql<T: for<'de> Deserialize<'de>>(
        &self,
        query: &str,
        variables: &serde_json::Value,
    ) -> Result<T> {
        debug!(endpoint = %self.endpoint(), "Sending GraphQL request");

        let request_body = json!({
            "query": query,
            "variables": variables,
        });

        let response = self
            .http()
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.token()))
            .header("User-Agent", "gazer-github")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Auth("Invalid GitHub token".to_string()));
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response".to_string());
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let graphql_response: GraphQlResponse<T> = response
            .json()
            .await
            .map_err(|e| Error::Parse(format!("Failed to parse GraphQL response: {}", e)))?;

        if let Some(errors) = graphql_response.errors {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(Error::GraphQl(messages));
        }

        graphql_response.data.ok_or(Error::MissingData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_error_envelope() {
        let body = serde_json::json!({
            "data": null,
            "errors": [
                {"message": "Bad credentials"},
                {"message": "Field 'foo' doesn't exist", "path": ["organization"]}
            ]
        });

        let response: GraphQlResponse<serde_json::Value> =
            serde_json::from_value(body).unwrap();

        assert!(response.data.is_none());
        let errors = response.errors.unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "Bad credentials");
        assert_eq!(errors[1].path, vec![serde_json::json!("organization")]);
    }

    #[test]
    fn test_deserialize_error_path_with_list_index() {
        // GitHub mixes field names and list indices in error paths
        let body = serde_json::json!({
            "data": null,
            "errors": [
                {
                    "message": "Something went wrong while executing your query.",
                    "path": ["organization", "repository", "issues", "edges", 0, "node"]
                }
            ]
        });

        let response: GraphQlResponse<serde_json::Value> =
            serde_json::from_value(body).unwrap();

        let errors = response.errors.unwrap();
        assert_eq!(
            errors[0].message,
            "Something went wrong while executing your query."
        );
        assert_eq!(errors[0].path[4], serde_json::json!(0));
    }

    #[test]
    fn test_graphql_error_display() {
        let err = Error::GraphQl(vec!["first".to_string(), "second".to_string()]);
        assert_eq!(err.to_string(), "GraphQL errors: first, second");
    }
}
