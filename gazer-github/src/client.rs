//! GitHub GraphQL client

use crate::{Error, Result};
use gazer_core::config::DEFAULT_ENDPOINT;
use gazer_core::Secrets;
use tracing::info;

/// Client for a single repository on the GitHub GraphQL API
pub struct GitHubClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
    owner: String,
    repo: String,
}

impl GitHubClient {
    /// Create a new client for the specified repository
    ///
    /// Token is loaded from (in priority order):
    /// 1. GITHUB_TOKEN environment variable
    /// 2. ~/.config/gazer/secrets.toml
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Result<Self> {
        let secrets = Secrets::load().map_err(|e| Error::Auth(e.to_string()))?;

        let token = secrets.github_token().ok_or_else(|| {
            Error::Auth(
                "GitHub token not found. Set GITHUB_TOKEN environment variable \
                 or add token to ~/.config/gazer/secrets.toml"
                    .to_string(),
            )
        })?;

        Ok(Self::with_token(owner, repo, token))
    }

    /// Create a client with an explicit token
    pub fn with_token(
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        let owner = owner.into();
        let repo = repo.into();

        info!(owner = %owner, repo = %repo, "Created GitHub client");

        Self {
            http: reqwest::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: token.into(),
            owner,
            repo,
        }
    }

    /// Create a client from a repository locator
    ///
    /// Supports formats:
    /// - owner/repo
    /// - https://github.com/owner/repo
    /// - git@github.com:owner/repo.git
    pub fn from_locator(locator: &str) -> Result<Self> {
        let (owner, repo) = parse_repo_locator(locator)?;
        Self::new(owner, repo)
    }

    /// Point the client at a different GraphQL endpoint
    ///
    /// Used for GitHub Enterprise installations and for tests
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Get the repository owner (organization login)
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get the repository name
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Get the GraphQL endpoint in use
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    /// The `owner/repo` form, used in error messages
    pub(crate) fn locator(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("endpoint", &self.endpoint)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}

/// Parse a repository locator into owner and repo
fn parse_repo_locator(locator: &str) -> Result<(String, String)> {
    if !locator.contains(':') && !locator.contains('/') {
        return Err(Error::Parse(format!(
            "Invalid repository format: {}. Expected owner/repo",
            locator
        )));
    }

    if !locator.contains("://") && !locator.contains('@') {
        // Simple owner/repo format
        let parts: Vec<&str> = locator.split('/').collect();
        if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            return Ok((
                parts[0].to_string(),
                parts[1].trim_end_matches(".git").to_string(),
            ));
        }
        return Err(Error::Parse(format!(
            "Invalid repository format: {}. Expected owner/repo",
            locator
        )));
    }

    // HTTPS URL: https://github.com/owner/repo
    if locator.starts_with("https://") || locator.starts_with("http://") {
        let url = url::Url::parse(locator).map_err(|e| Error::Parse(e.to_string()))?;
        let path = url.path().trim_start_matches('/').trim_end_matches(".git");
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() >= 2 {
            return Ok((parts[0].to_string(), parts[1].to_string()));
        }
        return Err(Error::Parse(format!("Invalid GitHub URL path: {}", path)));
    }

    // SSH URL: git@github.com:owner/repo.git
    if locator.starts_with("git@") {
        if let Some(path) = locator.split(':').nth(1) {
            let path = path.trim_end_matches(".git");
            let parts: Vec<&str> = path.split('/').collect();
            if parts.len() >= 2 {
                return Ok((parts[0].to_string(), parts[1].to_string()));
            }
        }
        return Err(Error::Parse(format!("Invalid SSH URL: {}", locator)));
    }

    Err(Error::Parse(format!("Unrecognized locator: {}", locator)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shorthand() {
        let (owner, repo) = parse_repo_locator("owner/repo").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_parse_https_url() {
        let (owner, repo) = parse_repo_locator("https://github.com/owner/repo").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_parse_https_url_with_git_suffix() {
        let (owner, repo) = parse_repo_locator("https://github.com/owner/repo.git").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_parse_ssh_url() {
        let (owner, repo) = parse_repo_locator("git@github.com:owner/repo.git").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_repo_locator("invalid").is_err());
        assert!(parse_repo_locator("owner/repo/extra").is_err());
        assert!(parse_repo_locator("/repo").is_err());
    }

    #[test]
    fn test_with_endpoint() {
        let client = GitHubClient::with_token("octocat", "hello-world", "t")
            .with_endpoint("http://127.0.0.1:8080/graphql");
        assert_eq!(client.endpoint(), "http://127.0.0.1:8080/graphql");
        assert_eq!(client.locator(), "octocat/hello-world");
    }
}
