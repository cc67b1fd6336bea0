//! Configuration management for gazer
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (GAZER_*)
//! 3. Config file (~/.config/gazer/config.toml)
//! 4. Default values

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default GraphQL endpoint for github.com
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

/// Default number of issues fetched per page
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// GitHub-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// GraphQL endpoint (override for GitHub Enterprise)
    pub endpoint: String,

    /// Issues fetched per page
    pub page_size: u32,

    /// Repository used when no locator is given on the command line
    pub default_repository: Option<String>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            default_repository: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// GitHub configuration
    pub github: GitHubConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/gazer/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gazer").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - GAZER_ENDPOINT: GraphQL endpoint
    /// - GAZER_REPOSITORY: default repository locator
    /// - GAZER_PAGE_SIZE: issues fetched per page
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(endpoint) = std::env::var("GAZER_ENDPOINT") {
            self.github.endpoint = endpoint;
        }

        if let Ok(repo) = std::env::var("GAZER_REPOSITORY") {
            self.github.default_repository = Some(repo);
        }

        if let Ok(page_size) = std::env::var("GAZER_PAGE_SIZE") {
            match page_size.parse() {
                Ok(value) => self.github.page_size = value,
                Err(_) => tracing::warn!(page_size, "Ignoring invalid GAZER_PAGE_SIZE"),
            }
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        endpoint: Option<String>,
        repository: Option<String>,
    ) -> Self {
        if let Some(endpoint) = endpoint {
            self.github.endpoint = endpoint;
        }

        if let Some(repo) = repository {
            self.github.default_repository = Some(repo);
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        endpoint: Option<String>,
        repository: Option<String>,
    ) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(endpoint, repository))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.github.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.github.page_size, 5);
        assert!(config.github.default_repository.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default().with_cli_overrides(
            Some("https://ghe.example.com/api/graphql".to_string()),
            Some("octocat/hello-world".to_string()),
        );

        assert_eq!(
            config.github.endpoint,
            "https://ghe.example.com/api/graphql"
        );
        assert_eq!(
            config.github.default_repository,
            Some("octocat/hello-world".to_string())
        );
    }

    #[test]
    fn test_env_overrides_page_size() {
        std::env::set_var("GAZER_PAGE_SIZE", "9");
        let config = Config::default().with_env_overrides();
        assert_eq!(config.github.page_size, 9);

        // Invalid values fall back to the existing setting
        std::env::set_var("GAZER_PAGE_SIZE", "lots");
        let config = Config::default().with_env_overrides();
        assert_eq!(config.github.page_size, DEFAULT_PAGE_SIZE);

        std::env::remove_var("GAZER_PAGE_SIZE");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[github]
endpoint = "https://ghe.example.com/api/graphql"
page_size = 25
default_repository = "the-road-to-learn-react/the-road-to-learn-react"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.github.endpoint,
            "https://ghe.example.com/api/graphql"
        );
        assert_eq!(config.github.page_size, 25);
        assert_eq!(
            config.github.default_repository,
            Some("the-road-to-learn-react/the-road-to-learn-react".to_string())
        );
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[github]
page_size = 10
"#;
        let config: Config = toml::from_str(toml).unwrap();
        // endpoint should use default
        assert_eq!(config.github.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.github.page_size, 10);
    }
}
