//! Gazer Core - shared plumbing for the gazer GitHub client
//!
//! This crate provides configuration and secrets loading used by the
//! GraphQL client and the CLI.

pub mod config;
pub mod error;
pub mod secrets;

pub use config::{Config, GitHubConfig};
pub use error::{Error, Result};
pub use secrets::Secrets;
