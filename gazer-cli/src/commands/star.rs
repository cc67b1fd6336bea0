//! Star and unstar a repository

use clap::Args;
use gazer_core::Config;

use super::issues::get_client;

/// Arguments for the star and unstar commands
#[derive(Args, Debug)]
pub struct StarArgs {
    /// Repository locator (owner/repo or URL, uses configured default if omitted)
    pub locator: Option<String>,
}

impl StarArgs {
    /// Execute a star or unstar command
    pub async fn execute(&self, star: bool, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let client = get_client(self.locator.as_deref(), config)?;

        if verbose {
            println!(
                "Looking up repository {}/{}...",
                client.owner(),
                client.repo()
            );
        }

        // The mutation needs the repository node id and the current state
        let mut organization = client.fetch_issues(None, 1).await?;
        let repo = &mut organization.repository;

        if repo.viewer_has_starred == star {
            println!(
                "{}/{} is {} starred by you ({} stars).",
                client.owner(),
                client.repo(),
                if star { "already" } else { "not" },
                repo.stargazers.total_count
            );
            return Ok(());
        }

        let confirmed = if star {
            client.add_star(&repo.id).await?
        } else {
            client.remove_star(&repo.id).await?
        };

        repo.apply_star(confirmed);

        println!(
            "{} {}/{}: now {} stars.",
            if repo.viewer_has_starred {
                "Starred"
            } else {
                "Unstarred"
            },
            client.owner(),
            client.repo(),
            repo.stargazers.total_count
        );

        Ok(())
    }
}
