//! List a repository's open issues

use clap::Args;
use gazer_core::Config;
use gazer_github::{GitHubClient, Organization};

/// Arguments for the issues command
#[derive(Args, Debug)]
pub struct IssuesArgs {
    /// Repository locator (owner/repo or URL, uses configured default if omitted)
    pub locator: Option<String>,

    /// Follow pagination until every open issue has been fetched
    #[arg(long)]
    pub all: bool,

    /// Resume fetching after a cursor from a previous run
    #[arg(long, conflicts_with = "all")]
    pub cursor: Option<String>,

    /// Issues per page (overrides config)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Upper bound on pages fetched with --all
    #[arg(long, default_value_t = 50)]
    pub max_pages: u32,
}

impl IssuesArgs {
    /// Execute the issues command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let client = get_client(self.locator.as_deref(), config)?;
        let page_size = self.page_size.unwrap_or(config.github.page_size);

        if verbose {
            println!(
                "Fetching open issues from {}/{}...",
                client.owner(),
                client.repo()
            );
        }

        let organization = if self.all {
            client.fetch_all_issues(page_size, self.max_pages).await?
        } else {
            client
                .fetch_issues(self.cursor.as_deref(), page_size)
                .await?
        };

        print_organization(&organization);

        Ok(())
    }
}

pub(crate) fn get_client(locator: Option<&str>, config: &Config) -> anyhow::Result<GitHubClient> {
    let locator = locator
        .or(config.github.default_repository.as_deref())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No repository specified. Pass owner/repo or set default_repository in config"
            )
        })?;

    let client = GitHubClient::from_locator(locator)?;
    Ok(client.with_endpoint(config.github.endpoint.clone()))
}

fn print_organization(organization: &Organization) {
    println!(
        "Issues from organization: {} ({})",
        organization.name, organization.url
    );

    let repo = &organization.repository;
    let starred = if repo.viewer_has_starred {
        " (starred by you)"
    } else {
        ""
    };
    println!("Repository: {} ({})", repo.name, repo.url);
    println!("Stars: {}{}", repo.stargazers.total_count, starred);
    println!();

    if repo.issues.edges.is_empty() {
        println!("No open issues.");
        return;
    }

    println!(
        "Open issues ({} of {}):",
        repo.issues.edges.len(),
        repo.issues.total_count
    );
    println!();

    for edge in &repo.issues.edges {
        let issue = &edge.node;
        println!("○ {}", issue.title);
        println!("  {}", issue.url);
        for reaction in &issue.reactions.edges {
            println!("  · {}", reaction.node.content);
        }
    }

    let info = &repo.issues.page_info;
    if info.has_next_page {
        println!();
        match &info.end_cursor {
            Some(cursor) => println!("More issues available. Resume with --cursor {}", cursor),
            None => println!("More issues available."),
        }
    }
}
