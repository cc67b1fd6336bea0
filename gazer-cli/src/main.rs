//! Gazer CLI - browse a repository's open issues and star it
//!
//! A command line front end for the GitHub GraphQL API.

mod commands;

use clap::{Parser, Subcommand};
use gazer_core::{Config, Secrets};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{IssuesArgs, StarArgs};

/// Gazer: open issues and stars for GitHub repositories
#[derive(Parser, Debug)]
#[command(name = "gazer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// GraphQL endpoint (overrides config and env)
    #[arg(long, global = true, env = "GAZER_ENDPOINT")]
    endpoint: Option<String>,

    /// Default repository locator (overrides config and env)
    #[arg(long, global = true, env = "GAZER_REPOSITORY")]
    repo: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// List a repository's open issues
    #[command(visible_alias = "i")]
    Issues(IssuesArgs),

    /// Star a repository
    Star(StarArgs),

    /// Remove your star from a repository
    Unstar(StarArgs),

    /// Show current configuration
    Config {
        /// Create a secrets file template at the default location
        #[arg(long)]
        init_secrets: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.endpoint.clone(), cli.repo.clone())?;

    if cli.verbose {
        tracing::info!(
            endpoint = %config.github.endpoint,
            repository = ?config.github.default_repository,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("gazer {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Issues(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Star(args)) => {
            args.execute(true, cli.verbose, &config).await?;
        }
        Some(Commands::Unstar(args)) => {
            args.execute(false, cli.verbose, &config).await?;
        }
        Some(Commands::Config { init_secrets }) => {
            if init_secrets {
                let path = Secrets::create_template()?;
                println!("Created secrets template at {}", path.display());
                return Ok(());
            }

            println!("Gazer Configuration");
            println!("===================");
            println!();
            println!("GitHub Settings:");
            println!("  endpoint: {}", config.github.endpoint);
            println!("  page_size: {}", config.github.page_size);
            println!(
                "  default_repository: {}",
                config
                    .github
                    .default_repository
                    .as_deref()
                    .unwrap_or("(not set)")
            );
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
            if let Some(path) = Secrets::default_secrets_path() {
                println!("Secrets file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - run `gazer config --init-secrets`)");
                }
            }
        }
        None => {
            println!("Gazer - open issues and stars for GitHub repositories");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
