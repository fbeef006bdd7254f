//! CLI administration tool for snaplink.
//!
//! Manages links directly in PostgreSQL without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- links list
//!
//! # Show one link
//! cargo run --bin admin -- links show aB3dE6
//!
//! # Create a link (code optional)
//! cargo run --bin admin -- links create https://example.com --code promo1
//!
//! # Delete a link
//! cargo run --bin admin -- links delete aB3dE6
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use snaplink::application::services::LinkService;
use snaplink::domain::entities::{CreateOutcome, Link};
use snaplink::infrastructure::persistence::PgLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing snaplink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links, newest first
    List,

    /// Show a single link
    Show { code: String },

    /// Create a link
    Create {
        /// Target URL (http or https)
        url: String,

        /// Custom code (6-8 alphanumeric characters)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Delete a link
    Delete {
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

type Service = LinkService<PgLinkRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let service = LinkService::new(repo);

    match action {
        LinkAction::List => list_links(&service).await,
        LinkAction::Show { code } => show_link(&service, &code).await,
        LinkAction::Create { url, code } => create_link(&service, &url, code.as_deref()).await,
        LinkAction::Delete { code, yes } => delete_link(&service, &code, yes).await,
    }
}

async fn list_links(service: &Service) -> Result<()> {
    println!("{}", "Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<9} {:>8} {:>8} {:<20} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Requests".bright_white().bold(),
        "Last click".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "-".repeat(80).bright_black());

    for link in &links {
        let last_clicked = link
            .last_clicked
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());

        // Links that were never followed are dimmed.
        let code = if link.was_clicked() {
            link.code.cyan()
        } else {
            link.code.bright_black()
        };

        println!(
            "  {:<9} {:>8} {:>8} {:<20} {}",
            code,
            link.total_clicks,
            link.creation_count,
            last_clicked,
            link.target_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());

    Ok(())
}

async fn show_link(service: &Service, code: &str) -> Result<()> {
    let link = service
        .get_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_link(&link);
    Ok(())
}

async fn create_link(service: &Service, url: &str, code: Option<&str>) -> Result<()> {
    let (link, outcome) = service
        .create_link(url, code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    match outcome {
        CreateOutcome::Created => println!("{}", "Link created".green().bold()),
        CreateOutcome::Incremented => println!(
            "{}",
            "URL already shortened, creation count bumped".yellow().bold()
        ),
    }
    println!();
    print_link(&link);

    Ok(())
}

async fn delete_link(service: &Service, code: &str, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete link '{}'?", code))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{} {}", "Deleted".green().bold(), code.cyan());
    Ok(())
}

fn print_link(link: &Link) {
    println!("  Code:           {}", link.code.cyan().bold());
    println!("  Target:         {}", link.target_url);
    println!("  Clicks:         {}", link.total_clicks);
    println!("  Creation count: {}", link.creation_count);
    println!(
        "  Last click:     {}",
        link.last_clicked
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "never".to_string())
    );
    println!("  Created:        {}", link.created_at.to_rfc3339());
    println!("  Updated:        {}", link.updated_at.to_rfc3339());
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await
                .context("Database query failed")?;

            println!("{}", "Database connection OK".green().bold());
            println!("  {}", version.bright_black());
        }
    }

    Ok(())
}
